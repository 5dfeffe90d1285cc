use anyhow::Context;
use clap::Parser;
use cpu_monitor_gui::app::CpuMonitorApp;
use cpu_monitor_gui::cli::Cli;
use cpu_monitor_gui::config::{UPDATE_INTERVAL, WINDOW_TITLE};
use cpu_monitor_gui::cpu_monitor::SysinfoSource;
use cpu_monitor_gui::ui::setup_style;
use eframe::egui;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = SysinfoSource::new().context("failed to read the CPU topology")?;
    let app = CpuMonitorApp::new(
        Box::new(source),
        cli.initial_mode(),
        UPDATE_INTERVAL,
        Instant::now(),
    );
    log::info!("starting in {:?} mode", app.render_mode());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(app.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            setup_style(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the monitor window: {e}"))
}
