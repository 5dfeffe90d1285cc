use crate::app::{ControlEvent, CpuMonitorApp};
use crate::config::{colors, window};
use crate::system_info::{Granularity, RenderMode};
use eframe::egui::{self, Frame, Margin, RichText, Stroke};
use std::time::Instant;

/// Dark flat look shared by every widget in the window.
pub fn setup_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.spacing.item_spacing = egui::vec2(4.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 2.0);

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = colors::BACKGROUND;
    style.visuals.window_fill = colors::BACKGROUND;
    style.visuals.override_text_color = Some(colors::TEXT);

    style.visuals.widgets.inactive.bg_stroke = Stroke::NONE;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors::BUTTON_ACTIVE);
    style.visuals.widgets.active.bg_stroke = Stroke::NONE;

    ctx.set_style(style);
}

impl eframe::App for CpuMonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_if_due(Instant::now());

        if let Some(size) = self.take_resize() {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
        }

        let mut clicked = None;
        egui::CentralPanel::default()
            .frame(
                Frame::none()
                    .fill(colors::BACKGROUND)
                    .inner_margin(Margin::same(window::PADDING)),
            )
            .show(ctx, |ui| {
                clicked = controls(ui, self.render_mode(), self.granularity());

                ui.label(RichText::new(self.status()).monospace().size(12.0));

                let (response, painter) =
                    ui.allocate_painter(self.canvas().size(), egui::Sense::hover());
                self.canvas().paint(&painter, response.rect.min);
            });

        if let Some(event) = clicked {
            if self.handle(event) {
                ctx.request_repaint();
            }
        }

        ctx.request_repaint_after(self.time_until_next_tick(Instant::now()));
    }
}

/// Draws the "Mode" and "View" rows and reports which button, if any, was
/// clicked this frame.
fn controls(ui: &mut egui::Ui, mode: RenderMode, granularity: Granularity) -> Option<ControlEvent> {
    let mut clicked = None;

    egui::Grid::new("controls")
        .spacing(egui::vec2(4.0, 4.0))
        .show(ui, |ui| {
            ui.label(RichText::new("Mode:").monospace().size(12.0));
            for option in [RenderMode::Heatmap, RenderMode::Bars] {
                if toggle_button(ui, option.label(), option == mode) {
                    clicked = Some(ControlEvent::Mode(option));
                }
            }
            ui.end_row();

            ui.label(RichText::new("View:").monospace().size(12.0));
            for option in [Granularity::Threads, Granularity::Cores] {
                if toggle_button(ui, option.label(), option == granularity) {
                    clicked = Some(ControlEvent::View(option));
                }
            }
            ui.end_row();
        });

    clicked
}

fn toggle_button(ui: &mut egui::Ui, label: &str, active: bool) -> bool {
    let fill = if active {
        colors::BUTTON_ACTIVE
    } else {
        colors::BUTTON
    };
    let text = RichText::new(label)
        .monospace()
        .size(12.0)
        .color(colors::BUTTON_TEXT);
    ui.add(egui::Button::new(text).fill(fill)).clicked()
}
