use crate::system_info::RenderMode;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cpu_monitor_gui", version)]
#[command(about = "Live per-CPU utilization as bars or a heatmap")]
pub struct Cli {
    /// Start in heatmap mode instead of bar mode.
    #[arg(long)]
    pub heatmap: bool,
}

impl Cli {
    pub fn initial_mode(&self) -> RenderMode {
        if self.heatmap {
            RenderMode::Heatmap
        } else {
            RenderMode::Bars
        }
    }
}
