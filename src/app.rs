use crate::aggregate::cell_values;
use crate::canvas::CanvasLayout;
use crate::config::window;
use crate::cpu_monitor::{MetricsSource, TickSchedule};
use crate::system_info::{CpuTopology, Granularity, RenderMode, UtilizationSample};
use eframe::egui::{vec2, Vec2};
use std::time::{Duration, Instant};

/// A click on one of the mode/view buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Mode(RenderMode),
    View(Granularity),
}

/// Everything the window shows, owned by the UI thread.
pub struct CpuMonitorApp {
    source: Box<dyn MetricsSource>,
    topology: CpuTopology,
    render_mode: RenderMode,
    granularity: Granularity,
    canvas: CanvasLayout,
    schedule: TickSchedule,
    last_sample: Option<UtilizationSample>,
    status: String,
    resize_pending: bool,
}

impl CpuMonitorApp {
    pub fn new(
        mut source: Box<dyn MetricsSource>,
        render_mode: RenderMode,
        period: Duration,
        now: Instant,
    ) -> Self {
        let topology = source.topology();
        log::info!(
            "{} logical CPUs on {} physical cores",
            topology.threads,
            topology.cores
        );
        if topology.threads_per_core().is_none() {
            log::warn!(
                "irregular CPU topology ({} threads / {} cores), core view shows the first {} threads",
                topology.threads,
                topology.cores,
                topology.cores
            );
        }

        source.prime();

        let granularity = Granularity::default();
        CpuMonitorApp {
            source,
            topology,
            render_mode,
            granularity,
            canvas: CanvasLayout::build(render_mode, topology.cell_count(granularity)),
            schedule: TickSchedule::new(period, now),
            last_sample: None,
            status: String::new(),
            resize_pending: false,
        }
    }

    pub fn topology(&self) -> CpuTopology {
        self.topology
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn canvas(&self) -> &CanvasLayout {
        &self.canvas
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn last_sample(&self) -> Option<&UtilizationSample> {
        self.last_sample.as_ref()
    }

    /// Runs a tick if its deadline has passed. Returns whether one ran.
    pub fn poll_if_due(&mut self, now: Instant) -> bool {
        if !self.schedule.is_due(now) {
            return false;
        }
        self.sample();
        self.schedule.reschedule(Instant::now());
        true
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Duration {
        self.schedule.time_until_due(now)
    }

    /// Polls the source once and pushes the reading to the status line and
    /// the active canvas.
    pub fn sample(&mut self) {
        let sample = self.source.poll();
        log::debug!("overall CPU {:.1}%", sample.overall);
        self.status = format_status(sample.overall, self.topology);
        self.canvas.apply(&cell_values(&sample, self.topology, self.granularity));
        self.last_sample = Some(sample);
    }

    pub fn handle(&mut self, event: ControlEvent) -> bool {
        match event {
            ControlEvent::Mode(mode) => self.set_render_mode(mode),
            ControlEvent::View(granularity) => self.set_granularity(granularity),
        }
    }

    /// Returns whether the canvas was rebuilt.
    pub fn set_render_mode(&mut self, mode: RenderMode) -> bool {
        if self.render_mode == mode {
            log::trace!("render mode already {:?}", mode);
            return false;
        }
        log::info!("render mode {:?} -> {:?}", self.render_mode, mode);
        self.render_mode = mode;
        self.rebuild_canvas();
        true
    }

    /// Returns whether the canvas was rebuilt.
    pub fn set_granularity(&mut self, granularity: Granularity) -> bool {
        if self.granularity == granularity {
            log::trace!("granularity already {:?}", granularity);
            return false;
        }
        log::info!("granularity {:?} -> {:?}", self.granularity, granularity);
        self.granularity = granularity;
        self.rebuild_canvas();
        true
    }

    fn rebuild_canvas(&mut self) {
        let cell_count = self.topology.cell_count(self.granularity);
        self.canvas = CanvasLayout::build(self.render_mode, cell_count);
        if let Some(sample) = &self.last_sample {
            self.canvas.apply(&cell_values(sample, self.topology, self.granularity));
        }
        self.resize_pending = true;
    }

    /// Window size needed for the current canvas, if it changed since the
    /// last call.
    pub fn take_resize(&mut self) -> Option<Vec2> {
        if !std::mem::take(&mut self.resize_pending) {
            return None;
        }
        Some(self.window_size())
    }

    pub fn window_size(&self) -> Vec2 {
        let canvas = self.canvas.size();
        vec2(
            (canvas.x + 2.0 * window::PADDING).max(window::MIN_WIDTH),
            canvas.y + window::CONTROLS_HEIGHT,
        )
    }
}

pub fn format_status(overall: f32, topology: CpuTopology) -> String {
    format!(
        "CPU: {:5.1}%   Cores: {}   Threads: {}",
        overall, topology.cores, topology.threads
    )
}
