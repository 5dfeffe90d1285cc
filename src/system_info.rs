/// Logical/physical CPU counts, queried once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuTopology {
    pub threads: usize,
    pub cores: usize,
}

impl CpuTopology {
    /// A core count of zero means the OS could not report physical cores;
    /// every thread is then treated as its own core.
    pub fn new(threads: usize, cores: usize) -> Self {
        let cores = if cores == 0 { threads } else { cores };
        CpuTopology { threads, cores }
    }

    /// Number of hardware threads per core when logical IDs are laid out
    /// uniformly (`core + k * cores`), `None` for irregular topologies.
    pub fn threads_per_core(&self) -> Option<usize> {
        if self.cores == 0 || self.threads < self.cores || self.threads % self.cores != 0 {
            return None;
        }
        Some(self.threads / self.cores)
    }

    pub fn cell_count(&self, granularity: Granularity) -> usize {
        match granularity {
            Granularity::Threads => self.threads,
            Granularity::Cores => self.cores,
        }
    }
}

/// One poll of the metrics source. Only the latest sample is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtilizationSample {
    pub per_cpu: Vec<f32>,
    pub overall: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Threads,
    Cores,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Bars,
    Heatmap,
}

impl Granularity {
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Threads => "Threads",
            Granularity::Cores => "Cores",
        }
    }
}

impl RenderMode {
    pub fn label(&self) -> &'static str {
        match self {
            RenderMode::Bars => "Bars",
            RenderMode::Heatmap => "Heatmap",
        }
    }
}
