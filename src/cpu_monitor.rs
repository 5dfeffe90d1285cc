use crate::system_info::{CpuTopology, UtilizationSample};
use anyhow::bail;
use std::time::{Duration, Instant};
use sysinfo::System;

/// Where CPU readings come from. Polls never block: each one reports the
/// utilization accumulated since the previous poll.
pub trait MetricsSource {
    fn logical_count(&self) -> usize;

    /// Falls back to the logical count when physical cores are unknown.
    fn physical_count(&self) -> usize;

    fn poll(&mut self) -> UtilizationSample;

    /// The first reading after startup has nothing to diff against, so it is
    /// taken once and thrown away before sampling begins.
    fn prime(&mut self) {
        let _ = self.poll();
    }

    fn topology(&self) -> CpuTopology {
        CpuTopology::new(self.logical_count(), self.physical_count())
    }
}

pub struct SysinfoSource {
    system: System,
    physical: Option<usize>,
}

impl SysinfoSource {
    pub fn new() -> anyhow::Result<Self> {
        let mut system = System::new();
        system.refresh_cpu_all();
        if system.cpus().is_empty() {
            bail!("the operating system reported no CPUs");
        }
        let physical = system.physical_core_count();
        Ok(SysinfoSource { system, physical })
    }
}

impl MetricsSource for SysinfoSource {
    fn logical_count(&self) -> usize {
        self.system.cpus().len()
    }

    fn physical_count(&self) -> usize {
        self.physical.unwrap_or_else(|| self.logical_count())
    }

    fn poll(&mut self) -> UtilizationSample {
        self.system.refresh_cpu_usage();
        UtilizationSample {
            per_cpu: self.system.cpus().iter().map(|cpu| cpu.cpu_usage()).collect(),
            overall: self.system.global_cpu_usage(),
        }
    }
}

/// Deadline of the next sampling tick.
///
/// The next deadline is only set once a tick has finished, so ticks never
/// overlap and a slow tick pushes the following one back.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    period: Duration,
    next_due: Instant,
}

impl TickSchedule {
    pub fn new(period: Duration, now: Instant) -> Self {
        TickSchedule {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    pub fn reschedule(&mut self, completed_at: Instant) {
        self.next_due = completed_at + self.period;
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
