use crate::system_info::{CpuTopology, Granularity, UtilizationSample};

/// Folds per-thread utilization into per-core utilization.
///
/// With a uniform layout, logical CPU `core + k * cores` belongs to physical
/// core `core`, and a core reports the busiest of its threads. Irregular
/// topologies fall back to the first `cores` thread readings. Readings missing
/// from `per_thread` are skipped, so a short vector gives a short result.
pub fn aggregate_cores(per_thread: &[f32], topology: CpuTopology) -> Vec<f32> {
    let Some(threads_per_core) = topology.threads_per_core() else {
        return per_thread.iter().take(topology.cores).copied().collect();
    };

    (0..topology.cores)
        .filter_map(|core| {
            (0..threads_per_core)
                .filter_map(|k| per_thread.get(core + k * topology.cores).copied())
                .reduce(f32::max)
        })
        .collect()
}

/// Values to display for one sample, one per cell at the given granularity.
pub fn cell_values(
    sample: &UtilizationSample,
    topology: CpuTopology,
    granularity: Granularity,
) -> Vec<f32> {
    match granularity {
        Granularity::Threads => sample.per_cpu.iter().take(topology.threads).copied().collect(),
        Granularity::Cores => aggregate_cores(&sample.per_cpu, topology),
    }
}

/// Clamps a reading into `0.0..=100.0`. Noisy sources may report slightly
/// out-of-range values; NaN counts as idle.
pub fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}
