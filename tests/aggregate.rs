use cpu_monitor_gui::aggregate::{aggregate_cores, cell_values, clamp_percent};
use cpu_monitor_gui::system_info::{CpuTopology, Granularity, UtilizationSample};

#[test]
fn hyperthread_pairs_fold_to_their_busiest_thread() {
    let topology = CpuTopology::new(8, 4);
    let threads = [10.0, 90.0, 20.0, 80.0, 30.0, 70.0, 40.0, 60.0];

    assert_eq!(aggregate_cores(&threads, topology), vec![90.0, 80.0, 70.0, 60.0]);
}

#[test]
fn every_core_takes_the_max_of_its_siblings() {
    let cases: &[(usize, usize)] = &[(4, 4), (8, 4), (12, 4), (16, 4), (6, 2), (8, 1)];

    for &(threads, cores) in cases {
        let topology = CpuTopology::new(threads, cores);
        let per_thread: Vec<f32> = (0..threads).map(|i| ((i * 37) % 101) as f32).collect();
        let per_core = aggregate_cores(&per_thread, topology);

        assert_eq!(per_core.len(), cores, "{threads} threads / {cores} cores");
        for (core, &value) in per_core.iter().enumerate() {
            let expected = (0..threads / cores)
                .map(|k| per_thread[core + k * cores])
                .fold(f32::MIN, f32::max);
            assert_eq!(value, expected, "core {core} of {threads}/{cores}");
        }
    }
}

#[test]
fn irregular_topology_keeps_the_first_threads() {
    let topology = CpuTopology::new(6, 4);
    let threads = [5.0, 15.0, 25.0, 35.0, 45.0, 55.0];

    assert_eq!(topology.threads_per_core(), None);
    assert_eq!(aggregate_cores(&threads, topology), vec![5.0, 15.0, 25.0, 35.0]);
}

#[test]
fn more_cores_than_threads_uses_the_fallback() {
    let topology = CpuTopology::new(2, 4);
    assert_eq!(topology.threads_per_core(), None);
    assert_eq!(aggregate_cores(&[1.0, 2.0], topology), vec![1.0, 2.0]);
}

#[test]
fn short_readings_give_a_short_result() {
    let topology = CpuTopology::new(8, 4);

    // Cores 0 and 1 still have their first thread.
    assert_eq!(aggregate_cores(&[10.0, 20.0], topology), vec![10.0, 20.0]);
    assert!(aggregate_cores(&[], topology).is_empty());
    assert!(aggregate_cores(&[1.0, 2.0], CpuTopology::new(6, 4)).len() == 2);
}

#[test]
fn aggregation_does_not_clamp() {
    let topology = CpuTopology::new(4, 2);
    assert_eq!(aggregate_cores(&[120.0, -3.0, 5.0, -8.0], topology), vec![120.0, -3.0]);
}

#[test]
fn unknown_core_count_means_one_core_per_thread() {
    let topology = CpuTopology::new(8, 0);
    assert_eq!(topology.cores, 8);
    assert_eq!(topology.threads_per_core(), Some(1));
}

#[test]
fn cell_values_follow_granularity() {
    let topology = CpuTopology::new(4, 2);
    let sample = UtilizationSample {
        per_cpu: vec![10.0, 50.0, 30.0, 20.0, 99.0],
        overall: 27.5,
    };

    assert_eq!(
        cell_values(&sample, topology, Granularity::Threads),
        vec![10.0, 50.0, 30.0, 20.0]
    );
    assert_eq!(cell_values(&sample, topology, Granularity::Cores), vec![30.0, 50.0]);
}

#[test]
fn clamp_percent_bounds_noisy_readings() {
    assert_eq!(clamp_percent(-4.0), 0.0);
    assert_eq!(clamp_percent(42.5), 42.5);
    assert_eq!(clamp_percent(100.7), 100.0);
    assert_eq!(clamp_percent(f32::NAN), 0.0);
}
