use cpu_monitor_gui::cpu_monitor::MetricsSource;
use cpu_monitor_gui::system_info::UtilizationSample;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// In-memory source replaying canned readings. Once the script runs out it
/// keeps returning the last reading.
pub struct ScriptedSource {
    pub threads: usize,
    pub cores: usize,
    pub samples: VecDeque<UtilizationSample>,
    pub polls: Rc<Cell<usize>>,
    last: UtilizationSample,
}

impl ScriptedSource {
    pub fn new(threads: usize, cores: usize) -> Self {
        ScriptedSource {
            threads,
            cores,
            samples: VecDeque::new(),
            polls: Rc::new(Cell::new(0)),
            last: UtilizationSample::default(),
        }
    }

    pub fn with_sample(mut self, per_cpu: &[f32], overall: f32) -> Self {
        self.samples.push_back(UtilizationSample {
            per_cpu: per_cpu.to_vec(),
            overall,
        });
        self
    }
}

impl MetricsSource for ScriptedSource {
    fn logical_count(&self) -> usize {
        self.threads
    }

    fn physical_count(&self) -> usize {
        self.cores
    }

    fn poll(&mut self) -> UtilizationSample {
        self.polls.set(self.polls.get() + 1);
        if let Some(next) = self.samples.pop_front() {
            self.last = next;
        }
        self.last.clone()
    }
}
