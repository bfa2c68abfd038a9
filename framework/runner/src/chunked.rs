use std::cmp::min;
use std::future::Future;
use std::time::Duration;

use dyno_core::prelude::{ScenarioConfig, TaskResult};
use futures::future::join_all;

/// Receives cumulative progress after each completed wave.
///
/// Advisory only; the schedule does not depend on it.
pub trait ProgressObserver: Send {
    fn waves_completed(&mut self, processed: usize, total: usize);
}

/// Executes a fixed number of tasks in fixed-size concurrent waves with a
/// fixed pause between waves.
///
/// The runner never fails: each task future settles to its own
/// [`TaskResult`], every outcome is collected, and one failed call cannot
/// short-circuit the rest of its wave. The fixed pause is the only
/// rate-limiting mechanism; nothing adapts to observed latency or errors.
#[derive(Debug, Clone)]
pub struct ChunkedRunner {
    chunk_size: usize,
    inter_chunk_delay: Duration,
}

impl ChunkedRunner {
    pub fn new(chunk_size: usize, inter_chunk_delay: Duration) -> Self {
        Self {
            // A zero-size wave cannot make progress.
            chunk_size: chunk_size.max(1),
            inter_chunk_delay,
        }
    }

    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self::new(config.chunk_size(), config.inter_chunk_delay())
    }

    /// Run `total_tasks` tasks, a wave at a time, in index order.
    ///
    /// All futures of a wave are created before any is awaited, and a wave
    /// completes only once every one of them has settled. After each wave
    /// except the last the runner sleeps for the configured delay.
    pub async fn run<F, Fut>(
        &self,
        total_tasks: usize,
        run_index: u32,
        task_factory: F,
        mut progress: Option<&mut dyn ProgressObserver>,
    ) -> Vec<TaskResult>
    where
        F: Fn(usize, u32) -> Fut,
        Fut: Future<Output = TaskResult>,
    {
        let mut results = Vec::with_capacity(total_tasks);
        let mut issued = 0;

        while issued < total_tasks {
            let wave_end = min(issued + self.chunk_size, total_tasks);
            let wave: Vec<_> = (issued..wave_end)
                .map(|index| task_factory(index, run_index))
                .collect();
            results.extend(join_all(wave).await);
            issued = wave_end;

            if let Some(observer) = progress.as_mut() {
                observer.waves_completed(issued, total_tasks);
            }

            if issued < total_tasks {
                tokio::time::sleep(self.inter_chunk_delay).await;
            }
        }

        results
    }
}
