use std::sync::Arc;

use dyno_core::prelude::{ContractCall, ScenarioConfig, TaskResult};
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::chunked::{ChunkedRunner, ProgressObserver};

/// A workload type: how to synthesize the call arguments for each task of a
/// scenario.
///
/// Arguments must be derived deterministically from the task index and the
/// run number, so that repeated runs do not collide on state where
/// collisions matter and so any individual call can be reconstructed when
/// debugging.
pub trait Workload: Send + Sync {
    type Args: Send + 'static;

    /// Scenario name as it appears in persisted records.
    fn name(&self) -> &str;

    fn config(&self) -> &ScenarioConfig;

    fn args(&self, index: usize, run_index: u32) -> Self::Args;
}

/// How one scenario execution ended.
#[derive(Debug)]
pub enum ScenarioOutcome {
    Completed { results: Vec<TaskResult> },
    /// The scenario had no target binding and did no work.
    Skipped { reason: String },
}

enum Binding<C> {
    Bound(Arc<C>),
    Unconfigured { reason: String },
}

/// A workload paired with the contract binding it drives.
///
/// A scenario registered without a binding (for example when the target
/// contract has no address configured on the current network) reports
/// itself as skipped instead of silently running zero tasks.
pub struct BoundScenario<W, C> {
    workload: W,
    binding: Binding<C>,
}

impl<W, C> BoundScenario<W, C> {
    pub fn new(workload: W, call: C) -> Self {
        Self {
            workload,
            binding: Binding::Bound(Arc::new(call)),
        }
    }

    pub fn unbound(workload: W, reason: impl Into<String>) -> Self {
        Self {
            workload,
            binding: Binding::Unconfigured {
                reason: reason.into(),
            },
        }
    }
}

/// Object-safe face of a runnable scenario, as the orchestrator sees it.
pub trait Scenario: Send + Sync {
    fn name(&self) -> &str;

    fn total_tasks(&self) -> usize;

    fn run_once<'a>(
        &'a self,
        run_index: u32,
        progress: Option<&'a mut dyn ProgressObserver>,
    ) -> BoxFuture<'a, ScenarioOutcome>;
}

impl<W, C> Scenario for BoundScenario<W, C>
where
    W: Workload,
    C: ContractCall<Args = W::Args> + 'static,
{
    fn name(&self) -> &str {
        self.workload.name()
    }

    fn total_tasks(&self) -> usize {
        self.workload.config().total_tasks()
    }

    fn run_once<'a>(
        &'a self,
        run_index: u32,
        progress: Option<&'a mut dyn ProgressObserver>,
    ) -> BoxFuture<'a, ScenarioOutcome> {
        async move {
            let call = match &self.binding {
                Binding::Bound(call) => call,
                Binding::Unconfigured { reason } => {
                    return ScenarioOutcome::Skipped {
                        reason: reason.clone(),
                    };
                }
            };

            let config = self.workload.config();
            let gas_limit = config.gas_limit();
            let results = ChunkedRunner::from_config(config)
                .run(
                    config.total_tasks(),
                    run_index,
                    |index, run| {
                        let args = self.workload.args(index, run);
                        let call = call.clone();
                        async move { execute_call(call.as_ref(), args, gas_limit).await }
                    },
                    progress,
                )
                .await;

            ScenarioOutcome::Completed { results }
        }
        .boxed()
    }
}

/// Submit one call and wait for its confirmation, fixing the outcome at
/// this boundary: any failure becomes a failure result and is never
/// propagated to the scheduler.
pub async fn execute_call<C>(call: &C, args: C::Args, gas_limit: u64) -> TaskResult
where
    C: ContractCall + ?Sized,
{
    let pending = match call.submit(args, gas_limit).await {
        Ok(pending) => pending,
        Err(error) => return TaskResult::Failure(error),
    };

    match pending.confirm().await {
        Ok(confirmation) => confirmation.into(),
        Err(error) => TaskResult::Failure(error),
    }
}
