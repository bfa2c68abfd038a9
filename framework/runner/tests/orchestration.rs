use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy_primitives::U256;
use dyno_core::prelude::{
    CallError, Confirmation, ContractCall, PendingCall, ScenarioConfig, SummarySink, TaskResult,
};
use dyno_runner::prelude::{BoundScenario, Scenario, ScenarioOutcome, SuiteBuilder, Workload};
use dyno_summary_model::RunRecord;
use futures::future::BoxFuture;
use futures::FutureExt;
use pretty_assertions::assert_eq;
use tokio::time::Instant;

#[derive(Debug, Default)]
struct MemorySink {
    lines: Vec<String>,
}

impl SummarySink for MemorySink {
    fn append(&mut self, line: &str) -> std::io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

struct FailingSink;

impl SummarySink for FailingSink {
    fn append(&mut self, _line: &str) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "sink unavailable",
        ))
    }
}

struct TestWorkload {
    name: String,
    config: ScenarioConfig,
}

impl TestWorkload {
    fn new(name: &str, total_tasks: usize, chunk_size: usize, delay_ms: u64) -> Self {
        Self {
            name: name.to_string(),
            config: ScenarioConfig::new(
                total_tasks,
                chunk_size,
                Duration::from_millis(delay_ms),
                300_000,
            )
            .unwrap(),
        }
    }
}

impl Workload for TestWorkload {
    type Args = (usize, u32);

    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    fn args(&self, index: usize, run_index: u32) -> Self::Args {
        (index, run_index)
    }
}

/// Settles instantly with a fixed confirmation.
struct SettledCall {
    confirmation: Confirmation,
}

impl PendingCall for SettledCall {
    fn confirm(self: Box<Self>) -> BoxFuture<'static, Result<Confirmation, CallError>> {
        let confirmation = self.confirmation;
        async move { Ok(confirmation) }.boxed()
    }
}

/// Records every submission and fails the scripted task indices.
struct ScriptedCall {
    name: String,
    journal: Arc<Mutex<Vec<String>>>,
    failing: HashSet<usize>,
}

impl ScriptedCall {
    fn new(name: &str, journal: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            journal,
            failing: HashSet::new(),
        }
    }

    fn failing_at(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.failing = indices.into_iter().collect();
        self
    }
}

impl ContractCall for ScriptedCall {
    type Args = (usize, u32);

    fn submit(
        &self,
        (index, run_index): Self::Args,
        _gas_limit: u64,
    ) -> BoxFuture<'_, Result<Box<dyn PendingCall>, CallError>> {
        async move {
            self.journal
                .lock()
                .unwrap()
                .push(format!("{}:run{}:task{}", self.name, run_index, index));

            if self.failing.contains(&index) {
                return Err(CallError::Submission {
                    reason: "scripted failure".to_string(),
                });
            }

            Ok(Box::new(SettledCall {
                confirmation: Confirmation {
                    succeeded: true,
                    gas_used: 21_000,
                    gas_price: U256::from(2),
                },
            }) as Box<dyn PendingCall>)
        }
        .boxed()
    }
}

fn record_label(record: &RunRecord) -> String {
    match record {
        RunRecord::Summary(summary) => {
            format!("summary:{}:run{}", summary.scenario_name, summary.run_index)
        }
        RunRecord::Skipped {
            scenario_name,
            run_index,
            ..
        } => format!("skipped:{}:run{}", scenario_name, run_index),
        RunRecord::SuiteStarted { .. } => "suite_started".to_string(),
        RunRecord::SuiteFinished { .. } => "suite_finished".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn scenarios_execute_in_declared_order_across_runs() {
    let journal = Arc::new(Mutex::new(Vec::new()));

    let suite = SuiteBuilder::new("testnet")
        .with_runs(2)
        .with_inter_scenario_pause(Duration::from_millis(10))
        .with_progress(false)
        .add_scenario(Box::new(BoundScenario::new(
            TestWorkload::new("alpha", 2, 2, 0),
            ScriptedCall::new("alpha", journal.clone()),
        )))
        .add_scenario(Box::new(BoundScenario::new(
            TestWorkload::new("beta", 2, 2, 0),
            ScriptedCall::new("beta", journal.clone()),
        )))
        .build()
        .unwrap();

    let mut sink = MemorySink::default();
    let records = suite.run(&mut sink).await.unwrap();

    let submissions = journal.lock().unwrap().clone();
    assert_eq!(
        submissions,
        vec![
            "alpha:run1:task0",
            "alpha:run1:task1",
            "beta:run1:task0",
            "beta:run1:task1",
            "alpha:run2:task0",
            "alpha:run2:task1",
            "beta:run2:task0",
            "beta:run2:task1",
        ]
    );

    let labels = records.iter().map(record_label).collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            "suite_started",
            "summary:alpha:run1",
            "summary:beta:run1",
            "summary:alpha:run2",
            "summary:beta:run2",
            "suite_finished",
        ]
    );

    // One persisted line per record.
    assert_eq!(sink.lines.len(), records.len());
}

#[tokio::test(start_paused = true)]
async fn skipped_scenario_keeps_its_slot_in_the_sequence() {
    let journal = Arc::new(Mutex::new(Vec::new()));

    let suite = SuiteBuilder::new("testnet")
        .with_runs(1)
        .with_inter_scenario_pause(Duration::from_secs(2))
        .with_progress(false)
        .add_scenario(Box::new(BoundScenario::<_, ScriptedCall>::unbound(
            TestWorkload::new("alpha", 2, 2, 0),
            "MyERC20 address not configured for testnet",
        )))
        .add_scenario(Box::new(BoundScenario::new(
            TestWorkload::new("beta", 2, 2, 0),
            ScriptedCall::new("beta", journal.clone()),
        )))
        .build()
        .unwrap();

    let mut sink = MemorySink::default();
    let started = Instant::now();
    let records = suite.run(&mut sink).await.unwrap();

    // The skip still pauses before the next scenario runs.
    assert_eq!(started.elapsed(), Duration::from_secs(2));

    let labels = records.iter().map(record_label).collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            "suite_started",
            "skipped:alpha:run1",
            "summary:beta:run1",
            "suite_finished",
        ]
    );

    let submissions = journal.lock().unwrap().clone();
    assert_eq!(submissions, vec!["beta:run1:task0", "beta:run1:task1"]);

    match &records[1] {
        RunRecord::Skipped { reason, .. } => {
            assert_eq!(reason, "MyERC20 address not configured for testnet");
        }
        record => panic!("expected a skip record, got {:?}", record),
    }
}

#[tokio::test(start_paused = true)]
async fn partial_failure_is_reported_not_raised() {
    let journal = Arc::new(Mutex::new(Vec::new()));

    let suite = SuiteBuilder::new("testnet")
        .with_runs(1)
        .with_progress(false)
        .add_scenario(Box::new(BoundScenario::new(
            TestWorkload::new("alpha", 5, 2, 100),
            ScriptedCall::new("alpha", journal.clone()).failing_at([1, 3]),
        )))
        .build()
        .unwrap();

    let mut sink = MemorySink::default();
    let records = suite.run(&mut sink).await.unwrap();

    let summary = records
        .iter()
        .find_map(|record| match record {
            RunRecord::Summary(summary) => Some(summary),
            _ => None,
        })
        .expect("expected one summary");

    assert_eq!(summary.success_count, 3);
    assert_eq!(summary.total_count, 5);
    // Three waves separated by two 100ms delays, measured on virtual time.
    assert_eq!(summary.duration_seconds, 0.2);
    assert!((summary.throughput - 15.0).abs() < 1e-9);
    assert_eq!(summary.avg_gas_used, U256::from(21_000));
    assert_eq!(summary.avg_total_cost, U256::from(42_000));
}

#[tokio::test]
async fn failed_task_positions_are_preserved() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let scenario = BoundScenario::new(
        TestWorkload::new("alpha", 5, 2, 0),
        ScriptedCall::new("alpha", journal).failing_at([1, 3]),
    );

    let outcome = scenario.run_once(1, None).await;

    let results = match outcome {
        ScenarioOutcome::Completed { results } => results,
        ScenarioOutcome::Skipped { reason } => panic!("unexpected skip: {}", reason),
    };

    let flags = results.iter().map(TaskResult::is_success).collect::<Vec<_>>();
    assert_eq!(flags, vec![true, false, true, false, true]);
}

#[tokio::test]
async fn sink_failures_do_not_abort_the_run() {
    let journal = Arc::new(Mutex::new(Vec::new()));

    let suite = SuiteBuilder::new("testnet")
        .with_runs(1)
        .with_inter_scenario_pause(Duration::ZERO)
        .with_progress(false)
        .add_scenario(Box::new(BoundScenario::new(
            TestWorkload::new("alpha", 2, 2, 0),
            ScriptedCall::new("alpha", journal),
        )))
        .build()
        .unwrap();

    let records = suite.run(&mut FailingSink).await.unwrap();
    assert_eq!(records.len(), 3);
}

#[test]
fn a_suite_without_scenarios_is_a_configuration_error() {
    let result = SuiteBuilder::new("testnet").build();
    assert!(result.is_err());
}

#[test]
fn a_suite_without_runs_is_a_configuration_error() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let result = SuiteBuilder::new("testnet")
        .with_runs(0)
        .add_scenario(Box::new(BoundScenario::new(
            TestWorkload::new("alpha", 1, 1, 0),
            ScriptedCall::new("alpha", journal),
        )))
        .build();
    assert!(result.is_err());
}
