use std::time::Duration;

use dyno_core::prelude::SummarySink;
use dyno_instruments::{aggregate, ScenarioRow, SummaryTable};
use dyno_summary_model::{format_record, RunRecord, RunSummary};
use tokio::time::Instant;

use crate::chunked::ProgressObserver;
use crate::progress::WaveProgress;
use crate::scenario::{Scenario, ScenarioOutcome};

/// The builder for a benchmark suite.
///
/// This must be used to declare the scenarios you want to run, in the order
/// they should execute, before the suite is started.
pub struct SuiteBuilder {
    network: String,
    runs: u32,
    inter_scenario_pause: Duration,
    show_progress: bool,
    scenarios: Vec<Box<dyn Scenario>>,
}

impl SuiteBuilder {
    pub fn new(network: &str) -> Self {
        Self {
            network: network.to_string(),
            runs: 3,
            inter_scenario_pause: Duration::from_secs(2),
            show_progress: true,
            scenarios: Vec::new(),
        }
    }

    /// Set the number of times the full scenario sequence repeats.
    pub fn with_runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    /// Set the pause inserted between scenario executions.
    pub fn with_inter_scenario_pause(mut self, pause: Duration) -> Self {
        self.inter_scenario_pause = pause;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Append a scenario to the execution sequence.
    pub fn add_scenario(mut self, scenario: Box<dyn Scenario>) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Validate and build the suite.
    ///
    /// Configuration errors surface here, before any task is submitted, and
    /// abort the whole run rather than being recorded as task failures.
    pub fn build(self) -> anyhow::Result<Suite> {
        if self.runs == 0 {
            anyhow::bail!("a suite must execute at least one run");
        }
        if self.scenarios.is_empty() {
            anyhow::bail!("a suite must declare at least one scenario");
        }

        Ok(Suite {
            run_id: nanoid::nanoid!(),
            network: self.network,
            runs: self.runs,
            inter_scenario_pause: self.inter_scenario_pause,
            show_progress: self.show_progress,
            scenarios: self.scenarios,
        })
    }
}

/// Runs every declared scenario `runs` times: runs execute sequentially,
/// and within a run the scenarios execute sequentially in declared order.
/// One record is persisted per scenario execution.
pub struct Suite {
    run_id: String,
    network: String,
    runs: u32,
    inter_scenario_pause: Duration,
    show_progress: bool,
    scenarios: Vec<Box<dyn Scenario>>,
}

impl Suite {
    /// The unique id stamped on every record of this suite execution.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub async fn run(&self, sink: &mut dyn SummarySink) -> anyhow::Result<Vec<RunRecord>> {
        let mut records = Vec::new();
        let mut table = SummaryTable::new();

        log::info!(
            "Starting all benchmarks for network {} ({} runs)",
            self.network,
            self.runs
        );
        let started = RunRecord::SuiteStarted {
            run_id: self.run_id.clone(),
            network: self.network.clone(),
            runs: self.runs,
            started_at: chrono::Utc::now().to_rfc3339(),
        };
        self.persist(sink, &started);
        records.push(started);

        for run_index in 1..=self.runs {
            log::info!(
                "Executing run {}/{} on {}",
                run_index,
                self.runs,
                self.network
            );

            for (position, scenario) in self.scenarios.iter().enumerate() {
                let record = self
                    .execute_scenario(scenario.as_ref(), run_index, &mut table)
                    .await;
                self.persist(sink, &record);
                records.push(record);

                // A skipped scenario still occupies its slot in the
                // sequence, so the pause applies either way.
                let last_slot =
                    run_index == self.runs && position == self.scenarios.len() - 1;
                if !last_slot {
                    tokio::time::sleep(self.inter_scenario_pause).await;
                }
            }
        }

        let finished = RunRecord::SuiteFinished {
            run_id: self.run_id.clone(),
            network: self.network.clone(),
            finished_at: chrono::Utc::now().to_rfc3339(),
        };
        self.persist(sink, &finished);
        records.push(finished);

        log::info!("Finished all benchmarks for network {}", self.network);
        if !table.is_empty() {
            println!("\nSummary of scenario executions");
            println!("{}", table.render());
        }

        Ok(records)
    }

    async fn execute_scenario(
        &self,
        scenario: &dyn Scenario,
        run_index: u32,
        table: &mut SummaryTable,
    ) -> RunRecord {
        let mut progress = self
            .show_progress
            .then(|| WaveProgress::start(scenario.name(), scenario.total_tasks()));

        let started = Instant::now();
        let outcome = scenario
            .run_once(
                run_index,
                progress.as_mut().map(|p| p as &mut dyn ProgressObserver),
            )
            .await;
        let duration = started.elapsed();

        if let Some(progress) = progress {
            progress.finish();
        }

        match outcome {
            ScenarioOutcome::Completed { results } => {
                let stats = aggregate(&results, scenario.total_tasks(), duration);
                log::info!(
                    "{} (run {}): {}/{} succeeded in {:.2}s, {:.2} tps",
                    scenario.name(),
                    run_index,
                    stats.success_count,
                    stats.total_count,
                    stats.duration_seconds,
                    stats.throughput,
                );
                table.push(ScenarioRow::new(scenario.name(), run_index, &stats));

                RunRecord::Summary(RunSummary {
                    run_id: self.run_id.clone(),
                    network: self.network.clone(),
                    scenario_name: scenario.name().to_string(),
                    run_index,
                    success_count: stats.success_count,
                    total_count: stats.total_count,
                    duration_seconds: stats.duration_seconds,
                    throughput: stats.throughput,
                    avg_gas_used: stats.avg_gas_used,
                    avg_gas_price: stats.avg_gas_price,
                    avg_total_cost: stats.avg_total_cost,
                })
            }
            ScenarioOutcome::Skipped { reason } => {
                log::warn!(
                    "Skipping {} (run {}): {}",
                    scenario.name(),
                    run_index,
                    reason
                );

                RunRecord::Skipped {
                    run_id: self.run_id.clone(),
                    network: self.network.clone(),
                    scenario_name: scenario.name().to_string(),
                    run_index,
                    reason,
                }
            }
        }
    }

    fn persist(&self, sink: &mut dyn SummarySink, record: &RunRecord) {
        // The sink is best effort. Don't fail a benchmark over a log line.
        match format_record(record) {
            Ok(line) => {
                if let Err(error) = sink.append(&line) {
                    log::warn!("Failed to append run record: {}", error);
                }
            }
            Err(error) => log::warn!("Failed to serialize run record: {}", error),
        }
    }
}
