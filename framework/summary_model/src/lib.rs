use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use dyno_core::prelude::SummarySink;

/// Summary of one scenario execution within a run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    /// The unique id of the suite execution this summary belongs to
    ///
    /// Chosen by the orchestrator. Shared by every record of one suite
    /// execution.
    pub run_id: String,
    /// The network the suite ran against
    pub network: String,
    /// The name of the scenario that was executed
    pub scenario_name: String,
    /// Which repetition of the suite this summary belongs to, starting at 1
    pub run_index: u32,
    /// Number of tasks that were confirmed successfully
    pub success_count: usize,
    /// Number of tasks that were scheduled
    pub total_count: usize,
    /// Wall-clock span of the whole scenario execution, in seconds
    ///
    /// Covers every wave and every inter-wave delay.
    pub duration_seconds: f64,
    /// Successful tasks per second, 0 when nothing succeeded
    pub throughput: f64,
    /// Average gas consumed per successful task
    pub avg_gas_used: U256,
    /// Average effective gas price per successful task, in wei
    pub avg_gas_price: U256,
    /// Average total cost per successful task, in wei
    ///
    /// Averaged over the per-task product of gas used and gas price, which
    /// is not the same as the product of the two other averages.
    pub avg_total_cost: U256,
}

/// One persisted line of benchmark output
///
/// A scenario that skipped produces a [`RunRecord::Skipped`] entry rather
/// than a summary with zero counts, so the two cases stay distinguishable
/// in the output file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunRecord {
    Summary(RunSummary),
    Skipped {
        run_id: String,
        network: String,
        scenario_name: String,
        run_index: u32,
        reason: String,
    },
    SuiteStarted {
        run_id: String,
        network: String,
        runs: u32,
        started_at: String,
    },
    SuiteFinished {
        run_id: String,
        network: String,
        finished_at: String,
    },
}

/// Serialize a record to its single-line JSON form
pub fn format_record(record: &RunRecord) -> anyhow::Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Append the record to a file
///
/// The record will be serialized to JSON and output as a single line
/// followed by a newline. The recommended file extension is `.jsonl`.
pub fn append_record(record: &RunRecord, path: PathBuf) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;
    serde_json::to_writer(&mut file, record)?;
    let _ = file.write("\n".as_bytes())?;
    Ok(())
}

/// Load records from a file
///
/// The file should contain one JSON object per line. This is the format
/// produced by [append_record] and [FileSummarySink].
pub fn load_records(path: PathBuf) -> anyhow::Result<Vec<RunRecord>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let record: RunRecord = serde_json::from_str(&line)?;
        records.push(record);
    }
    Ok(records)
}

/// Append-only file sink for formatted run records
pub struct FileSummarySink {
    file: std::fs::File,
}

impl FileSummarySink {
    pub fn open(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path.as_ref())?;
        Ok(Self { file })
    }
}

impl SummarySink for FileSummarySink {
    fn append(&mut self, line: &str) -> std::io::Result<()> {
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")
    }
}
