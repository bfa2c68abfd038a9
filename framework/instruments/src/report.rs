use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::aggregate::RunStats;

#[derive(Tabled)]
pub struct ScenarioRow {
    pub scenario: String,
    pub run: u32,
    pub success: String,
    #[tabled(display = "float2")]
    pub duration_s: f64,
    #[tabled(display = "float2")]
    pub tps: f64,
    pub avg_gas: String,
}

impl ScenarioRow {
    pub fn new(scenario: &str, run_index: u32, stats: &RunStats) -> Self {
        Self {
            scenario: scenario.to_string(),
            run: run_index,
            success: format!("{}/{}", stats.success_count, stats.total_count),
            duration_s: stats.duration_seconds,
            tps: stats.throughput,
            avg_gas: stats.avg_gas_used.to_string(),
        }
    }
}

fn float2(n: &f64) -> String {
    format!("{:.2}", n)
}

/// Collects one row per completed scenario execution and renders them as a
/// table once the suite has finished.
#[derive(Default)]
pub struct SummaryTable {
    rows: Vec<ScenarioRow>,
}

impl SummaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ScenarioRow) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut table = Table::new(&self.rows);
        table.with(Style::modern());
        table.to_string()
    }
}
