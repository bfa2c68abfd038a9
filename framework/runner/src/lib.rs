mod chunked;
mod cli;
mod orchestrator;
mod progress;
mod scenario;

pub mod prelude {
    pub use crate::chunked::{ChunkedRunner, ProgressObserver};
    pub use crate::cli::SuiteCli;
    pub use crate::orchestrator::{Suite, SuiteBuilder};
    pub use crate::progress::WaveProgress;
    pub use crate::scenario::{
        execute_call, BoundScenario, Scenario, ScenarioOutcome, Workload,
    };
}
