mod call;
mod config;
mod error;
mod result;
mod sink;

pub mod prelude {
    pub use crate::call::{ContractCall, PendingCall};
    pub use crate::config::ScenarioConfig;
    pub use crate::error::{CallError, ConfigError};
    pub use crate::result::{Confirmation, TaskResult};
    pub use crate::sink::SummarySink;
}
