use alloy_primitives::U256;

use crate::error::CallError;

/// The settled outcome of one submitted contract call.
///
/// A result is fixed at the moment the call settles: either the submission
/// and its confirmation both succeeded, or some step along the way failed.
/// The distinction is carried by the variant, never inferred later from
/// which fields happen to be populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// The call was confirmed with a success status.
    Success {
        /// Gas consumed by the call, as reported by the confirmation.
        gas_used: u64,
        /// Effective price paid per unit of gas, in wei.
        gas_price: U256,
    },
    /// The call failed between submission and confirmation.
    Failure(CallError),
}

impl TaskResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskResult::Success { .. })
    }

    /// Total cost of a successful call, `gas_used * gas_price`.
    pub fn cost(&self) -> Option<U256> {
        match self {
            TaskResult::Success {
                gas_used,
                gas_price,
            } => Some(U256::from(*gas_used) * *gas_price),
            TaskResult::Failure(_) => None,
        }
    }
}

/// What the network reported once a submitted call settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Whether the call settled with a success status.
    pub succeeded: bool,
    /// Gas consumed by the call.
    pub gas_used: u64,
    /// Effective price paid per unit of gas, in wei.
    pub gas_price: U256,
}

impl From<Confirmation> for TaskResult {
    fn from(confirmation: Confirmation) -> Self {
        if confirmation.succeeded {
            TaskResult::Success {
                gas_used: confirmation.gas_used,
                gas_price: confirmation.gas_price,
            }
        } else {
            TaskResult::Failure(CallError::Reverted)
        }
    }
}
