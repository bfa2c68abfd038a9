/// Why a single contract call failed.
///
/// Every variant is recovered locally into a failure result; a task error
/// never aborts the run it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// The call was rejected before the network accepted it.
    #[error("submission rejected: {reason}")]
    Submission { reason: String },
    /// The call was accepted but waiting for its effect failed.
    #[error("confirmation failed: {reason}")]
    Confirmation { reason: String },
    /// The call was confirmed with a non-success status.
    #[error("call reverted")]
    Reverted,
}

/// Rejected scenario tuning values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("total_tasks must be at least 1")]
    ZeroTasks,
    #[error("chunk_size must be at least 1")]
    ZeroChunk,
    #[error("chunk_size {chunk_size} exceeds total_tasks {total_tasks}")]
    ChunkExceedsTotal {
        chunk_size: usize,
        total_tasks: usize,
    },
    #[error("gas_limit must be at least 1")]
    ZeroGasLimit,
}
