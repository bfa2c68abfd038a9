use std::time::Duration;

use crate::error::ConfigError;

/// Static tuning for one workload type.
///
/// Values are validated at construction so the scheduler can rely on them:
/// there is always at least one task, waves are never empty, and a wave is
/// never larger than the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    total_tasks: usize,
    chunk_size: usize,
    inter_chunk_delay: Duration,
    gas_limit: u64,
}

impl ScenarioConfig {
    pub fn new(
        total_tasks: usize,
        chunk_size: usize,
        inter_chunk_delay: Duration,
        gas_limit: u64,
    ) -> Result<Self, ConfigError> {
        if total_tasks == 0 {
            return Err(ConfigError::ZeroTasks);
        }
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunk);
        }
        if chunk_size > total_tasks {
            return Err(ConfigError::ChunkExceedsTotal {
                chunk_size,
                total_tasks,
            });
        }
        if gas_limit == 0 {
            return Err(ConfigError::ZeroGasLimit);
        }

        Ok(Self {
            total_tasks,
            chunk_size,
            inter_chunk_delay,
            gas_limit,
        })
    }

    pub fn total_tasks(&self) -> usize {
        self.total_tasks
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn inter_chunk_delay(&self) -> Duration {
        self.inter_chunk_delay
    }

    /// Gas ceiling passed to every submission. A limit, not a measurement.
    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    /// Number of waves the schedule will issue.
    pub fn wave_count(&self) -> usize {
        self.total_tasks.div_ceil(self.chunk_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_tasks() {
        let err = ScenarioConfig::new(0, 1, Duration::ZERO, 300_000).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTasks);
    }

    #[test]
    fn rejects_zero_chunk() {
        let err = ScenarioConfig::new(10, 0, Duration::ZERO, 300_000).unwrap_err();
        assert_eq!(err, ConfigError::ZeroChunk);
    }

    #[test]
    fn rejects_chunk_larger_than_total() {
        let err = ScenarioConfig::new(10, 11, Duration::ZERO, 300_000).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ChunkExceedsTotal {
                chunk_size: 11,
                total_tasks: 10
            }
        );
    }

    #[test]
    fn single_wave_when_chunk_equals_total() {
        let config = ScenarioConfig::new(10, 10, Duration::ZERO, 300_000).unwrap();
        assert_eq!(config.wave_count(), 1);
    }

    #[test]
    fn wave_count_rounds_up() {
        let config = ScenarioConfig::new(5, 2, Duration::from_millis(100), 300_000).unwrap();
        assert_eq!(config.wave_count(), 3);
    }
}
