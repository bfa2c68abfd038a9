use std::time::Duration;

use alloy_primitives::U256;
use dyno_core::prelude::TaskResult;

/// Aggregated figures for one scenario execution.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub success_count: usize,
    pub total_count: usize,
    pub duration_seconds: f64,
    /// Successful tasks per second, 0 when nothing succeeded.
    pub throughput: f64,
    pub avg_gas_used: U256,
    pub avg_gas_price: U256,
    /// Average of the per-task product `gas_used * gas_price`.
    pub avg_total_cost: U256,
}

/// Reduce a result sequence into summary figures.
///
/// A pure fold over the results: averages cover the successful subset only,
/// and an empty subset yields zeroes rather than a division error. The cost
/// average is taken over the per-task product of gas and price, not the
/// product of the two separately-averaged columns.
pub fn aggregate(results: &[TaskResult], total_count: usize, duration: Duration) -> RunStats {
    let mut success_count = 0usize;
    let mut total_gas = U256::ZERO;
    let mut total_price = U256::ZERO;
    let mut total_cost = U256::ZERO;

    for result in results {
        if let TaskResult::Success {
            gas_used,
            gas_price,
        } = result
        {
            success_count += 1;
            total_gas += U256::from(*gas_used);
            total_price += *gas_price;
            total_cost += U256::from(*gas_used) * *gas_price;
        }
    }

    let duration_seconds = duration.as_secs_f64();
    let throughput = if success_count > 0 && duration_seconds > 0.0 {
        success_count as f64 / duration_seconds
    } else {
        0.0
    };

    let (avg_gas_used, avg_gas_price, avg_total_cost) = if success_count > 0 {
        let successes = U256::from(success_count);
        (
            total_gas / successes,
            total_price / successes,
            total_cost / successes,
        )
    } else {
        (U256::ZERO, U256::ZERO, U256::ZERO)
    };

    RunStats {
        success_count,
        total_count,
        duration_seconds,
        throughput,
        avg_gas_used,
        avg_gas_price,
        avg_total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyno_core::prelude::CallError;
    use pretty_assertions::assert_eq;

    fn success(gas_used: u64, gas_price: u64) -> TaskResult {
        TaskResult::Success {
            gas_used,
            gas_price: U256::from(gas_price),
        }
    }

    #[test]
    fn averages_cover_only_successes() {
        let results = vec![
            success(100, 7),
            TaskResult::Failure(CallError::Reverted),
            success(200, 7),
        ];

        let stats = aggregate(&results, 3, Duration::from_secs(2));

        assert_eq!(stats.success_count, 2);
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.avg_gas_used, U256::from(150));
        assert_eq!(stats.avg_gas_price, U256::from(7));
        assert_eq!(stats.throughput, 1.0);
    }

    #[test]
    fn cost_is_averaged_per_task() {
        // avg(100*2, 10*20) = 200, not avg(gas)*avg(price) = 55*11 = 605
        let results = vec![success(100, 2), success(10, 20)];

        let stats = aggregate(&results, 2, Duration::from_secs(1));

        assert_eq!(stats.avg_total_cost, U256::from(200));
    }

    #[test]
    fn zero_successes_yield_zeroes() {
        let results = vec![
            TaskResult::Failure(CallError::Reverted),
            TaskResult::Failure(CallError::Submission {
                reason: "nonce too low".to_string(),
            }),
        ];

        let stats = aggregate(&results, 2, Duration::from_secs(5));

        assert_eq!(stats.success_count, 0);
        assert_eq!(stats.throughput, 0.0);
        assert_eq!(stats.avg_gas_used, U256::ZERO);
        assert_eq!(stats.avg_gas_price, U256::ZERO);
        assert_eq!(stats.avg_total_cost, U256::ZERO);
    }

    #[test]
    fn aggregation_is_repeatable() {
        let results = vec![success(100, 2), success(10, 20)];

        let first = aggregate(&results, 2, Duration::from_secs(3));
        let second = aggregate(&results, 2, Duration::from_secs(3));

        assert_eq!(first, second);
    }
}
