//! The three workload types of the suite.
//!
//! Tuned for heavily throttled public testnets: one transaction at a time
//! with multi-second gaps between submissions.

use std::time::Duration;

use alloy_primitives::{Address, U256};
use dyno_client::prelude::{ComplexCallArgs, TransferArgs, WriteArgs};
use dyno_core::prelude::ScenarioConfig;
use dyno_runner::prelude::Workload;

/// Repeated small token transfers to a fixed recipient.
pub struct Erc20Transfer {
    config: ScenarioConfig,
    recipient: Address,
    amount: U256,
}

impl Erc20Transfer {
    pub fn new(recipient: Address) -> anyhow::Result<Self> {
        Ok(Self {
            config: ScenarioConfig::new(15, 1, Duration::from_millis(2000), 300_000)?,
            recipient,
            // 0.0001 tokens at 18 decimals. Small enough that repeated runs
            // never drain the signer's balance.
            amount: U256::from(100_000_000_000_000u64),
        })
    }
}

impl Workload for Erc20Transfer {
    type Args = TransferArgs;

    fn name(&self) -> &str {
        "erc20_transfer"
    }

    fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    fn args(&self, _index: usize, _run_index: u32) -> Self::Args {
        TransferArgs {
            recipient: self.recipient,
            amount: self.amount,
        }
    }
}

/// Storage writes with keys spaced per run, so repeated runs never touch a
/// slot they have written before.
pub struct StorageWrite {
    config: ScenarioConfig,
}

impl StorageWrite {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            config: ScenarioConfig::new(10, 1, Duration::from_millis(3000), 300_000)?,
        })
    }
}

impl Workload for StorageWrite {
    type Args = WriteArgs;

    fn name(&self) -> &str {
        "storage_write"
    }

    fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    fn args(&self, index: usize, run_index: u32) -> Self::Args {
        WriteArgs {
            key: U256::from(index + run_index as usize * self.config.total_tasks()),
            value: format!("Run{}Item{}", run_index, index),
        }
    }
}

/// Iterated on-chain arithmetic with operands derived from the task
/// position.
pub struct ComplexCall {
    config: ScenarioConfig,
    iterations: U256,
}

impl ComplexCall {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            config: ScenarioConfig::new(8, 1, Duration::from_millis(5000), 1_000_000)?,
            iterations: U256::from(50),
        })
    }
}

impl Workload for ComplexCall {
    type Args = ComplexCallArgs;

    fn name(&self) -> &str {
        "complex_call"
    }

    fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    fn args(&self, index: usize, run_index: u32) -> Self::Args {
        let offset = index as u64 + run_index as u64 * 5;
        ComplexCallArgs {
            a: U256::from(10 + offset),
            b: U256::from(20 + offset),
            iterations: self.iterations,
        }
    }
}
