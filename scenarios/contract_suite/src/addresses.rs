use std::collections::HashMap;
use std::path::Path;

use alloy_primitives::Address;
use anyhow::Context;
use serde::Deserialize;

/// Deployed contract addresses, keyed by network name.
///
/// ```json
/// {
///   "baseSepolia": {
///     "MyERC20": "0x...",
///     "StorageManipulator": "0x..."
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DeployedAddresses(HashMap<String, NetworkAddresses>);

/// Addresses for one network. A missing entry skips the scenarios that
/// need it; it does not fail the suite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkAddresses {
    #[serde(rename = "MyERC20")]
    pub my_erc20: Option<Address>,
    #[serde(rename = "StorageManipulator")]
    pub storage_manipulator: Option<Address>,
}

impl DeployedAddresses {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Malformed addresses file {}", path.display()))
    }

    /// Addresses for the named network. An unknown network is fatal: no
    /// workload configuration applies to it.
    pub fn for_network(&self, network: &str) -> anyhow::Result<&NetworkAddresses> {
        self.0
            .get(network)
            .with_context(|| format!("No deployed addresses found for network \"{}\"", network))
    }
}
