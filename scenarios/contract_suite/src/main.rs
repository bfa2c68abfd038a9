mod addresses;
mod workloads;

use anyhow::Context;
use clap::Parser;
use dyno_client::prelude::{
    connect, throwaway_recipient, ComplexCalculationCall, Erc20TransferCall, StorageWriteCall,
};
use dyno_runner::prelude::{BoundScenario, SuiteBuilder, SuiteCli};
use dyno_summary_model::FileSummarySink;

use crate::addresses::DeployedAddresses;
use crate::workloads::{ComplexCall, Erc20Transfer, StorageWrite};

// Waves interleave cooperatively on one logical thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = SuiteCli::parse();
    let private_key = cli.resolve_private_key()?;

    let deployed = DeployedAddresses::load(&cli.addresses)?;
    let addresses = deployed.for_network(&cli.network)?;

    let provider = connect(&cli.rpc_url, &private_key)?;

    // Transfers go to an address nobody controls, so repeated runs cannot
    // interfere with a balance that matters.
    let erc20_workload = Erc20Transfer::new(throwaway_recipient())?;
    let erc20 = match addresses.my_erc20 {
        Some(token) => BoundScenario::new(
            erc20_workload,
            Erc20TransferCall::new(provider.clone(), token),
        ),
        None => BoundScenario::unbound(
            erc20_workload,
            format!("MyERC20 address not configured for {}", cli.network),
        ),
    };

    let storage_workload = StorageWrite::new()?;
    let storage = match addresses.storage_manipulator {
        Some(contract) => BoundScenario::new(
            storage_workload,
            StorageWriteCall::new(provider.clone(), contract),
        ),
        None => BoundScenario::unbound(
            storage_workload,
            format!("StorageManipulator address not configured for {}", cli.network),
        ),
    };

    let complex_workload = ComplexCall::new()?;
    let complex = match addresses.storage_manipulator {
        Some(contract) => BoundScenario::new(
            complex_workload,
            ComplexCalculationCall::new(provider.clone(), contract),
        ),
        None => BoundScenario::unbound(
            complex_workload,
            format!("StorageManipulator address not configured for {}", cli.network),
        ),
    };

    let suite = SuiteBuilder::new(&cli.network)
        .with_runs(cli.runs)
        .with_progress(!cli.no_progress)
        .add_scenario(Box::new(erc20))
        .add_scenario(Box::new(storage))
        .add_scenario(Box::new(complex))
        .build()?;

    let mut sink = FileSummarySink::open(&cli.log_file)
        .with_context(|| format!("Could not open {}", cli.log_file.display()))?;

    log::info!(
        "Suite {} appending run records to {}",
        suite.run_id(),
        cli.log_file.display()
    );
    suite.run(&mut sink).await?;

    Ok(())
}
