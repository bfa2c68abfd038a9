use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::time::sleep;

use dyno_core::prelude::{CallError, Confirmation, ContractCall, PendingCall};

use crate::contracts::{MyERC20, StorageManipulator};

/// Polling interval while waiting for a receipt.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A submitted transaction, waiting to be mined.
///
/// Polls for the receipt with no deadline; a transaction the network never
/// settles keeps its task pending.
pub struct PendingReceipt<P> {
    provider: P,
    tx_hash: B256,
}

impl<P> PendingCall for PendingReceipt<P>
where
    P: Provider + Clone + 'static,
{
    fn confirm(self: Box<Self>) -> BoxFuture<'static, Result<Confirmation, CallError>> {
        async move {
            loop {
                let receipt = self
                    .provider
                    .get_transaction_receipt(self.tx_hash)
                    .await
                    .map_err(|error| CallError::Confirmation {
                        reason: error.to_string(),
                    })?;

                if let Some(receipt) = receipt {
                    return Ok(Confirmation {
                        succeeded: receipt.status(),
                        gas_used: receipt.gas_used as u64,
                        gas_price: U256::from(receipt.effective_gas_price),
                    });
                }

                sleep(RECEIPT_POLL_INTERVAL).await;
            }
        }
        .boxed()
    }
}

async fn submit_transaction<P>(
    provider: &P,
    to: Address,
    calldata: Vec<u8>,
    gas_limit: u64,
) -> Result<Box<dyn PendingCall>, CallError>
where
    P: Provider + Clone + 'static,
{
    let request = TransactionRequest::default()
        .with_to(to)
        .with_input(Bytes::from(calldata))
        .with_gas_limit(gas_limit);

    let pending = provider
        .send_transaction(request)
        .await
        .map_err(|error| CallError::Submission {
            reason: error.to_string(),
        })?;

    Ok(Box::new(PendingReceipt {
        provider: provider.clone(),
        tx_hash: *pending.tx_hash(),
    }))
}

/// The token's `transfer` function, bound to the suite signer.
pub struct Erc20TransferCall<P> {
    provider: P,
    token: Address,
}

impl<P> Erc20TransferCall<P> {
    pub fn new(provider: P, token: Address) -> Self {
        Self { provider, token }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferArgs {
    pub recipient: Address,
    pub amount: U256,
}

impl<P> ContractCall for Erc20TransferCall<P>
where
    P: Provider + Clone + 'static,
{
    type Args = TransferArgs;

    fn submit(
        &self,
        args: Self::Args,
        gas_limit: u64,
    ) -> BoxFuture<'_, Result<Box<dyn PendingCall>, CallError>> {
        async move {
            let calldata = MyERC20::transferCall {
                to: args.recipient,
                amount: args.amount,
            }
            .abi_encode();

            submit_transaction(&self.provider, self.token, calldata, gas_limit).await
        }
        .boxed()
    }
}

/// The `writeData` function of the storage contract.
pub struct StorageWriteCall<P> {
    provider: P,
    contract: Address,
}

impl<P> StorageWriteCall<P> {
    pub fn new(provider: P, contract: Address) -> Self {
        Self { provider, contract }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteArgs {
    pub key: U256,
    pub value: String,
}

impl<P> ContractCall for StorageWriteCall<P>
where
    P: Provider + Clone + 'static,
{
    type Args = WriteArgs;

    fn submit(
        &self,
        args: Self::Args,
        gas_limit: u64,
    ) -> BoxFuture<'_, Result<Box<dyn PendingCall>, CallError>> {
        async move {
            let calldata = StorageManipulator::writeDataCall {
                key: args.key,
                value: args.value,
            }
            .abi_encode();

            submit_transaction(&self.provider, self.contract, calldata, gas_limit).await
        }
        .boxed()
    }
}

/// The `performComplexCalculation` function of the storage contract.
pub struct ComplexCalculationCall<P> {
    provider: P,
    contract: Address,
}

impl<P> ComplexCalculationCall<P> {
    pub fn new(provider: P, contract: Address) -> Self {
        Self { provider, contract }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexCallArgs {
    pub a: U256,
    pub b: U256,
    pub iterations: U256,
}

impl<P> ContractCall for ComplexCalculationCall<P>
where
    P: Provider + Clone + 'static,
{
    type Args = ComplexCallArgs;

    fn submit(
        &self,
        args: Self::Args,
        gas_limit: u64,
    ) -> BoxFuture<'_, Result<Box<dyn PendingCall>, CallError>> {
        async move {
            let calldata = StorageManipulator::performComplexCalculationCall {
                a: args.a,
                b: args.b,
                iterations: args.iterations,
            }
            .abi_encode();

            submit_transaction(&self.provider, self.contract, calldata, gas_limit).await
        }
        .boxed()
    }
}
