use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::Context;
use url::Url;

/// Build the provider the benchmark signer submits through.
///
/// Nonces are cached and incremented locally so that a wave of concurrent
/// submissions from the one signer does not race on the network's pending
/// transaction count.
pub fn connect(rpc_url: &str, private_key: &str) -> anyhow::Result<impl Provider + Clone + 'static> {
    let signer: PrivateKeySigner = private_key.parse().context("Invalid signer private key")?;
    let wallet = EthereumWallet::from(signer);
    let url: Url = rpc_url.parse().context("Invalid RPC URL")?;

    Ok(ProviderBuilder::new()
        .with_cached_nonce_management()
        .wallet(wallet)
        .connect_http(url))
}

/// An address derived from a throwaway key, for calls that need a recipient
/// nobody controls.
pub fn throwaway_recipient() -> Address {
    PrivateKeySigner::random().address()
}
