use futures::future::BoxFuture;

use crate::error::CallError;
use crate::result::Confirmation;

/// A submitted call that has not settled yet.
pub trait PendingCall: Send {
    /// Wait for the call's effect to be confirmed.
    ///
    /// May wait indefinitely if the network never settles the call; the
    /// harness imposes no deadline.
    fn confirm(self: Box<Self>) -> BoxFuture<'static, Result<Confirmation, CallError>>;
}

/// One contract function bound to a signer, provided by the client layer.
///
/// The harness shares a binding read-only across every task of a scenario.
/// Any sequencing the network requires between submissions from the same
/// signer (nonce ordering, for example) is handled behind this trait.
pub trait ContractCall: Send + Sync {
    /// Scenario-specific call arguments.
    type Args: Send + 'static;

    /// Submit one call with an explicit gas ceiling.
    fn submit(
        &self,
        args: Self::Args,
        gas_limit: u64,
    ) -> BoxFuture<'_, Result<Box<dyn PendingCall>, CallError>>;
}
