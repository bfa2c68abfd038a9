mod calls;
mod client;
mod contracts;

pub mod prelude {
    pub use crate::calls::{
        ComplexCallArgs, ComplexCalculationCall, Erc20TransferCall, PendingReceipt,
        StorageWriteCall, TransferArgs, WriteArgs,
    };
    pub use crate::client::{connect, throwaway_recipient};
    pub use crate::contracts::{MyERC20, StorageManipulator};
}
