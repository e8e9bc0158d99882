//! Collaborators the launch workflow is driven through.
//!
//! The workflow never talks to the network or a key store directly: it asks a
//! [`Connection`] for chain state and hands finished transactions to a
//! [`Wallet`], which signs and submits them.

use async_trait::async_trait;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};

use crate::error::SdkResult;

mod keypair;
mod rpc;

pub use keypair::KeypairWallet;
pub use rpc::RpcConnection;

/// Read access to the cluster plus raw transaction transport
#[async_trait]
pub trait Connection: Send + Sync {
    /// Lamports an account of `data_len` bytes needs to be rent exempt
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> SdkResult<u64>;

    async fn get_latest_blockhash(&self) -> SdkResult<Hash>;

    /// Submit a fully signed transaction
    async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature>;
}

/// A user's wallet: an optional address and the ability to sign and send.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// `None` while no wallet is connected
    fn public_key(&self) -> Option<Pubkey>;

    /// Add the wallet's signature and submit through `connection`.
    ///
    /// The transaction arrives with fee payer and blockhash already set and
    /// may carry other partial signatures, which must be preserved.
    async fn send_transaction(
        &self,
        transaction: Transaction,
        connection: &dyn Connection,
    ) -> SdkResult<Signature>;
}
