use std::sync::Arc;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, signature::Signature,
    transaction::Transaction,
};
use tracing::debug;

use super::Connection;
use crate::config::SdkConfig;
use crate::error::SdkResult;

/// [`Connection`] backed by a JSON-RPC endpoint
pub struct RpcConnection {
    rpc: Arc<RpcClient>,
    confirm: bool,
}

impl RpcConnection {
    pub fn new(config: &SdkConfig) -> Self {
        let rpc = RpcClient::new_with_commitment(
            config.rpc_url.clone(),
            CommitmentConfig {
                commitment: config.commitment,
            },
        );
        Self {
            rpc: Arc::new(rpc),
            confirm: config.confirm,
        }
    }
}

#[async_trait]
impl Connection for RpcConnection {
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> SdkResult<u64> {
        let lamports = self
            .rpc
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?;
        debug!(data_len, lamports, "rent exemption");
        Ok(lamports)
    }

    async fn get_latest_blockhash(&self) -> SdkResult<Hash> {
        Ok(self.rpc.get_latest_blockhash().await?)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature> {
        let signature = if self.confirm {
            self.rpc.send_and_confirm_transaction(transaction).await?
        } else {
            self.rpc.send_transaction(transaction).await?
        };
        debug!(%signature, confirmed = self.confirm, "transaction submitted");
        Ok(signature)
    }
}
