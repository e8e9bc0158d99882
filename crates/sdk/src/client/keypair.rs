use std::path::Path;

use async_trait::async_trait;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use super::{Connection, Wallet};
use crate::error::{SdkError, SdkResult};

/// [`Wallet`] holding a local keypair, or nothing when disconnected
#[derive(Default)]
pub struct KeypairWallet {
    keypair: Option<Keypair>,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self {
            keypair: Some(keypair),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Load a keypair file, expanding a leading `~`
    pub fn from_file(path: &str) -> SdkResult<Self> {
        let expanded = match path.strip_prefix('~') {
            Some(rest) => {
                let home = std::env::var("HOME").map_err(|_| {
                    SdkError::InvalidParameters("HOME environment variable not set".to_string())
                })?;
                format!("{}{}", home, rest)
            }
            None => path.to_string(),
        };

        let keypair = read_keypair_file(Path::new(&expanded)).map_err(|e| {
            SdkError::InvalidParameters(format!("Failed to load keypair from {}: {}", expanded, e))
        })?;
        Ok(Self::new(keypair))
    }

    pub fn disconnect(&mut self) {
        self.keypair = None;
    }
}

#[async_trait]
impl Wallet for KeypairWallet {
    fn public_key(&self) -> Option<Pubkey> {
        self.keypair.as_ref().map(|k| k.pubkey())
    }

    async fn send_transaction(
        &self,
        mut transaction: Transaction,
        connection: &dyn Connection,
    ) -> SdkResult<Signature> {
        let keypair = self
            .keypair
            .as_ref()
            .ok_or_else(|| SdkError::Signing("wallet not connected".to_string()))?;

        // Same blockhash keeps the signatures already present
        let blockhash = transaction.message.recent_blockhash;
        transaction.try_partial_sign(&[keypair], blockhash)?;

        connection.send_transaction(&transaction).await
    }
}
