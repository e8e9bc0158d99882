//! Token creation workflow.
//!
//! A launch runs as a fixed pipeline, each stage awaited before the next is
//! built:
//!
//! 1. generate the mint keypair
//! 2. size the mint and query its rent exemption
//! 3. transaction 1: create the mint (with metadata pointer and metadata)
//! 4. transaction 2: create the wallet's associated token account
//! 5. transaction 3: mint the initial supply into it
//!
//! Nothing is retried or rolled back. If a later transaction fails the
//! earlier ones stay on chain.

use std::sync::Arc;

use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use tracing::{error, info, warn};

use crate::client::{Connection, Wallet};
use crate::config::LaunchConfig;
use crate::error::{LaunchError, LaunchResult, LaunchStep, SdkError};
use crate::form::{FieldName, TokenInputs};
use crate::instructions::{self, MetadataFields, MintSizing};

/// Form values checked and converted for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    /// Initial supply in base units
    pub amount: u64,
}

impl LaunchRequest {
    /// Validate the form: every field is required and the supply must be a
    /// whole number of base units. Name, symbol and URI go on chain as typed;
    /// whitespace only counts against the required check.
    pub fn from_inputs(inputs: &TokenInputs) -> LaunchResult<Self> {
        for field in FieldName::ALL {
            if inputs.get(field).trim().is_empty() {
                return Err(LaunchError::InvalidInput {
                    field,
                    reason: "required".to_string(),
                });
            }
        }

        let supply = inputs.initial_supply.trim();
        let amount = supply.parse::<u64>().map_err(|e| LaunchError::InvalidInput {
            field: FieldName::InitialSupply,
            reason: format!("{:?} is not a whole number of base units ({})", supply, e),
        })?;

        Ok(Self {
            name: inputs.name.clone(),
            symbol: inputs.symbol.clone(),
            uri: inputs.image_url.clone(),
            amount,
        })
    }

    pub fn metadata_fields(&self) -> MetadataFields {
        MetadataFields {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
        }
    }
}

/// What a launch put on chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReceipt {
    /// `None` when nothing was submitted
    pub mint: Option<Pubkey>,
    pub associated_account: Option<Pubkey>,
    /// Base units minted into the associated account
    pub supply: u64,
    /// Signatures in submission order
    pub signatures: Vec<(LaunchStep, Signature)>,
}

impl LaunchReceipt {
    fn dry_run() -> Self {
        Self {
            mint: None,
            associated_account: None,
            supply: 0,
            signatures: vec![],
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.mint.is_none()
    }
}

/// Result of the funding stage
#[derive(Debug, Clone, Copy)]
struct MintFunding {
    sizing: MintSizing,
    lamports: u64,
}

/// Runs launches against one connection.
///
/// Launches share no state: two concurrent calls create two unrelated mints.
pub struct TokenLauncher {
    connection: Arc<dyn Connection>,
    config: LaunchConfig,
}

impl TokenLauncher {
    pub fn new(connection: Arc<dyn Connection>, config: LaunchConfig) -> LaunchResult<Self> {
        config.validate()?;
        Ok(Self { connection, config })
    }

    /// Launch a token from the form values using `wallet` as payer and authority.
    pub async fn launch(&self, wallet: &dyn Wallet, inputs: &TokenInputs) -> LaunchResult<LaunchReceipt> {
        if self.config.dry_run {
            info!(
                name = %inputs.name,
                symbol = %inputs.symbol,
                image_url = %inputs.image_url,
                initial_supply = %inputs.initial_supply,
                "dry run, nothing submitted"
            );
            return Ok(LaunchReceipt::dry_run());
        }

        let Some(owner) = wallet.public_key() else {
            error!("Wallet not connected");
            return Err(LaunchError::WalletNotConnected);
        };

        let request = LaunchRequest::from_inputs(inputs).inspect_err(|e| warn!("{}", e))?;

        self.run(wallet, owner, &request)
            .await
            .inspect_err(|e| error!(error = %e, "Transaction failed"))
    }

    async fn run(&self, wallet: &dyn Wallet, owner: Pubkey, request: &LaunchRequest) -> LaunchResult<LaunchReceipt> {
        let program = self.config.token_program;
        let mint = Keypair::new();
        let mint_address = mint.pubkey();
        let metadata = self.config.metadata.then(|| request.metadata_fields());

        let funding = self.fund_mint(&mint_address, metadata.as_ref()).await?;

        let create_mint = instructions::create_mint_instructions(
            program,
            &owner,
            &mint_address,
            &owner,
            self.config.decimals,
            funding.sizing,
            funding.lamports,
            metadata.as_ref(),
        )
        .map_err(LaunchError::at(LaunchStep::CreateMint))?;

        // The new mint account co-signs its own creation
        let mint_sig = self
            .submit(wallet, &owner, &create_mint, &[&mint], LaunchStep::CreateMint)
            .await?;
        info!(mint = %mint_address, signature = %mint_sig, "mint created");

        let mut receipt = LaunchReceipt {
            mint: Some(mint_address),
            associated_account: None,
            supply: 0,
            signatures: vec![(LaunchStep::CreateMint, mint_sig)],
        };

        if !self.config.mint_supply {
            return Ok(receipt);
        }

        let associated = instructions::associated_token_address(program, &owner, &mint_address);
        let create_account = instructions::create_associated_account(program, &owner, &owner, &mint_address);
        let account_sig = self
            .submit(wallet, &owner, &[create_account], &[], LaunchStep::CreateAssociatedAccount)
            .await?;
        info!(account = %associated, signature = %account_sig, "associated account created");
        receipt.associated_account = Some(associated);
        receipt
            .signatures
            .push((LaunchStep::CreateAssociatedAccount, account_sig));

        let mint_to = instructions::mint_to(program, &mint_address, &associated, &owner, request.amount)
            .map_err(LaunchError::at(LaunchStep::MintSupply))?;
        let supply_sig = self
            .submit(wallet, &owner, &[mint_to], &[], LaunchStep::MintSupply)
            .await?;
        info!(amount = request.amount, signature = %supply_sig, "supply minted");
        receipt.supply = request.amount;
        receipt.signatures.push((LaunchStep::MintSupply, supply_sig));

        info!(mint = %mint_address, "Minted successfully");
        Ok(receipt)
    }

    async fn fund_mint(&self, mint: &Pubkey, metadata: Option<&MetadataFields>) -> LaunchResult<MintFunding> {
        let sizing = instructions::mint_sizing(mint, metadata).map_err(LaunchError::at(LaunchStep::Funding))?;
        let lamports = self
            .connection
            .get_minimum_balance_for_rent_exemption(sizing.rent_size)
            .await
            .map_err(LaunchError::at(LaunchStep::Funding))?;
        Ok(MintFunding { sizing, lamports })
    }

    /// Stamp fee payer and a fresh blockhash, add co-signatures, and hand
    /// the transaction to the wallet.
    async fn submit(
        &self,
        wallet: &dyn Wallet,
        payer: &Pubkey,
        instructions: &[Instruction],
        co_signers: &[&Keypair],
        step: LaunchStep,
    ) -> LaunchResult<Signature> {
        let blockhash = self
            .connection
            .get_latest_blockhash()
            .await
            .map_err(LaunchError::at(step))?;

        let mut transaction = Transaction::new_with_payer(instructions, Some(payer));
        transaction.message.recent_blockhash = blockhash;
        if !co_signers.is_empty() {
            transaction
                .try_partial_sign(co_signers, blockhash)
                .map_err(|e| LaunchError::at(step)(SdkError::from(e)))?;
        }

        wallet
            .send_transaction(transaction, self.connection.as_ref())
            .await
            .map_err(LaunchError::at(step))
    }
}
