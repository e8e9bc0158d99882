//! SDK error types

use std::fmt;

use solana_program::program_error::ProgramError;
use thiserror::Error;

use crate::form::FieldName;

/// Errors raised by the collaborators and instruction builders.
#[derive(Error, Debug)]
pub enum SdkError {
    /// RPC error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Signing error
    #[error("Signing error: {0}")]
    Signing(String),

    /// Token program client rejected the instruction arguments
    #[error("Instruction error: {0}")]
    Instruction(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

impl From<solana_client::client_error::ClientError> for SdkError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        SdkError::Rpc(err.to_string())
    }
}

impl From<ProgramError> for SdkError {
    fn from(err: ProgramError) -> Self {
        SdkError::Instruction(err.to_string())
    }
}

impl From<solana_sdk::signer::SignerError> for SdkError {
    fn from(err: solana_sdk::signer::SignerError) -> Self {
        SdkError::Signing(err.to_string())
    }
}

pub type SdkResult<T> = Result<T, SdkError>;

/// Stage of a launch at which a failure surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStep {
    /// Mint account sizing and rent query
    Funding,
    /// Transaction 1: mint account (and metadata)
    CreateMint,
    /// Transaction 2: associated token account
    CreateAssociatedAccount,
    /// Transaction 3: mint the initial supply
    MintSupply,
}

impl fmt::Display for LaunchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LaunchStep::Funding => "funding",
            LaunchStep::CreateMint => "create mint",
            LaunchStep::CreateAssociatedAccount => "create associated account",
            LaunchStep::MintSupply => "mint supply",
        };
        f.write_str(s)
    }
}

/// Errors surfaced by a token launch.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: FieldName, reason: String },

    #[error("Invalid launch configuration: {0}")]
    InvalidConfig(String),

    #[error("Transaction failed at {step}: {source}")]
    TransactionFailed {
        step: LaunchStep,
        #[source]
        source: SdkError,
    },
}

impl LaunchError {
    pub(crate) fn at(step: LaunchStep) -> impl FnOnce(SdkError) -> LaunchError {
        move |source| LaunchError::TransactionFailed { step, source }
    }
}

pub type LaunchResult<T> = Result<T, LaunchError>;
