use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

use crate::error::{LaunchError, SdkError};

/// Decimals fixed on every mint the launchpad creates
pub const DEFAULT_DECIMALS: u8 = 9;

/// Solana cluster the launchpad talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    /// Public RPC endpoint for the cluster
    pub fn url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://localhost:8899",
        }
    }
}

impl FromStr for Cluster {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Cluster::MainnetBeta),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            other => Err(SdkError::InvalidParameters(format!("unknown cluster: {}", other))),
        }
    }
}

/// RPC connection settings
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Transaction commitment level
    pub commitment: CommitmentLevel,

    /// Wait for confirmation after each submission
    pub confirm: bool,
}

impl SdkConfig {
    pub fn for_cluster(cluster: Cluster) -> Self {
        Self {
            rpc_url: cluster.url().to_string(),
            commitment: CommitmentLevel::Confirmed,
            confirm: true,
        }
    }

    pub fn devnet() -> Self {
        Self::for_cluster(Cluster::Devnet)
    }

    pub fn with_rpc_url(mut self, url: String) -> Self {
        self.rpc_url = url;
        self
    }

    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self::devnet()
    }
}

/// Token program that owns the new mint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenProgram {
    /// Original SPL Token program
    Token,
    /// Token-2022, required for the metadata extensions
    Token2022,
}

impl TokenProgram {
    pub fn id(&self) -> Pubkey {
        match self {
            TokenProgram::Token => spl_token::id(),
            TokenProgram::Token2022 => spl_token_2022::id(),
        }
    }
}

/// Named reduced configurations of the launch workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchVariant {
    /// Logs the inputs, touches no chain state
    Placeholder,
    /// One transaction on the legacy program, no supply issued
    Minimal,
    /// One Token-2022 transaction, no supply issued
    SingleTransaction,
    /// Three transactions: mint with metadata, associated account, mint-to
    #[default]
    Metadata,
}

impl LaunchVariant {
    pub fn config(&self) -> LaunchConfig {
        match self {
            LaunchVariant::Placeholder => LaunchConfig {
                dry_run: true,
                ..LaunchConfig::single_transaction()
            },
            LaunchVariant::Minimal => LaunchConfig {
                token_program: TokenProgram::Token,
                ..LaunchConfig::single_transaction()
            },
            LaunchVariant::SingleTransaction => LaunchConfig::single_transaction(),
            LaunchVariant::Metadata => LaunchConfig::default(),
        }
    }
}

impl fmt::Display for LaunchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LaunchVariant::Placeholder => "placeholder",
            LaunchVariant::Minimal => "minimal",
            LaunchVariant::SingleTransaction => "single-transaction",
            LaunchVariant::Metadata => "metadata",
        };
        f.write_str(s)
    }
}

impl FromStr for LaunchVariant {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placeholder" => Ok(LaunchVariant::Placeholder),
            "minimal" => Ok(LaunchVariant::Minimal),
            "single-transaction" | "single" => Ok(LaunchVariant::SingleTransaction),
            "metadata" => Ok(LaunchVariant::Metadata),
            other => Err(SdkError::InvalidParameters(format!("unknown launch variant: {}", other))),
        }
    }
}

/// Switches of the launch workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Program owning the mint
    pub token_program: TokenProgram,

    /// Write metadata pointer and metadata into the mint
    pub metadata: bool,

    /// Create the associated account and mint the initial supply
    pub mint_supply: bool,

    /// Mint decimals
    pub decimals: u8,

    /// Log the inputs and stop before any chain interaction
    pub dry_run: bool,
}

impl LaunchConfig {
    fn single_transaction() -> Self {
        Self {
            metadata: false,
            mint_supply: false,
            ..Self::default()
        }
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Reject combinations the token programs cannot express.
    pub fn validate(&self) -> Result<(), LaunchError> {
        if self.metadata && self.token_program != TokenProgram::Token2022 {
            return Err(LaunchError::InvalidConfig(
                "metadata extensions require the Token-2022 program".to_string(),
            ));
        }
        Ok(())
    }

    /// Transactions a full run submits
    pub fn transaction_count(&self) -> usize {
        match (self.dry_run, self.mint_supply) {
            (true, _) => 0,
            (false, false) => 1,
            (false, true) => 3,
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            token_program: TokenProgram::Token2022,
            metadata: true,
            mint_supply: true,
            decimals: DEFAULT_DECIMALS,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_table() {
        let cases = [
            (LaunchVariant::Placeholder, 0, false),
            (LaunchVariant::Minimal, 1, false),
            (LaunchVariant::SingleTransaction, 1, false),
            (LaunchVariant::Metadata, 3, true),
        ];
        for (variant, transactions, metadata) in cases {
            let config = variant.config();
            assert_eq!(config.transaction_count(), transactions, "{}", variant);
            assert_eq!(config.metadata, metadata, "{}", variant);
            assert!(config.validate().is_ok());
        }
        assert_eq!(LaunchVariant::Minimal.config().token_program, TokenProgram::Token);
        assert_eq!(LaunchVariant::default(), LaunchVariant::Metadata);
    }

    #[test]
    fn test_metadata_requires_token_2022() {
        let config = LaunchConfig {
            token_program: TokenProgram::Token,
            ..LaunchConfig::default()
        };
        assert!(matches!(config.validate(), Err(LaunchError::InvalidConfig(_))));
    }

    #[test]
    fn test_variant_round_trips_through_display() {
        for variant in [
            LaunchVariant::Placeholder,
            LaunchVariant::Minimal,
            LaunchVariant::SingleTransaction,
            LaunchVariant::Metadata,
        ] {
            assert_eq!(variant.to_string().parse::<LaunchVariant>().unwrap(), variant);
        }
        assert!("turbo".parse::<LaunchVariant>().is_err());
    }

    #[test]
    fn test_cluster_urls() {
        assert_eq!(SdkConfig::devnet().rpc_url, "https://api.devnet.solana.com");
        assert_eq!("mainnet".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert_eq!(Cluster::default(), Cluster::Devnet);
    }
}
