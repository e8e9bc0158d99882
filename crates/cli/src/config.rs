use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use launchpad_sdk::{Cluster, LaunchConfig, LaunchVariant, SdkConfig, DEFAULT_DECIMALS};
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentLevel;

/// Launchpad configuration loaded from TOML file
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LaunchpadConfig {
    /// Solana cluster to connect to
    pub cluster: Cluster,

    /// RPC endpoint, overriding the cluster's public one
    pub rpc_url: Option<String>,

    /// Commitment level for queries and confirmation
    pub commitment: String,

    /// Wallet keypair file; no wallet means disconnected
    pub wallet: Option<String>,

    /// Which launch workflow to run
    pub variant: LaunchVariant,

    /// Mint decimals
    pub decimals: u8,

    /// Wait for each transaction to confirm before sending the next
    pub confirm: bool,

    /// Log filter level
    pub log_level: String,
}

impl LaunchpadConfig {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        let config: LaunchpadConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write config file {}", path))?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.rpc_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("rpc_url must be an http(s) URL, got {}", url);
            }
        }

        self.commitment_level()?;

        if self.decimals > 18 {
            bail!("decimals must be at most 18, got {}", self.decimals);
        }

        self.launch_config()
            .validate()
            .context("Invalid launch configuration")?;

        Ok(())
    }

    pub fn commitment_level(&self) -> Result<CommitmentLevel> {
        CommitmentLevel::from_str(&self.commitment)
            .map_err(|_| anyhow::anyhow!("Unknown commitment level: {}", self.commitment))
    }

    /// RPC settings, preferring an explicit endpoint over the cluster default
    pub fn sdk_config(&self) -> Result<SdkConfig> {
        let mut sdk = SdkConfig::for_cluster(self.cluster).with_confirm(self.confirm);
        if let Some(url) = &self.rpc_url {
            sdk = sdk.with_rpc_url(url.clone());
        }
        sdk.commitment = self.commitment_level()?;
        Ok(sdk)
    }

    pub fn launch_config(&self) -> LaunchConfig {
        self.variant.config().with_decimals(self.decimals)
    }
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::Devnet,
            rpc_url: None,
            commitment: "confirmed".to_string(),
            wallet: None,
            variant: LaunchVariant::Metadata,
            decimals: DEFAULT_DECIMALS,
            confirm: true,
            log_level: "info".to_string(),
        }
    }
}

/// Create example configuration file
pub fn create_example_config(path: &str) -> Result<()> {
    let example_config = LaunchpadConfig {
        wallet: Some("~/.config/solana/id.json".to_string()),
        ..LaunchpadConfig::default()
    };

    example_config.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_devnet_metadata() {
        let config = LaunchpadConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sdk_config().unwrap().rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.launch_config().transaction_count(), 3);
    }

    #[test]
    fn test_config_validation() {
        let mut config = LaunchpadConfig::default();
        config.commitment = "eventually".to_string();
        assert!(config.validate().is_err());

        let mut config = LaunchpadConfig::default();
        config.rpc_url = Some("ftp://example.com".to_string());
        assert!(config.validate().is_err());

        let mut config = LaunchpadConfig::default();
        config.decimals = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_decimals_feed_launch_config() {
        assert_eq!(LaunchpadConfig::default().launch_config().decimals, DEFAULT_DECIMALS);

        let config = LaunchpadConfig {
            decimals: 6,
            ..LaunchpadConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.launch_config().decimals, 6);
    }

    #[test]
    fn test_rpc_url_overrides_cluster() {
        let config = LaunchpadConfig {
            rpc_url: Some("http://127.0.0.1:8899".to_string()),
            confirm: false,
            ..LaunchpadConfig::default()
        };
        let sdk = config.sdk_config().unwrap();
        assert_eq!(sdk.rpc_url, "http://127.0.0.1:8899");
        assert!(!sdk.confirm);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: LaunchpadConfig = toml::from_str(
            r#"
            variant = "minimal"
            cluster = "localnet"
            "#,
        )
        .unwrap();
        assert_eq!(config.variant, LaunchVariant::Minimal);
        assert_eq!(config.cluster, Cluster::Localnet);
        assert_eq!(config.decimals, DEFAULT_DECIMALS);
        assert_eq!(config.commitment, "confirmed");
    }

    #[test]
    fn test_example_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launchpad.toml");
        let path = path.to_str().unwrap();

        create_example_config(path).unwrap();
        let loaded = LaunchpadConfig::load(path).unwrap();
        assert_eq!(loaded.wallet.as_deref(), Some("~/.config/solana/id.json"));
        assert_eq!(loaded.variant, LaunchVariant::Metadata);
    }
}
