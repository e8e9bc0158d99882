// Fill in the launch form and submit it

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use launchpad_sdk::{
    FieldName, FormIntent, FormUpdate, LaunchError, LaunchPad, LaunchVariant, RpcConnection,
    TokenLauncher, Wallet,
};
use tracing::info as log_info;

use super::utils::{error, info, load_wallet, success, warn};
use crate::config::LaunchpadConfig;
use crate::prompt;

#[derive(Args, Debug, Default)]
pub struct LaunchCmd {
    /// Token name
    #[arg(long)]
    pub name: Option<String>,

    /// Token symbol
    #[arg(long)]
    pub symbol: Option<String>,

    /// Image URL written as the metadata URI
    #[arg(long)]
    pub image_url: Option<String>,

    /// Initial supply in base units
    #[arg(long)]
    pub initial_supply: Option<String>,

    /// Launch variant (placeholder, minimal, single-transaction, metadata)
    #[arg(long)]
    pub variant: Option<LaunchVariant>,

    /// Fail instead of prompting for missing fields
    #[arg(long)]
    pub non_interactive: bool,
}

impl LaunchCmd {
    /// Field values given on the command line
    fn provided(&self) -> Vec<(FieldName, String)> {
        [
            (FieldName::Name, &self.name),
            (FieldName::Symbol, &self.symbol),
            (FieldName::ImageUrl, &self.image_url),
            (FieldName::InitialSupply, &self.initial_supply),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}

pub async fn execute(cmd: LaunchCmd, mut config: LaunchpadConfig) -> Result<()> {
    if let Some(variant) = cmd.variant {
        config.variant = variant;
    }
    config.validate()?;

    let sdk_config = config.sdk_config()?;
    let wallet = load_wallet(config.wallet.as_deref())?;
    match wallet.public_key() {
        Some(owner) => info(&format!("Wallet: {}", owner)),
        None => warn("Wallet not connected"),
    }
    info(&format!("RPC URL: {}", sdk_config.rpc_url));
    info(&format!("Variant: {}", config.variant));

    let connection = Arc::new(RpcConnection::new(&sdk_config));
    let launcher = TokenLauncher::new(connection, config.launch_config())?;
    let mut pad = LaunchPad::new(launcher);

    for (field, value) in cmd.provided() {
        pad.update(FormIntent::edit(field, value), &wallet).await?;
    }

    if !cmd.non_interactive {
        let stdin = io::stdin();
        let edits = prompt::prompt_missing(&pad.fields(), &mut stdin.lock(), &mut io::stdout())
            .context("Failed to read form input")?;
        for (field, value) in edits {
            pad.update(FormIntent::edit(field, value), &wallet).await?;
        }
    }

    prompt::render(&pad.fields(), &mut io::stdout())?;
    log_info!(variant = %config.variant, "submitting launch form");

    match pad.update(FormIntent::Submit, &wallet).await {
        Ok(FormUpdate::Launched(receipt)) => {
            if receipt.is_dry_run() {
                success("Dry run complete, nothing submitted");
                return Ok(());
            }
            for (step, signature) in &receipt.signatures {
                success(&format!("{}: {}", step, signature));
            }
            if let Some(account) = receipt.associated_account {
                info(&format!("Token account: {}", account));
                info(&format!("Supply: {}", receipt.supply));
            }
            if let Some(mint) = receipt.mint {
                success(&format!("Minted successfully: {}", mint));
            }
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e @ LaunchError::TransactionFailed { .. }) => {
            error(&e.to_string());
            warn("Earlier transactions are not rolled back");
            Err(e.into())
        }
        Err(e) => {
            error(&e.to_string());
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_keeps_form_order() {
        let cmd = LaunchCmd {
            initial_supply: Some("10".into()),
            name: Some("Demo".into()),
            ..Default::default()
        };
        assert_eq!(
            cmd.provided(),
            vec![
                (FieldName::Name, "Demo".to_string()),
                (FieldName::InitialSupply, "10".to_string()),
            ]
        );
    }
}
