// Utility functions for CLI commands

use anyhow::Result;
use launchpad_sdk::KeypairWallet;
use tracing::warn as log_warn;

/// Load the configured wallet, or a disconnected one when none is set
pub fn load_wallet(path: Option<&str>) -> Result<KeypairWallet> {
    match path {
        Some(path) => Ok(KeypairWallet::from_file(path)?),
        None => {
            log_warn!("No wallet configured, running disconnected");
            Ok(KeypairWallet::disconnected())
        }
    }
}

/// Print success message with checkmark
pub fn success(msg: &str) {
    println!("[OK] {}", msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("[INFO] {}", msg);
}

/// Print warning message
pub fn warn(msg: &str) {
    eprintln!("[WARN] {}", msg);
}

/// Print error message
pub fn error(msg: &str) {
    eprintln!("[ERROR] {}", msg);
}
