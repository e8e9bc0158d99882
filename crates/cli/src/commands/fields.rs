// Print the form's field descriptors

use anyhow::Result;
use clap::Args;
use launchpad_sdk::{field_descriptors, TokenForm};

#[derive(Args, Debug)]
pub struct FieldsCmd {
    /// Pre-filled values as key=value (name, symbol, imageUrl, initialSupply)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub values: Vec<String>,
}

pub fn execute(cmd: FieldsCmd) -> Result<()> {
    let mut form = TokenForm::new();
    for pair in &cmd.values {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE, got {}", pair))?;
        form.set_field_by_key(key, value)?;
    }

    let descriptors = field_descriptors(form.inputs());
    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    Ok(())
}
