use std::sync::Arc;

use launchpad_sdk::{
    instructions, FieldName, FormIntent, FormUpdate, KeypairWallet, LaunchPad, LaunchVariant,
    RpcConnection, SdkConfig, TokenLauncher,
};
use solana_sdk::pubkey::Pubkey;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Token Launchpad SDK Basic Usage Example");
    println!("=======================================\n");

    let config = SdkConfig::devnet();
    println!("RPC URL: {}", config.rpc_url);

    // Placeholder variant: the form works end to end without touching the chain
    let connection = Arc::new(RpcConnection::new(&config));
    let launcher = TokenLauncher::new(connection, LaunchVariant::Placeholder.config())?;
    let mut pad = LaunchPad::new(launcher);
    let wallet = KeypairWallet::disconnected();

    for (field, value) in [
        (FieldName::Name, "Demo"),
        (FieldName::Symbol, "DEMO"),
        (FieldName::ImageUrl, "https://example.com/demo.png"),
        (FieldName::InitialSupply, "1000000000"),
    ] {
        pad.update(FormIntent::edit(field, value), &wallet).await?;
    }

    println!("\n=== Form ===");
    for field in pad.fields() {
        println!("  {:<15} {:<30} required={}", field.label, field.value, field.required);
    }

    let request = launchpad_sdk::LaunchRequest::from_inputs(pad.inputs())?;
    let sizing = instructions::mint_sizing(&Pubkey::new_unique(), Some(&request.metadata_fields()))?;
    println!("\n=== Mint sizing ===");
    println!("  Account space: {} bytes", sizing.space);
    println!("  Rent paid on:  {} bytes", sizing.rent_size);

    if let FormUpdate::Launched(receipt) = pad.update(FormIntent::Submit, &wallet).await? {
        println!("\nDry run: {}", receipt.is_dry_run());
    }

    Ok(())
}
