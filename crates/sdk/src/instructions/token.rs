use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_instruction};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account,
};
use spl_token_2022::{
    extension::{metadata_pointer, ExtensionType},
    state::Mint,
};
use spl_token_metadata_interface::state::TokenMetadata;
use spl_type_length_value::variable_len_pack::VariableLenPack;

use crate::config::TokenProgram;
use crate::error::SdkResult;

/// Extension type discriminator width in a Token-2022 TLV entry
pub const TYPE_SIZE: usize = 2;
/// Extension length prefix width in a Token-2022 TLV entry
pub const LENGTH_SIZE: usize = 2;

/// Name, symbol and URI written into the mint's metadata extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFields {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

/// Space to allocate for a mint and the byte count rent is paid on.
///
/// The metadata extension is written after the account exists; its bytes are
/// funded up front and the token program reallocates when initializing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintSizing {
    pub space: usize,
    pub rent_size: usize,
}

/// Size the mint account, with room for pointer and metadata when given.
pub fn mint_sizing(mint: &Pubkey, metadata: Option<&MetadataFields>) -> SdkResult<MintSizing> {
    let Some(fields) = metadata else {
        let space = ExtensionType::try_calculate_account_len::<Mint>(&[])?;
        return Ok(MintSizing { space, rent_size: space });
    };

    let space = ExtensionType::try_calculate_account_len::<Mint>(&[ExtensionType::MetadataPointer])?;

    // update_authority packs to a fixed 32 bytes, so the default is exact
    let token_metadata = TokenMetadata {
        mint: *mint,
        name: fields.name.clone(),
        symbol: fields.symbol.clone(),
        uri: fields.uri.clone(),
        additional_metadata: vec![],
        ..Default::default()
    };
    let metadata_len = TYPE_SIZE + LENGTH_SIZE + token_metadata.get_packed_len()?;

    Ok(MintSizing {
        space,
        rent_size: space + metadata_len,
    })
}

/// Instructions of the mint transaction: create account, optional metadata
/// pointer, initialize mint, optional metadata.
#[allow(clippy::too_many_arguments)]
pub fn create_mint_instructions(
    token_program: TokenProgram,
    payer: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    decimals: u8,
    sizing: MintSizing,
    lamports: u64,
    metadata: Option<&MetadataFields>,
) -> SdkResult<Vec<Instruction>> {
    let program_id = token_program.id();
    let mut instructions = vec![system_instruction::create_account(
        payer,
        mint,
        lamports,
        sizing.space as u64,
        &program_id,
    )];

    if metadata.is_some() {
        instructions.push(metadata_pointer::instruction::initialize(
            &program_id,
            mint,
            Some(*authority),
            Some(*mint),
        )?);
    }

    instructions.push(initialize_mint(token_program, mint, authority, decimals)?);

    if let Some(fields) = metadata {
        instructions.push(spl_token_metadata_interface::instruction::initialize(
            &program_id,
            mint,
            authority,
            mint,
            authority,
            fields.name.clone(),
            fields.symbol.clone(),
            fields.uri.clone(),
        ));
    }

    Ok(instructions)
}

/// Initialize a mint with no freeze authority
pub fn initialize_mint(
    token_program: TokenProgram,
    mint: &Pubkey,
    authority: &Pubkey,
    decimals: u8,
) -> SdkResult<Instruction> {
    let program_id = token_program.id();
    let ix = match token_program {
        TokenProgram::Token => {
            spl_token::instruction::initialize_mint(&program_id, mint, authority, None, decimals)?
        }
        TokenProgram::Token2022 => {
            spl_token_2022::instruction::initialize_mint(&program_id, mint, authority, None, decimals)?
        }
    };
    Ok(ix)
}

/// Associated token account of `owner` for `mint`
pub fn associated_token_address(token_program: TokenProgram, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &token_program.id())
}

/// Create `owner`'s associated token account, funded by `payer`
pub fn create_associated_account(
    token_program: TokenProgram,
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    create_associated_token_account(payer, owner, mint, &token_program.id())
}

/// Mint `amount` base units into `destination`
pub fn mint_to(
    token_program: TokenProgram,
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> SdkResult<Instruction> {
    let program_id = token_program.id();
    let ix = match token_program {
        TokenProgram::Token => {
            spl_token::instruction::mint_to(&program_id, mint, destination, authority, &[], amount)?
        }
        TokenProgram::Token2022 => {
            spl_token_2022::instruction::mint_to(&program_id, mint, destination, authority, &[], amount)?
        }
    };
    Ok(ix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::system_program;

    fn demo_metadata() -> MetadataFields {
        MetadataFields {
            name: "Demo".to_string(),
            symbol: "DEMO".to_string(),
            uri: "https://x/y.png".to_string(),
        }
    }

    #[test]
    fn test_plain_mint_sizing() {
        let sizing = mint_sizing(&Pubkey::new_unique(), None).unwrap();
        assert_eq!(sizing.space, 82);
        assert_eq!(sizing.rent_size, 82);
    }

    #[test]
    fn test_metadata_mint_sizing() {
        let sizing = mint_sizing(&Pubkey::new_unique(), Some(&demo_metadata())).unwrap();
        // Base mint padded to account size, account type byte, pointer TLV
        assert_eq!(sizing.space, 234);
        // 2 + 2 header, 32 + 32 keys, three length-prefixed strings, empty vec
        let strings = (4 + 4) + (4 + 4) + (4 + 15);
        assert_eq!(sizing.rent_size, 234 + 4 + 64 + strings + 4);
    }

    #[test]
    fn test_longer_metadata_costs_more() {
        let mint = Pubkey::new_unique();
        let short = mint_sizing(&mint, Some(&demo_metadata())).unwrap();
        let mut fields = demo_metadata();
        fields.uri = "https://example.com/a/much/longer/path/to/the/image.png".to_string();
        let long = mint_sizing(&mint, Some(&fields)).unwrap();
        assert_eq!(short.space, long.space);
        assert!(long.rent_size > short.rent_size);
    }

    #[test]
    fn test_metadata_mint_instruction_order() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let metadata = demo_metadata();
        let sizing = mint_sizing(&mint, Some(&metadata)).unwrap();

        let ixs = create_mint_instructions(
            TokenProgram::Token2022,
            &payer,
            &mint,
            &payer,
            9,
            sizing,
            5_000_000,
            Some(&metadata),
        )
        .unwrap();

        assert_eq!(ixs.len(), 4);
        assert_eq!(ixs[0].program_id, system_program::id());
        assert!(ixs[1..].iter().all(|ix| ix.program_id == spl_token_2022::id()));

        // Create account: funder signs, new mint signs
        assert_eq!(ixs[0].accounts[0].pubkey, payer);
        assert_eq!(ixs[0].accounts[1].pubkey, mint);
        assert!(ixs[0].accounts[1].is_signer);

        // Every token instruction targets the same mint
        for ix in &ixs[1..] {
            assert_eq!(ix.accounts[0].pubkey, mint);
        }
    }

    #[test]
    fn test_plain_mint_instructions() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let sizing = mint_sizing(&mint, None).unwrap();

        let ixs = create_mint_instructions(TokenProgram::Token, &payer, &mint, &payer, 9, sizing, 1, None)
            .unwrap();

        assert_eq!(ixs.len(), 2);
        assert_eq!(ixs[1].program_id, spl_token::id());
    }

    #[test]
    fn test_associated_account_matches_derivation() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ata = associated_token_address(TokenProgram::Token2022, &owner, &mint);

        let (expected, _) = Pubkey::find_program_address(
            &[owner.as_ref(), spl_token_2022::id().as_ref(), mint.as_ref()],
            &spl_associated_token_account::id(),
        );
        assert_eq!(ata, expected);
        assert_ne!(ata, associated_token_address(TokenProgram::Token, &owner, &mint));

        let ix = create_associated_account(TokenProgram::Token2022, &owner, &owner, &mint);
        assert_eq!(ix.program_id, spl_associated_token_account::id());
        assert_eq!(ix.accounts[1].pubkey, ata);
    }

    #[test]
    fn test_mint_to_targets_destination() {
        let mint = Pubkey::new_unique();
        let destination = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let ix = mint_to(TokenProgram::Token2022, &mint, &destination, &authority, 1000).unwrap();

        assert_eq!(ix.program_id, spl_token_2022::id());
        assert_eq!(ix.accounts[0].pubkey, mint);
        assert_eq!(ix.accounts[1].pubkey, destination);
        assert_eq!(ix.accounts[2].pubkey, authority);
        assert!(ix.accounts[2].is_signer);
    }
}
