/// Instruction builders over the token program clients
pub mod token;

pub use token::{
    associated_token_address, create_associated_account, create_mint_instructions,
    initialize_mint, mint_sizing, mint_to, MetadataFields, MintSizing,
};
