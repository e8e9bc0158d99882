/// Token Launchpad SDK
///
/// Everything behind the launch form:
/// - Form state and field descriptors
/// - Instruction builders over the token program clients
/// - Connection and wallet collaborators
/// - The token creation workflow
pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod instructions;
pub mod launcher;
pub mod launchpad;
pub mod testing;

pub use client::{Connection, KeypairWallet, RpcConnection, Wallet};
pub use config::*;
pub use error::*;
pub use fields::{field_descriptors, FieldDescriptor};
pub use form::{FieldName, TokenForm, TokenInputs};
pub use launcher::{LaunchReceipt, LaunchRequest, TokenLauncher};
pub use launchpad::{FormIntent, FormUpdate, LaunchPad};
