// Command modules for the launchpad CLI

pub mod fields;
pub mod launch;
pub mod utils;
