//! CLI command definitions and argument parsing

mod deploy;
mod init;
mod mint;

pub use deploy::DeployCommand;
pub use init::InitCommand;
pub use mint::{MintCommand, TokenUriCommand};
