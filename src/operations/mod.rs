//! High-level operation implementations for CLI commands
//!
//! Contract deployment, minting and configuration initialization. Each
//! submodule provides a dedicated service for its part of the run.

pub mod deploy;
pub mod init;
pub mod mint;

pub use deploy::{verify_command, ContractDeployer};
pub use init::InitOps;
pub use mint::{read_svg, MintOps};
