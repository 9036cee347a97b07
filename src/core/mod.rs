//! Core building blocks of the deployer
//!
//! Blockchain connectivity, configuration, contract artifacts and bindings,
//! the deployment record store, token metadata decoding and logging helpers.

pub mod artifact;
pub mod blockchain;
pub mod config;
pub mod contracts;
pub mod deployments;
pub mod logging;
pub mod metadata;

pub use artifact::{ArtifactLoader, ContractArtifact};
pub use blockchain::{Provider, TxBuilder};
pub use config::Config;
pub use contracts::SvgNft;
pub use deployments::DeploymentStore;
pub use metadata::TokenMetadata;
