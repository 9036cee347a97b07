//! SVGNFT deployer library
//!
//! Deploys a precompiled SVGNFT contract to an EVM network, mints an SVG
//! image through it and reads back the token URI. The binary in
//! `src/bin/svgnft-deploy.rs` drives these pieces from the command line.

pub mod cli;
pub mod constants;
pub mod context;
pub mod core;
pub mod operations;
pub mod types;

pub use context::Context;
pub use types::{ChainId, DeploymentOutcome, DeploymentRecord, Error, MintResult, Result};
