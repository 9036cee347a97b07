//! Type definitions and data structures for the deployer
//!
//! This module contains chain identifiers, the error type, and the records
//! produced by deployments and mints.

pub mod chain;
pub mod error;
pub mod models;

pub use chain::ChainId;
pub use error::{Error, Result};
pub use models::*;
