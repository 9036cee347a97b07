//! Blockchain chain identifier types and utilities
//!
//! This module provides the ChainId enum for representing the networks the
//! deployer can target. Canonical names are only used when generating a
//! starter configuration; at runtime the network name comes from the
//! configured network table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for blockchain networks
///
/// Represents Ethereum mainnet and any other EVM chain identified by its
/// numeric chain ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChainId {
	Mainnet,
	Custom { id: u64 },
}

impl ChainId {
	/// Chain ID used by Anvil and the Hardhat network
	pub const LOCAL: u64 = 31337;

	/// Create ChainId from numeric identifier
	///
	/// # Returns
	/// ChainId::Mainnet for ID 1, ChainId::Custom for all other IDs
	pub fn from_u64(id: u64) -> Self {
		match id {
			1 => Self::Mainnet,
			id => Self::Custom { id },
		}
	}

	/// Get the numeric chain identifier
	pub fn id(&self) -> u64 {
		match self {
			Self::Mainnet => 1,
			Self::Custom { id } => *id,
		}
	}

	/// Canonical short network name, as used by explorers and verification tools
	///
	/// # Returns
	/// None for chains without a well-known name
	pub fn canonical_name(&self) -> Option<&'static str> {
		match self.id() {
			1 => Some("mainnet"),
			10 => Some("optimism"),
			137 => Some("polygon"),
			8453 => Some("base"),
			17000 => Some("holesky"),
			42161 => Some("arbitrum"),
			80002 => Some("amoy"),
			11155111 => Some("sepolia"),
			Self::LOCAL => Some("localhost"),
			_ => None,
		}
	}

	/// Human-readable name for the chain
	pub fn name(&self) -> &str {
		self.canonical_name().unwrap_or("custom")
	}

	/// Whether the chain is a local development node
	pub fn is_local(&self) -> bool {
		self.id() == Self::LOCAL
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Mainnet => write!(f, "1 (mainnet)"),
			Self::Custom { id } => write!(f, "{} ({})", id, self.name()),
		}
	}
}

impl From<u64> for ChainId {
	fn from(id: u64) -> Self {
		Self::from_u64(id)
	}
}

impl From<ChainId> for u64 {
	fn from(chain: ChainId) -> Self {
		chain.id()
	}
}
