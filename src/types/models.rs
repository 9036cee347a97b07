//! Data models for deployments and mints
//!
//! This module defines the records produced by a run: where a contract was
//! deployed on a network and what a mint transaction produced.

use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, B256, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted record of a contract deployment on one network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
	/// Contract name as found in the artifact
	pub contract: String,
	/// Address the contract was deployed to
	pub address: Address,
	/// Numeric chain identifier
	pub chain_id: u64,
	/// Network name from the network table
	pub network: String,
	/// Hash of the creation transaction
	pub transaction_hash: B256,
	/// Block the creation transaction was included in
	pub block_number: Option<u64>,
	/// Gas consumed by the creation transaction
	pub gas_used: u64,
	/// Account that sent the creation transaction
	pub deployer: Address,
	/// keccak256 of the creation bytecode, used to detect artifact changes
	pub bytecode_hash: B256,
	/// Contract ABI at deployment time
	pub abi: JsonAbi,
	/// When the deployment was recorded
	pub deployed_at: DateTime<Utc>,
}

/// Result of a deployment attempt
#[derive(Debug, Clone)]
pub struct DeploymentOutcome {
	pub record: DeploymentRecord,
	/// False when an existing deployment with the same bytecode was reused
	pub newly_deployed: bool,
}

/// Result of a `create(svg)` mint transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintResult {
	pub tx_hash: B256,
	pub block_number: Option<u64>,
	pub token_id: U256,
	pub token_uri: String,
}

/// Token URI read back from a deployed contract
#[derive(Debug, Clone)]
pub struct TokenLookup {
	pub token_id: U256,
	pub token_uri: String,
	/// `tokenCounter()` at read time, None when the contract does not answer it
	pub minted: Option<U256>,
}

impl TokenLookup {
	/// Whether the token id is below the minted count, if the count is known
	pub fn is_minted(&self) -> Option<bool> {
		self.minted.map(|count| self.token_id < count)
	}
}
