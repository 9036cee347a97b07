//! Deployment record store
//!
//! Keeps one JSON file per contract and network under
//! `<root>/<network>/<Contract>.json`, plus a `.chainId` marker per network
//! directory. Records let later runs reuse a deployment and let `mint` and
//! `token-uri` find the contract address.

use crate::types::{
	chain::ChainId,
	error::{Error, Result},
	models::DeploymentRecord,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filesystem store of deployment records
#[derive(Debug, Clone)]
pub struct DeploymentStore {
	root: PathBuf,
}

impl DeploymentStore {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Path of the record for a contract on a network
	pub fn record_path(&self, network: &str, contract: &str) -> PathBuf {
		self.root.join(network).join(format!("{contract}.json"))
	}

	/// Load the record for a contract on a network
	///
	/// # Returns
	/// None when nothing has been recorded yet
	pub fn load(&self, network: &str, contract: &str) -> Result<Option<DeploymentRecord>> {
		let path = self.record_path(network, contract);
		if !path.exists() {
			return Ok(None);
		}

		let content = std::fs::read_to_string(&path)?;
		let record = serde_json::from_str(&content)?;
		Ok(Some(record))
	}

	/// Load the record or fail with Error::DeploymentNotFound
	pub fn require(&self, network: &str, contract: &str) -> Result<DeploymentRecord> {
		self.load(network, contract)?
			.ok_or_else(|| Error::DeploymentNotFound {
				contract: contract.to_string(),
				network: network.to_string(),
			})
	}

	/// Write a record, creating the network directory if needed
	///
	/// # Returns
	/// Path of the written record
	pub fn save(&self, chain: ChainId, record: &DeploymentRecord) -> Result<PathBuf> {
		let network_dir = self.root.join(&record.network);
		std::fs::create_dir_all(&network_dir)?;
		std::fs::write(network_dir.join(".chainId"), chain.id().to_string())?;

		let path = self.record_path(&record.network, &record.contract);
		std::fs::write(&path, serde_json::to_string_pretty(record)?)?;

		debug!(path = %path.display(), address = %record.address, "Deployment record saved");
		Ok(path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_json_abi::JsonAbi;
	use alloy_primitives::{Address, B256};
	use tempfile::TempDir;

	fn record() -> DeploymentRecord {
		DeploymentRecord {
			contract: "SVGNFT".to_string(),
			address: Address::from([0xab; 20]),
			chain_id: 31337,
			network: "localhost".to_string(),
			transaction_hash: B256::from([1u8; 32]),
			block_number: Some(1),
			gas_used: 2_000_000,
			deployer: Address::from([0xcd; 20]),
			bytecode_hash: B256::from([2u8; 32]),
			abi: JsonAbi::default(),
			deployed_at: chrono::Utc::now(),
		}
	}

	#[test]
	fn test_save_then_load() {
		let dir = TempDir::new().unwrap();
		let store = DeploymentStore::new(dir.path());

		assert!(store.load("localhost", "SVGNFT").unwrap().is_none());
		assert!(matches!(
			store.require("localhost", "SVGNFT"),
			Err(Error::DeploymentNotFound { .. })
		));

		let path = store.save(ChainId::from_u64(31337), &record()).unwrap();
		assert_eq!(path, dir.path().join("localhost/SVGNFT.json"));
		assert_eq!(
			std::fs::read_to_string(dir.path().join("localhost/.chainId")).unwrap(),
			"31337"
		);

		let loaded = store.require("localhost", "SVGNFT").unwrap();
		assert_eq!(loaded.address, Address::from([0xab; 20]));
		assert_eq!(loaded.bytecode_hash, B256::from([2u8; 32]));
		assert_eq!(loaded.gas_used, 2_000_000);
	}

	#[test]
	fn test_corrupt_record_is_an_error() {
		let dir = TempDir::new().unwrap();
		let store = DeploymentStore::new(dir.path());
		std::fs::create_dir_all(dir.path().join("localhost")).unwrap();
		std::fs::write(dir.path().join("localhost/SVGNFT.json"), "{not json").unwrap();

		assert!(matches!(
			store.load("localhost", "SVGNFT"),
			Err(Error::Json(_))
		));
	}
}
