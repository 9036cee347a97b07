//! Compiled contract artifacts
//!
//! Reads the JSON produced by Foundry (`out/<Name>.sol/<Name>.json`, bytecode
//! under `bytecode.object`) or Hardhat (`artifacts/.../<Name>.json`, bytecode
//! as a plain hex string). Artifacts are only read; compiling is out of scope.

use crate::types::error::{Error, Result};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{hex, keccak256, Bytes, B256};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// ABI and creation bytecode of one contract
#[derive(Debug, Clone)]
pub struct ContractArtifact {
	pub name: String,
	pub abi: JsonAbi,
	pub bytecode: Bytes,
	pub path: PathBuf,
}

impl ContractArtifact {
	/// Parse an artifact from its JSON document
	///
	/// # Errors
	/// Returns Error::InvalidArtifact if the ABI or bytecode is missing or malformed
	pub fn from_json(name: &str, json: &Value, path: &Path) -> Result<Self> {
		let abi_value = json.get("abi").ok_or_else(|| {
			Error::InvalidArtifact(format!("No ABI found in {}", path.display()))
		})?;
		let abi: JsonAbi = serde_json::from_value(abi_value.clone()).map_err(|e| {
			Error::InvalidArtifact(format!("Invalid ABI in {}: {e}", path.display()))
		})?;

		let bytecode = extract_bytecode(json).ok_or_else(|| {
			Error::InvalidArtifact(format!("No bytecode found in {}", path.display()))
		})?;
		let hex_str = bytecode.strip_prefix("0x").unwrap_or(bytecode);
		if hex_str.is_empty() {
			return Err(Error::InvalidArtifact(format!(
				"{name} has empty bytecode (abstract contract or interface?)"
			)));
		}
		let bytecode = hex::decode(hex_str)
			.map(Bytes::from)
			.map_err(|e| Error::InvalidArtifact(format!("Invalid bytecode hex: {e}")))?;

		Ok(Self {
			name: name.to_string(),
			abi,
			bytecode,
			path: path.to_path_buf(),
		})
	}

	/// keccak256 of the creation bytecode
	pub fn bytecode_hash(&self) -> B256 {
		keccak256(&self.bytecode)
	}

	/// Ensure the ABI exposes every named function
	///
	/// # Errors
	/// Returns Error::InvalidArtifact naming the first missing function
	pub fn ensure_functions(&self, names: &[&str]) -> Result<()> {
		for name in names {
			if self.abi.function(name).is_none_or(|overloads| overloads.is_empty()) {
				return Err(Error::InvalidArtifact(format!(
					"{} ABI has no `{}` function",
					self.name, name
				)));
			}
		}
		Ok(())
	}
}

/// Foundry nests the hex under `object`; Hardhat stores it directly
fn extract_bytecode(json: &Value) -> Option<&str> {
	let bytecode = json.get("bytecode")?;
	bytecode
		.as_str()
		.or_else(|| bytecode.get("object").and_then(|o| o.as_str()))
}

/// Locates artifacts inside a build output directory
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
	dir: PathBuf,
}

impl ArtifactLoader {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// Load the artifact for a contract
	///
	/// # Errors
	/// Returns Error::ArtifactNotFound if no candidate path exists, or the
	/// errors of ContractArtifact::from_json
	pub fn load(&self, name: &str) -> Result<ContractArtifact> {
		let candidates = [
			self.dir
				.join(format!("{name}.sol"))
				.join(format!("{name}.json")),
			self.dir
				.join("contracts")
				.join(format!("{name}.sol"))
				.join(format!("{name}.json")),
			self.dir.join(format!("{name}.json")),
		];

		for path in candidates {
			if !path.is_file() {
				continue;
			}

			let content = std::fs::read_to_string(&path)?;
			let json: Value = serde_json::from_str(&content).map_err(|e| {
				Error::InvalidArtifact(format!("Invalid JSON in {}: {e}", path.display()))
			})?;
			let artifact = ContractArtifact::from_json(name, &json, &path)?;
			debug!(
				contract = name,
				path = %path.display(),
				bytecode_len = artifact.bytecode.len(),
				"Loaded contract artifact"
			);
			return Ok(artifact);
		}

		Err(Error::ArtifactNotFound {
			name: name.to_string(),
			dir: self.dir.clone(),
		})
	}
}
