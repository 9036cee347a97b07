//! Configuration management and environment setup
//!
//! Loads the deployer configuration from a TOML file: the network table
//! (chain id to network name and RPC endpoint), the deployer account, and the
//! deployment settings. `${VAR}` and `${VAR:-default}` references are resolved
//! from the environment (including a `.env` file) before parsing.

use crate::{
	constants,
	types::{
		chain::ChainId,
		error::{Error, Result},
	},
};
use alloy_signer_local::PrivateKeySigner;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Central configuration for a deployment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	/// Path the configuration was loaded from
	#[serde(skip)]
	pub path: PathBuf,
	/// Deployment settings
	#[serde(default)]
	pub deploy: DeploySettings,
	/// Named accounts used for signing
	pub accounts: AccountsConfig,
	/// Network table keyed by chain id
	#[serde(deserialize_with = "deserialize_networks")]
	pub networks: BTreeMap<u64, NetworkConfig>,
}

/// Settings controlling what gets deployed and how long to wait for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploySettings {
	/// Name of the contract artifact to deploy
	#[serde(default = "default_contract")]
	pub contract: String,
	/// Directory holding compiled contract artifacts
	#[serde(default = "default_artifacts_dir")]
	pub artifacts_dir: PathBuf,
	/// Directory where deployment records are written
	#[serde(default = "default_deployments_dir")]
	pub deployments_dir: PathBuf,
	/// SVG image minted by the deploy command
	#[serde(default = "default_svg_path")]
	pub svg_path: PathBuf,
	/// Block confirmations to wait for on every transaction
	#[serde(default = "default_confirmations")]
	pub confirmations: u64,
	/// Upper bound on the wait for a single transaction
	#[serde(default = "default_timeout_seconds")]
	pub timeout_seconds: u64,
	/// Network used when none is selected on the command line
	#[serde(default)]
	pub default_network: Option<String>,
}

impl Default for DeploySettings {
	fn default() -> Self {
		Self {
			contract: default_contract(),
			artifacts_dir: default_artifacts_dir(),
			deployments_dir: default_deployments_dir(),
			svg_path: default_svg_path(),
			confirmations: default_confirmations(),
			timeout_seconds: default_timeout_seconds(),
			default_network: None,
		}
	}
}

fn default_contract() -> String {
	constants::CONTRACT_NAME.to_string()
}

fn default_artifacts_dir() -> PathBuf {
	PathBuf::from(constants::DEFAULT_ARTIFACTS_DIR)
}

fn default_deployments_dir() -> PathBuf {
	PathBuf::from(constants::DEFAULT_DEPLOYMENTS_DIR)
}

fn default_svg_path() -> PathBuf {
	PathBuf::from(constants::DEFAULT_SVG_PATH)
}

fn default_confirmations() -> u64 {
	constants::DEFAULT_CONFIRMATIONS
}

fn default_timeout_seconds() -> u64 {
	constants::DEFAULT_TIMEOUT_SECONDS
}

/// Named accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
	/// Account that deploys the contract and sends the mint transaction
	pub deployer: PrivateKey,
}

/// One entry of the network table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
	/// Human-readable network name
	pub name: String,
	/// HTTP JSON-RPC endpoint
	pub rpc_url: String,
}

/// Hex-encoded private key that never appears in debug output
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrivateKey(String);

impl PrivateKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	/// Run a closure with the raw key material
	pub fn with_exposed<T>(&self, f: impl FnOnce(&str) -> T) -> T {
		f(&self.0)
	}

	/// Build a local signer from the key
	///
	/// # Errors
	/// Returns Error::InvalidPrivateKey if the key is not a 32-byte hex string
	pub fn signer(&self) -> Result<PrivateKeySigner> {
		self.with_exposed(|key| {
			PrivateKeySigner::from_str(key.trim()).map_err(|_| Error::InvalidPrivateKey)
		})
	}
}

impl fmt::Debug for PrivateKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("PrivateKey(<redacted>)")
	}
}

/// Network table keys are TOML strings; turn them into chain ids
fn deserialize_networks<'de, D>(
	deserializer: D,
) -> std::result::Result<BTreeMap<u64, NetworkConfig>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw: BTreeMap<String, NetworkConfig> = BTreeMap::deserialize(deserializer)?;
	raw.into_iter()
		.map(|(key, network)| {
			key.parse::<u64>()
				.map(|id| (id, network))
				.map_err(|_| serde::de::Error::custom(format!("Invalid chain id in networks: {key}")))
		})
		.collect()
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable VAR_NAME.
/// Supports default values with ${VAR_NAME:-default_value}.
///
/// Input strings are limited to 1MB.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String> {
	const MAX_INPUT_SIZE: usize = 1024 * 1024;
	if input.len() > MAX_INPUT_SIZE {
		return Err(Error::InvalidConfig(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| Error::InvalidConfig(format!("Regex error: {e}")))?;

	let mut result = String::with_capacity(input.len());
	let mut last = 0;

	for cap in re.captures_iter(input) {
		let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
			continue;
		};
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name.as_str()) {
			Ok(v) => v,
			Err(_) => match default_value {
				Some(default) => default.to_string(),
				None => {
					return Err(Error::InvalidConfig(format!(
						"Environment variable '{}' not found",
						var_name.as_str()
					)))
				},
			},
		};

		result.push_str(&input[last..full_match.start()]);
		result.push_str(&value);
		last = full_match.end();
	}
	result.push_str(&input[last..]);

	Ok(result)
}

impl Config {
	/// Load configuration from file path with environment variable support
	///
	/// Loads environment variables from a .env file if present, then reads,
	/// resolves and validates the configuration file.
	///
	/// # Errors
	/// Returns Error if the file is missing, unreadable, references an unset
	/// environment variable, or fails validation
	pub async fn load(path: &Path) -> Result<Self> {
		let _ = dotenvy::dotenv();

		if !path.exists() {
			return Err(Error::ConfigNotFound(path.to_path_buf()));
		}

		let content = tokio::fs::read_to_string(path).await?;
		Self::from_toml_str(&content, path)
	}

	/// Parse and validate configuration content without touching the filesystem
	pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
		let resolved = resolve_env_vars(content)?;
		let mut config: Config = toml::from_str(&resolved)?;
		config.path = path.to_path_buf();
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		if self.networks.is_empty() {
			return Err(Error::InvalidConfig(
				"Networks configuration cannot be empty".into(),
			));
		}

		let mut names = HashSet::new();
		for (chain_id, network) in &self.networks {
			if network.name.trim().is_empty() {
				return Err(Error::InvalidConfig(format!(
					"Network {chain_id} has an empty name"
				)));
			}
			if !names.insert(network.name.as_str()) {
				return Err(Error::InvalidConfig(format!(
					"Duplicate network name: {}",
					network.name
				)));
			}
			url::Url::parse(&network.rpc_url).map_err(|e| {
				Error::InvalidConfig(format!("Invalid RPC URL for network {}: {e}", network.name))
			})?;
		}

		if self.deploy.contract.trim().is_empty() {
			return Err(Error::InvalidConfig("Contract name cannot be empty".into()));
		}
		if self.deploy.confirmations == 0 {
			return Err(Error::InvalidConfig(
				"confirmations must be at least 1".into(),
			));
		}

		if let Some(default) = &self.deploy.default_network {
			self.find_chain(default)?;
		}

		Ok(())
	}

	/// Retrieve network configuration for a specific chain
	///
	/// # Errors
	/// Returns Error::ChainNotFound if the chain is not in the network table
	pub fn network(&self, chain: ChainId) -> Result<&NetworkConfig> {
		self.networks
			.get(&chain.id())
			.ok_or(Error::ChainNotFound(chain))
	}

	/// All configured chains in ascending chain id order
	pub fn chains(&self) -> Vec<ChainId> {
		self.networks.keys().copied().map(ChainId::from_u64).collect()
	}

	/// Select the target chain
	///
	/// The selector is either a numeric chain id or a network name. Without a
	/// selector the configured default network is used, or the only network
	/// when exactly one is configured.
	pub fn resolve_chain(&self, selector: Option<&str>) -> Result<ChainId> {
		if let Some(selector) = selector {
			return self.find_chain(selector);
		}

		if let Some(default) = &self.deploy.default_network {
			return self.find_chain(default);
		}

		match self.chains().as_slice() {
			[only] => Ok(*only),
			_ => Err(Error::InvalidConfig(
				"Several networks are configured; select one with --network or deploy.default_network"
					.to_string(),
			)),
		}
	}

	fn find_chain(&self, selector: &str) -> Result<ChainId> {
		if let Ok(id) = selector.parse::<u64>() {
			let chain = ChainId::from_u64(id);
			self.network(chain)?;
			return Ok(chain);
		}

		self.networks
			.iter()
			.find(|(_, network)| network.name == selector)
			.map(|(id, _)| ChainId::from_u64(*id))
			.ok_or_else(|| Error::UnknownNetwork(selector.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TWO_NETWORKS: &str = r#"
[accounts]
deployer = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"

[networks.31337]
name = "localhost"
rpc_url = "http://127.0.0.1:8545"

[networks.11155111]
name = "sepolia"
rpc_url = "https://rpc.sepolia.org"
"#;

	fn parse(content: &str) -> Result<Config> {
		Config::from_toml_str(content, Path::new("svgnft.toml"))
	}

	#[test]
	fn test_env_var_resolution() {
		std::env::set_var("SVGNFT_TEST_HOST", "localhost");
		std::env::set_var("SVGNFT_TEST_PORT", "8545");

		let input = "url = \"http://${SVGNFT_TEST_HOST}:${SVGNFT_TEST_PORT}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "url = \"http://localhost:8545\"");

		std::env::remove_var("SVGNFT_TEST_HOST");
		std::env::remove_var("SVGNFT_TEST_PORT");
	}

	#[test]
	fn test_env_var_with_default() {
		let input = "value = \"${SVGNFT_MISSING_VAR:-default_value}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "value = \"default_value\"");
	}

	#[test]
	fn test_missing_env_var_error() {
		let result = resolve_env_vars("value = \"${SVGNFT_MISSING_VAR}\"");
		assert!(result.unwrap_err().to_string().contains("SVGNFT_MISSING_VAR"));
	}

	#[test]
	fn test_config_defaults_and_network_table() {
		let config = parse(TWO_NETWORKS).unwrap();

		assert_eq!(config.deploy.contract, "SVGNFT");
		assert_eq!(config.deploy.confirmations, 1);
		assert_eq!(config.deploy.svg_path, PathBuf::from("./img/triangle.svg"));
		assert_eq!(
			config.chains(),
			vec![ChainId::from_u64(31337), ChainId::from_u64(11155111)]
		);
		assert_eq!(config.network(ChainId::from_u64(31337)).unwrap().name, "localhost");
		assert!(matches!(
			config.network(ChainId::from_u64(5)),
			Err(Error::ChainNotFound(_))
		));
	}

	#[test]
	fn test_resolve_chain_by_name_id_and_default() {
		let config = parse(TWO_NETWORKS).unwrap();

		assert_eq!(config.resolve_chain(Some("sepolia")).unwrap().id(), 11155111);
		assert_eq!(config.resolve_chain(Some("31337")).unwrap().id(), 31337);
		assert!(matches!(
			config.resolve_chain(Some("rinkeby")),
			Err(Error::UnknownNetwork(_))
		));
		// Two networks and no default: ambiguous
		assert!(config.resolve_chain(None).is_err());

		let with_default = format!("[deploy]\ndefault_network = \"localhost\"\n{TWO_NETWORKS}");
		let config = parse(&with_default).unwrap();
		assert_eq!(config.resolve_chain(None).unwrap().id(), 31337);
	}

	#[test]
	fn test_validation_rejects_bad_tables() {
		let no_networks = r#"
networks = {}

[accounts]
deployer = "0x01"
"#;
		assert!(parse(no_networks).is_err());

		let duplicate = TWO_NETWORKS.replace("name = \"sepolia\"", "name = \"localhost\"");
		assert!(parse(&duplicate)
			.unwrap_err()
			.to_string()
			.contains("Duplicate network name"));

		let bad_url = TWO_NETWORKS.replace("https://rpc.sepolia.org", "not a url");
		assert!(parse(&bad_url).is_err());

		let zero_confirmations = format!("[deploy]\nconfirmations = 0\n{TWO_NETWORKS}");
		assert!(parse(&zero_confirmations).is_err());

		let bad_key = TWO_NETWORKS.replace("[networks.31337]", "[networks.local]");
		assert!(parse(&bad_key).is_err());
	}

	#[test]
	fn test_private_key_is_redacted_and_usable() {
		let config = parse(TWO_NETWORKS).unwrap();
		let debug = format!("{:?}", config);
		assert!(!debug.contains("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"));
		assert!(debug.contains("<redacted>"));

		let signer = config.accounts.deployer.signer().unwrap();
		assert_eq!(
			signer.address().to_checksum(None),
			"0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
		);

		assert!(matches!(
			PrivateKey::new("0x1234").signer(),
			Err(Error::InvalidPrivateKey)
		));
	}
}
