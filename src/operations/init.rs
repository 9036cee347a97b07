//! Configuration initialization operations
//!
//! Generates a starter configuration with one network entry per requested
//! chain. Secrets and endpoints are written as `${VAR}` references so the
//! file can be committed and filled from the environment or `.env`. Only
//! local chains get a localhost fallback.

use crate::{
	constants::{self, anvil_accounts, env_vars},
	types::{
		chain::ChainId,
		error::{Error, Result},
	},
};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{info, instrument};

/// First port assigned to generated local endpoints
const BASE_RPC_PORT: u16 = 8545;

/// Service for configuration initialization
#[derive(Debug, Default)]
pub struct InitOps;

impl InitOps {
	pub fn new() -> Self {
		Self
	}

	/// Create a new configuration file
	///
	/// # Arguments
	/// * `path` - Path where the configuration file will be created
	/// * `chains` - Chain IDs to include in the network table
	/// * `force` - Whether to overwrite an existing file
	///
	/// # Errors
	/// Returns Error::ConfigExists if the file exists and `force` is not set,
	/// Error::InvalidConfig if no chain is given
	#[instrument(skip(self))]
	pub async fn create(&self, path: &Path, chains: Vec<u64>, force: bool) -> Result<()> {
		if path.exists() && !force {
			return Err(Error::ConfigExists(path.to_path_buf()));
		}

		let content = render_config(&chains)?;

		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(parent).await?;
		}
		tokio::fs::write(path, content).await?;

		info!(path = %path.display(), chains = chains.len(), "Configuration written");
		Ok(())
	}
}

/// Network name written for a chain
fn network_name(chain: ChainId) -> String {
	chain
		.canonical_name()
		.map(str::to_string)
		.unwrap_or_else(|| format!("chain-{}", chain.id()))
}

/// Environment variable holding the RPC URL of a network
fn rpc_env_var(name: &str) -> String {
	let sanitized: String = name
		.chars()
		.map(|c| {
			if c.is_ascii_alphanumeric() {
				c.to_ascii_uppercase()
			} else {
				'_'
			}
		})
		.collect();
	format!("{sanitized}_RPC_URL")
}

/// Render configuration content for the given chains
fn render_config(chains: &[u64]) -> Result<String> {
	let chains: BTreeSet<u64> = chains.iter().copied().collect();
	if chains.is_empty() {
		return Err(Error::InvalidConfig(
			"At least one chain id is required".to_string(),
		));
	}

	let default_network = chains
		.iter()
		.next()
		.map(|id| network_name(ChainId::from_u64(*id)))
		.unwrap_or_default();

	let mut out = String::new();
	let write_err =
		|e: std::fmt::Error| Error::InvalidConfig(format!("Failed to render configuration: {e}"));

	writeln!(out, "# Generated by svgnft-deploy init").map_err(write_err)?;
	writeln!(out).map_err(write_err)?;
	writeln!(out, "[deploy]").map_err(write_err)?;
	writeln!(out, "contract = \"{}\"", constants::CONTRACT_NAME).map_err(write_err)?;
	writeln!(out, "artifacts_dir = \"{}\"", constants::DEFAULT_ARTIFACTS_DIR).map_err(write_err)?;
	writeln!(out, "deployments_dir = \"{}\"", constants::DEFAULT_DEPLOYMENTS_DIR)
		.map_err(write_err)?;
	writeln!(out, "svg_path = \"{}\"", constants::DEFAULT_SVG_PATH).map_err(write_err)?;
	writeln!(out, "confirmations = {}", constants::DEFAULT_CONFIRMATIONS).map_err(write_err)?;
	writeln!(out, "timeout_seconds = {}", constants::DEFAULT_TIMEOUT_SECONDS).map_err(write_err)?;
	writeln!(out, "default_network = \"{default_network}\"").map_err(write_err)?;
	writeln!(out).map_err(write_err)?;
	writeln!(out, "[accounts]").map_err(write_err)?;
	writeln!(
		out,
		"deployer = \"${{{}:-{}}}\"",
		env_vars::DEPLOYER_PRIVATE_KEY,
		anvil_accounts::DEPLOYER_PRIVATE_KEY
	)
	.map_err(write_err)?;

	let mut next_port = BASE_RPC_PORT;
	for id in &chains {
		let chain = ChainId::from_u64(*id);
		let name = network_name(chain);
		let var = rpc_env_var(&name);

		writeln!(out).map_err(write_err)?;
		writeln!(out, "[networks.{id}]").map_err(write_err)?;
		writeln!(out, "name = \"{name}\"").map_err(write_err)?;
		if chain.is_local() {
			writeln!(out, "rpc_url = \"${{{var}:-http://127.0.0.1:{next_port}}}\"")
				.map_err(write_err)?;
			next_port = next_port.saturating_add(1);
		} else {
			// No usable default for a remote endpoint
			writeln!(out, "rpc_url = \"${{{var}}}\"").map_err(write_err)?;
		}
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::config::Config;
	use tempfile::TempDir;

	#[test]
	fn test_rpc_env_var_names() {
		assert_eq!(rpc_env_var("sepolia"), "SEPOLIA_RPC_URL");
		assert_eq!(rpc_env_var("chain-424242"), "CHAIN_424242_RPC_URL");
	}

	#[test]
	fn test_render_rejects_empty_chain_list() {
		assert!(matches!(render_config(&[]), Err(Error::InvalidConfig(_))));
	}

	#[test]
	fn test_only_local_chains_get_localhost_endpoint() {
		let content = render_config(&[11155111, 31337, 424242]).unwrap();

		assert!(content.contains("rpc_url = \"${LOCALHOST_RPC_URL:-http://127.0.0.1:8545}\""));
		assert!(content.contains("rpc_url = \"${SEPOLIA_RPC_URL}\""));
		assert!(content.contains("rpc_url = \"${CHAIN_424242_RPC_URL}\""));
		assert_eq!(content.matches("127.0.0.1").count(), 1);
	}

	#[tokio::test]
	async fn test_remote_endpoint_must_come_from_environment() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("svgnft.toml");
		InitOps::new().create(&path, vec![31337, 424243], false).await.unwrap();

		match Config::load(&path).await {
			Err(Error::InvalidConfig(message)) => {
				assert!(message.contains("CHAIN_424243_RPC_URL"), "{message}")
			},
			other => panic!("expected InvalidConfig, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_generated_config_loads() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("config/svgnft.toml");

		InitOps::new()
			.create(&path, vec![424242, 31337, 31337], false)
			.await
			.unwrap();

		let content = std::fs::read_to_string(&path).unwrap().replace(
			"${CHAIN_424242_RPC_URL}",
			"https://rpc.chain-424242.example",
		);
		let config = Config::from_toml_str(&content, &path).unwrap();
		assert_eq!(
			config.chains(),
			vec![ChainId::from_u64(31337), ChainId::from_u64(424242)]
		);
		assert_eq!(config.deploy.default_network.as_deref(), Some("localhost"));
		assert_eq!(
			config.network(ChainId::from_u64(424242)).unwrap().name,
			"chain-424242"
		);
		assert_eq!(
			config.resolve_chain(None).unwrap(),
			ChainId::from_u64(31337)
		);
		config.accounts.deployer.signer().unwrap();
	}

	#[tokio::test]
	async fn test_create_refuses_overwrite_without_force() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("svgnft.toml");
		std::fs::write(&path, "# existing").unwrap();

		let result = InitOps::new().create(&path, vec![31337], false).await;
		assert!(matches!(result, Err(Error::ConfigExists(_))));
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "# existing");

		InitOps::new().create(&path, vec![31337], true).await.unwrap();
		assert!(std::fs::read_to_string(&path)
			.unwrap()
			.contains("[networks.31337]"));
	}
}
