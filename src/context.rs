//! Application context shared by every operation
//!
//! Bundles the loaded configuration with the selected network and hands out
//! the pieces operations need: a connected provider, the signer, the artifact
//! loader and the deployment record store.

use crate::{
	core::{
		artifact::ArtifactLoader,
		blockchain::{Provider, TxBuilder},
		config::{Config, NetworkConfig},
		deployments::DeploymentStore,
	},
	types::{chain::ChainId, error::Result},
};
use alloy_signer_local::PrivateKeySigner;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Configuration plus the network selected for this run
#[derive(Debug, Clone)]
pub struct Context {
	pub config: Config,
	pub chain: ChainId,
	pub network: NetworkConfig,
	deployments: DeploymentStore,
}

impl Context {
	/// Load the configuration file and select the target network
	///
	/// # Arguments
	/// * `config_path` - TOML configuration file
	/// * `network` - Network name or chain id; falls back to the configured default
	///
	/// # Errors
	/// Returns Error if the configuration cannot be loaded or the network is unknown
	pub async fn load(config_path: &Path, network: Option<&str>) -> Result<Self> {
		let config = Config::load(config_path).await?;
		let chain = config.resolve_chain(network)?;
		Self::new(config, chain)
	}

	/// Build a context from an already loaded configuration
	///
	/// # Errors
	/// Returns Error::ChainNotFound if the chain is not in the network table
	pub fn new(config: Config, chain: ChainId) -> Result<Self> {
		let network = config.network(chain)?.clone();
		let deployments = DeploymentStore::new(config.deploy.deployments_dir.clone());

		debug!(chain = %chain, network = %network.name, "Context initialized");
		Ok(Self {
			config,
			chain,
			network,
			deployments,
		})
	}

	/// Signer for the `deployer` named account
	pub fn deployer(&self) -> Result<PrivateKeySigner> {
		self.config.accounts.deployer.signer()
	}

	/// Connect to the selected network with the deployer as signer
	///
	/// # Errors
	/// Returns Error if the key is invalid, the endpoint is unreachable, or the
	/// endpoint serves a different chain
	pub async fn provider(&self) -> Result<Provider> {
		Provider::connect(self.chain, &self.network.rpc_url, Some(self.deployer()?)).await
	}

	/// Connect to the selected network without a signer, for read-only calls
	pub async fn read_only_provider(&self) -> Result<Provider> {
		Provider::connect(self.chain, &self.network.rpc_url, None).await
	}

	/// Transaction builder honouring the configured confirmation policy
	pub fn tx_builder(&self, provider: Provider) -> TxBuilder {
		TxBuilder::new(provider)
			.with_confirmations(self.config.deploy.confirmations)
			.with_timeout(Duration::from_secs(self.config.deploy.timeout_seconds))
	}

	pub fn artifacts(&self) -> ArtifactLoader {
		ArtifactLoader::new(self.config.deploy.artifacts_dir.clone())
	}

	pub fn deployments(&self) -> &DeploymentStore {
		&self.deployments
	}

	/// Name of the contract being deployed
	pub fn contract_name(&self) -> &str {
		&self.config.deploy.contract
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{constants::anvil_accounts, types::error::Error};
	use alloy_primitives::Address;
	use std::path::PathBuf;

	const CONFIG: &str = r#"
[deploy]
deployments_dir = "records"
confirmations = 2

[accounts]
deployer = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"

[networks.31337]
name = "localhost"
rpc_url = "http://127.0.0.1:8545"

[networks.11155111]
name = "sepolia"
rpc_url = "https://rpc.sepolia.org"
"#;

	fn config() -> Config {
		Config::from_toml_str(CONFIG, &PathBuf::from("svgnft.toml")).unwrap()
	}

	#[test]
	fn test_context_selects_network() {
		let ctx = Context::new(config(), ChainId::from_u64(11155111)).unwrap();

		assert_eq!(ctx.network.name, "sepolia");
		assert_eq!(ctx.contract_name(), "SVGNFT");
		assert_eq!(ctx.deployments().root(), Path::new("records"));
		assert_eq!(
			ctx.deployer().unwrap().address(),
			anvil_accounts::DEPLOYER_ADDRESS.parse::<Address>().unwrap()
		);
	}

	#[test]
	fn test_context_rejects_unknown_chain() {
		assert!(matches!(
			Context::new(config(), ChainId::from_u64(10)),
			Err(Error::ChainNotFound(_))
		));
	}

	#[tokio::test]
	async fn test_load_missing_config() {
		let result = Context::load(Path::new("/nonexistent/svgnft.toml"), None).await;
		assert!(matches!(result, Err(Error::ConfigNotFound(_))));
	}
}
