//! Contract deployment operations
//!
//! Publishes the compiled contract artifact to the selected network and keeps
//! a deployment record per network. A recorded deployment is reused while
//! the bytecode is unchanged and the contract is still present on chain.

use crate::{
	constants,
	core::{artifact::ContractArtifact, blockchain::Provider},
	types::{
		error::{Error, Result},
		models::{DeploymentOutcome, DeploymentRecord},
	},
	Context,
};
use alloy_network::TransactionBuilder;
use alloy_primitives::Address;
use alloy_rpc_types::TransactionRequest;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Contract deployment operations handler
#[derive(Clone)]
pub struct ContractDeployer {
	ctx: Arc<Context>,
}

impl ContractDeployer {
	/// Creates a new contract deployer
	///
	/// # Arguments
	/// * `ctx` - Shared application context
	pub fn new(ctx: Arc<Context>) -> Self {
		Self { ctx }
	}

	/// Load the configured artifact and check that it exposes the functions
	/// the mint flow calls
	///
	/// # Errors
	/// Returns Error::ArtifactNotFound or Error::InvalidArtifact
	pub fn load_artifact(&self) -> Result<ContractArtifact> {
		let artifact = self.ctx.artifacts().load(self.ctx.contract_name())?;
		artifact.ensure_functions(constants::REQUIRED_FUNCTIONS)?;
		Ok(artifact)
	}

	/// Deploys the contract, or reuses the recorded deployment
	///
	/// # Arguments
	/// * `provider` - Connected provider with the deployer as signer
	/// * `force` - Deploy even when a matching record exists
	///
	/// # Returns
	/// The deployment record and whether a new contract was created
	///
	/// # Errors
	/// Returns error if the artifact is missing, the transaction fails, or the
	/// receipt carries no contract address
	#[instrument(skip(self, provider), fields(chain = %provider.chain()))]
	pub async fn deploy(&self, provider: &Provider, force: bool) -> Result<DeploymentOutcome> {
		let artifact = self.load_artifact()?;
		let bytecode_hash = artifact.bytecode_hash();

		if !force {
			if let Some(record) = self.reusable_deployment(provider, &artifact).await? {
				info!(
					contract = %record.contract,
					address = %record.address,
					"Reusing existing deployment"
				);
				return Ok(DeploymentOutcome {
					record,
					newly_deployed: false,
				});
			}
		}

		info!(
			contract = %artifact.name,
			bytecode_size = artifact.bytecode.len(),
			bytecode_hash = %bytecode_hash,
			"Deploying contract"
		);

		let tx = TransactionRequest::default().with_deploy_code(artifact.bytecode.clone());
		let receipt = self.ctx.tx_builder(provider.clone()).send_and_wait(tx).await?;

		let address = receipt
			.contract_address
			.ok_or_else(|| Error::DeploymentFailed("No contract address in receipt".to_string()))?;
		if address == Address::ZERO {
			return Err(Error::DeploymentFailed(
				"Receipt reports the zero address".to_string(),
			));
		}

		let record = DeploymentRecord {
			contract: artifact.name.clone(),
			address,
			chain_id: provider.chain().id(),
			network: self.ctx.network.name.clone(),
			transaction_hash: receipt.transaction_hash,
			block_number: receipt.block_number,
			gas_used: receipt.gas_used,
			deployer: receipt.from,
			bytecode_hash,
			abi: artifact.abi.clone(),
			deployed_at: Utc::now(),
		};
		self.ctx.deployments().save(provider.chain(), &record)?;

		info!(
			contract = %record.contract,
			address = %address,
			gas_used = record.gas_used,
			"Contract deployed successfully"
		);
		Ok(DeploymentOutcome {
			record,
			newly_deployed: true,
		})
	}

	/// Recorded deployment that can stand in for a new one
	async fn reusable_deployment(
		&self,
		provider: &Provider,
		artifact: &ContractArtifact,
	) -> Result<Option<DeploymentRecord>> {
		let Some(record) = self
			.ctx
			.deployments()
			.load(&self.ctx.network.name, &artifact.name)?
		else {
			return Ok(None);
		};

		if record.chain_id != provider.chain().id() {
			warn!(
				recorded_chain = record.chain_id,
				"Deployment record belongs to another chain, redeploying"
			);
			return Ok(None);
		}
		if record.bytecode_hash != artifact.bytecode_hash() {
			info!(address = %record.address, "Bytecode changed since last deployment");
			return Ok(None);
		}
		if provider.code_at(record.address).await?.is_empty() {
			warn!(
				address = %record.address,
				"No code at recorded address, redeploying"
			);
			return Ok(None);
		}

		Ok(Some(record))
	}
}

/// Command a human runs to verify the deployed source on a block explorer
pub fn verify_command(network: &str, address: Address, contract: &str) -> String {
	format!("forge verify-contract --chain {network} {address} {contract}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_verify_command() {
		let address: Address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
			.parse()
			.unwrap();

		assert_eq!(
			verify_command("sepolia", address, "SVGNFT"),
			"forge verify-contract --chain sepolia 0x5FbDB2315678afecb367f032d93F642f64180aa3 SVGNFT"
		);
	}
}
