//! Blockchain provider and transaction management
//!
//! This module wraps an alloy HTTP provider bound to one chain. Signing,
//! nonce management, gas estimation and chain id filling are done by alloy's
//! wallet and filler layers; this module adds connection checks, confirmation
//! waiting with a timeout, and uniform error mapping.

use crate::types::{
	chain::ChainId,
	error::{Error, Result},
};
use alloy_network::{Ethereum, EthereumWallet};
use alloy_primitives::{Address, Bytes, B256};
use alloy_provider::{
	DynProvider, PendingTransactionBuilder, Provider as AlloyProvider, ProviderBuilder,
};
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use std::time::Duration;
use tracing::{debug, info};

/// Blockchain provider wrapper with chain-specific configuration
///
/// Holds a type-erased alloy provider for one chain. When built with a
/// signer, transactions sent through it are signed locally.
#[derive(Clone)]
pub struct Provider {
	inner: DynProvider,
	chain: ChainId,
	signer: Option<Address>,
}

impl std::fmt::Debug for Provider {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Provider")
			.field("chain", &self.chain)
			.field("signer", &self.signer)
			.field("inner", &"<DynProvider>")
			.finish()
	}
}

impl Provider {
	/// Create a provider for the given chain and check the endpoint
	///
	/// # Arguments
	/// * `chain` - Chain the configuration expects behind the endpoint
	/// * `rpc_url` - HTTP JSON-RPC endpoint
	/// * `signer` - Local signer used for state-changing transactions
	///
	/// # Errors
	/// Returns Error::RpcError if the URL is invalid or the endpoint does not
	/// answer, Error::ChainMismatch if it serves a different chain
	pub async fn connect(
		chain: ChainId,
		rpc_url: &str,
		signer: Option<PrivateKeySigner>,
	) -> Result<Self> {
		let url = rpc_url
			.parse()
			.map_err(|e| Error::RpcError(format!("Invalid RPC URL {rpc_url}: {e}")))?;

		let (inner, signer_address) = match signer {
			Some(signer) => {
				let address = signer.address();
				let wallet = EthereumWallet::from(signer.with_chain_id(Some(chain.id())));
				let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);
				(provider.erased(), Some(address))
			},
			None => (ProviderBuilder::new().connect_http(url).erased(), None),
		};

		let reported = inner
			.get_chain_id()
			.await
			.map_err(|e| Error::RpcError(format!("Failed to connect to {rpc_url}: {e}")))?;
		let actual = ChainId::from_u64(reported);
		if actual != chain {
			return Err(Error::ChainMismatch {
				expected: chain,
				actual,
			});
		}

		debug!(chain = %chain, rpc_url = rpc_url, "Connected to RPC endpoint");
		Ok(Self {
			inner,
			chain,
			signer: signer_address,
		})
	}

	/// Configured chain identifier
	pub fn chain(&self) -> ChainId {
		self.chain
	}

	/// Address transactions are signed with, if a signer was supplied
	pub fn signer_address(&self) -> Option<Address> {
		self.signer
	}

	/// Retrieve current block number
	pub async fn block_number(&self) -> Result<u64> {
		self.inner
			.get_block_number()
			.await
			.map_err(|e| Error::RpcError(format!("Failed to get block number: {}", e)))
	}

	/// Runtime bytecode stored at an address; empty for accounts without code
	pub async fn code_at(&self, address: Address) -> Result<Bytes> {
		self.inner
			.get_code_at(address)
			.await
			.map_err(|e| Error::RpcError(format!("Failed to get code at {address}: {e}")))
	}

	/// Execute a read-only contract call and return the raw result
	pub async fn call_contract(&self, to: Address, data: Bytes) -> Result<Bytes> {
		let tx = TransactionRequest::default().to(to).input(data.into());

		self.inner
			.call(tx)
			.await
			.map_err(|e| Error::ContractCallFailed(format!("Call to {to} failed: {e}")))
	}
}

/// Sends transactions and waits for them to be confirmed
#[derive(Debug, Clone)]
pub struct TxBuilder {
	provider: Provider,
	confirmations: u64,
	timeout: Duration,
}

impl TxBuilder {
	/// Create a transaction sender waiting for one confirmation
	pub fn new(provider: Provider) -> Self {
		Self {
			provider,
			confirmations: crate::constants::DEFAULT_CONFIRMATIONS,
			timeout: Duration::from_secs(crate::constants::DEFAULT_TIMEOUT_SECONDS),
		}
	}

	/// Number of block confirmations to wait for
	pub fn with_confirmations(mut self, confirmations: u64) -> Self {
		self.confirmations = confirmations.max(1);
		self
	}

	/// Upper bound on the wait for confirmation
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Submit a transaction without waiting for it to be mined
	///
	/// # Errors
	/// Returns Error::RpcError if the provider has no signer or submission fails
	pub async fn send(
		&self,
		mut tx: TransactionRequest,
	) -> Result<PendingTransactionBuilder<Ethereum>> {
		let from = self.provider.signer.ok_or_else(|| {
			Error::RpcError("Provider has no signer for sending transactions".to_string())
		})?;
		if tx.from.is_none() {
			tx.from = Some(from);
		}

		let pending = self
			.provider
			.inner
			.send_transaction(tx)
			.await
			.map_err(|e| Error::RpcError(format!("Failed to send transaction: {}", e)))?;

		info!(tx_hash = %pending.tx_hash(), chain = %self.provider.chain, "Transaction submitted");
		Ok(pending)
	}

	/// Submit a transaction and wait for the configured confirmations
	///
	/// # Errors
	/// Returns Error::RpcError if submission or waiting fails (including the
	/// timeout), Error::TransactionReverted if the receipt reports failure
	pub async fn send_and_wait(&self, tx: TransactionRequest) -> Result<TransactionReceipt> {
		let pending = self.send(tx).await?;
		let hash: B256 = *pending.tx_hash();

		let receipt = pending
			.with_required_confirmations(self.confirmations)
			.with_timeout(Some(self.timeout))
			.get_receipt()
			.await
			.map_err(|e| Error::RpcError(format!("Failed waiting for transaction {hash}: {e}")))?;

		if !receipt.status() {
			return Err(Error::TransactionReverted(hash));
		}

		info!(
			tx_hash = %hash,
			block = receipt.block_number.unwrap_or_default(),
			gas_used = receipt.gas_used,
			confirmations = self.confirmations,
			"Transaction confirmed"
		);
		Ok(receipt)
	}
}
