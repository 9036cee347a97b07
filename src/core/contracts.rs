//! SVGNFT contract interaction
//!
//! Typed bindings for the functions and events the deployer uses, and a
//! client bound to one deployed address. State-changing calls go through
//! `TxBuilder`; reads go through `Provider::call_contract`.

use crate::{
	core::blockchain::{Provider, TxBuilder},
	types::error::{Error, Result},
};
use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, U256};
use alloy_rpc_types::{Log, TransactionReceipt, TransactionRequest};
use alloy_sol_types::{sol, SolCall, SolEvent};
use tracing::debug;

sol! {
	/// Subset of the SVGNFT interface used by the deployer
	interface ISvgNft {
		function create(string svg) external;
		function tokenURI(uint256 tokenId) external view returns (string);
		function tokenCounter() external view returns (uint256);

		event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
	}
}

/// Client for a deployed SVGNFT contract
#[derive(Debug, Clone)]
pub struct SvgNft {
	address: Address,
	provider: Provider,
}

impl SvgNft {
	pub fn new(address: Address, provider: Provider) -> Self {
		Self { address, provider }
	}

	pub fn address(&self) -> Address {
		self.address
	}

	/// Calldata for `create(svg)`
	pub fn create_calldata(svg: &str) -> Bytes {
		ISvgNft::createCall {
			svg: svg.to_string(),
		}
		.abi_encode()
		.into()
	}

	/// Mint a token from SVG markup and wait for confirmation
	///
	/// # Errors
	/// Returns the errors of TxBuilder::send_and_wait
	pub async fn create(&self, svg: &str, tx_builder: &TxBuilder) -> Result<TransactionReceipt> {
		debug!(contract = %self.address, svg_bytes = svg.len(), "Submitting create");
		let tx = TransactionRequest::default()
			.with_to(self.address)
			.with_input(Self::create_calldata(svg));
		tx_builder.send_and_wait(tx).await
	}

	/// Read `tokenURI(tokenId)`
	pub async fn token_uri(&self, token_id: U256) -> Result<String> {
		let data = ISvgNft::tokenURICall { tokenId: token_id }.abi_encode();
		let output = self
			.provider
			.call_contract(self.address, data.into())
			.await?;
		ISvgNft::tokenURICall::abi_decode_returns(&output)
			.map_err(|e| Error::ContractCallFailed(format!("Failed to decode tokenURI: {e}")))
	}

	/// Read `tokenCounter()`, the id the next mint will receive
	pub async fn token_counter(&self) -> Result<U256> {
		let data = ISvgNft::tokenCounterCall {}.abi_encode();
		let output = self
			.provider
			.call_contract(self.address, data.into())
			.await?;
		ISvgNft::tokenCounterCall::abi_decode_returns(&output)
			.map_err(|e| Error::ContractCallFailed(format!("Failed to decode tokenCounter: {e}")))
	}

	/// Token id minted by this contract according to the receipt logs
	pub fn minted_token_id(&self, receipt: &TransactionReceipt) -> Option<U256> {
		minted_token_id(receipt.inner.logs(), self.address)
	}
}

/// Find the token id of the first mint (`Transfer` from the zero address)
/// emitted by `contract`
pub fn minted_token_id(logs: &[Log], contract: Address) -> Option<U256> {
	logs.iter()
		.filter(|log| log.address() == contract)
		.filter(|log| log.topics().first() == Some(&ISvgNft::Transfer::SIGNATURE_HASH))
		.filter_map(|log| ISvgNft::Transfer::decode_log(&log.inner).ok())
		.find(|event| event.data.from == Address::ZERO)
		.map(|event| event.data.tokenId)
}
