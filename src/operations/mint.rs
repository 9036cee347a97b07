//! Token minting operations
//!
//! Reads SVG markup from disk, mints it through `create(svg)` and reads back
//! the token URI the contract builds for the new token.

use crate::{
	constants::FALLBACK_TOKEN_ID,
	core::{
		blockchain::Provider,
		contracts::SvgNft,
		metadata::{svg_to_image_uri, TokenMetadata},
	},
	types::{
		error::{Error, Result},
		models::{MintResult, TokenLookup},
	},
	Context,
};
use alloy_primitives::{Address, U256};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Read SVG markup verbatim
///
/// # Errors
/// Returns Error::SvgNotFound if the file does not exist, Error::InvalidSvg
/// if it is not UTF-8 text or is empty
pub fn read_svg(path: &Path) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|e| match e.kind() {
		ErrorKind::NotFound => Error::SvgNotFound(path.to_path_buf()),
		_ => Error::Io(e),
	})?;

	let svg = String::from_utf8(bytes).map_err(|e| {
		Error::InvalidSvg(format!("{} is not UTF-8 text: {e}", path.display()))
	})?;
	if svg.trim().is_empty() {
		return Err(Error::InvalidSvg(format!("{} is empty", path.display())));
	}
	if !svg.contains("<svg") {
		warn!(path = %path.display(), "File has no <svg> element, minting it anyway");
	}

	debug!(path = %path.display(), bytes = svg.len(), "SVG loaded");
	Ok(svg)
}

/// Whether the token URI embeds exactly this SVG
///
/// # Returns
/// None when the URI carries no inline SVG image to compare against
pub fn embeds_svg(token_uri: &str, svg: &str) -> Option<bool> {
	let metadata = TokenMetadata::from_token_uri(token_uri).ok().flatten()?;
	let image = metadata.image.as_deref()?;
	if !image.starts_with("data:image/svg+xml") {
		return None;
	}
	Some(image == svg_to_image_uri(svg))
}

/// Token minting operations handler
pub struct MintOps {
	ctx: Arc<Context>,
}

impl MintOps {
	/// Creates a new mint operations handler
	///
	/// # Arguments
	/// * `ctx` - Shared application context
	pub fn new(ctx: Arc<Context>) -> Self {
		Self { ctx }
	}

	/// Address of the recorded deployment on the selected network
	///
	/// # Errors
	/// Returns Error::DeploymentNotFound if the contract was never deployed there
	pub fn deployed_address(&self) -> Result<Address> {
		let record = self
			.ctx
			.deployments()
			.require(&self.ctx.network.name, self.ctx.contract_name())?;
		Ok(record.address)
	}

	/// Mints an SVG and reads back its token URI
	///
	/// # Arguments
	/// * `provider` - Connected provider with the deployer as signer
	/// * `contract` - Address of the deployed SVGNFT contract
	/// * `svg` - Markup passed verbatim to `create`
	///
	/// # Returns
	/// Transaction hash, minted token id and its token URI
	///
	/// # Errors
	/// Returns error if the transaction reverts, times out, or the URI read fails
	#[instrument(skip(self, provider, svg), fields(svg_bytes = svg.len()))]
	pub async fn mint(
		&self,
		provider: &Provider,
		contract: Address,
		svg: &str,
	) -> Result<MintResult> {
		let nft = SvgNft::new(contract, provider.clone());
		let receipt = nft.create(svg, &self.ctx.tx_builder(provider.clone())).await?;

		let token_id = match nft.minted_token_id(&receipt) {
			Some(id) => id,
			None => {
				warn!(
					tx_hash = %receipt.transaction_hash,
					fallback = FALLBACK_TOKEN_ID,
					"No Transfer event in receipt, reading fallback token id"
				);
				U256::from(FALLBACK_TOKEN_ID)
			},
		};

		let token_uri = nft.token_uri(token_id).await?;
		match embeds_svg(&token_uri, svg) {
			Some(true) => debug!(token_id = %token_id, "Token URI embeds the minted SVG"),
			Some(false) => {
				warn!(token_id = %token_id, "Token URI image differs from the minted SVG")
			},
			None => {},
		}

		info!(
			contract = %nft.address(),
			token_id = %token_id,
			tx_hash = %receipt.transaction_hash,
			"Token minted"
		);
		Ok(MintResult {
			tx_hash: receipt.transaction_hash,
			block_number: receipt.block_number,
			token_id,
			token_uri,
		})
	}

	/// Number of tokens minted so far
	pub async fn minted_count(&self, provider: &Provider, contract: Address) -> Result<U256> {
		SvgNft::new(contract, provider.clone())
			.token_counter()
			.await
	}

	/// Reads a token URI together with the minted count when available
	///
	/// `tokenCounter()` is optional on ERC-721 contracts, so a failed count
	/// read is logged and reported as unknown. The URI read must succeed.
	///
	/// # Errors
	/// Returns Error::ContractCallFailed if `tokenURI` cannot be read
	#[instrument(skip(self, provider))]
	pub async fn lookup(
		&self,
		provider: &Provider,
		contract: Address,
		token_id: U256,
	) -> Result<TokenLookup> {
		let minted = match self.minted_count(provider, contract).await {
			Ok(count) => Some(count),
			Err(e) => {
				warn!(contract = %contract, error = %e, "tokenCounter() unavailable");
				None
			},
		};
		let token_uri = self.token_uri(provider, contract, token_id).await?;

		Ok(TokenLookup {
			token_id,
			token_uri,
			minted,
		})
	}

	/// Reads `tokenURI(tokenId)` from a deployed contract
	pub async fn token_uri(
		&self,
		provider: &Provider,
		contract: Address,
		token_id: U256,
	) -> Result<String> {
		let uri = SvgNft::new(contract, provider.clone())
			.token_uri(token_id)
			.await?;
		if uri.is_empty() {
			warn!(
				contract = %contract,
				token_id = %token_id,
				"Contract returned an empty token URI"
			);
		}
		Ok(uri)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use base64::{engine::general_purpose::STANDARD, Engine as _};
	use tempfile::TempDir;

	const TRIANGLE: &str =
		r#"<svg xmlns="http://www.w3.org/2000/svg"><polygon points="0,100 50,0 100,100"/></svg>"#;

	#[test]
	fn test_read_svg_verbatim() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("triangle.svg");
		std::fs::write(&path, format!("{TRIANGLE}\n")).unwrap();

		assert_eq!(read_svg(&path).unwrap(), format!("{TRIANGLE}\n"));
	}

	#[test]
	fn test_read_svg_missing_file() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("img/triangle.svg");

		match read_svg(&path) {
			Err(Error::SvgNotFound(missing)) => assert_eq!(missing, path),
			other => panic!("expected SvgNotFound, got {other:?}"),
		}
	}

	#[test]
	fn test_read_svg_rejects_binary_and_empty() {
		let dir = TempDir::new().unwrap();
		let binary = dir.path().join("image.png");
		std::fs::write(&binary, [0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe]).unwrap();
		assert!(matches!(read_svg(&binary), Err(Error::InvalidSvg(_))));

		let empty = dir.path().join("empty.svg");
		std::fs::write(&empty, "  \n").unwrap();
		assert!(matches!(read_svg(&empty), Err(Error::InvalidSvg(_))));
	}

	#[test]
	fn test_read_svg_accepts_markup_without_svg_element() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("note.txt");
		std::fs::write(&path, "not really an image").unwrap();

		assert_eq!(read_svg(&path).unwrap(), "not really an image");
	}

	#[test]
	fn test_embeds_svg() {
		let json = format!(
			r#"{{"name":"SVG NFT","image":"{}"}}"#,
			svg_to_image_uri(TRIANGLE)
		);
		let uri = format!("data:application/json;base64,{}", STANDARD.encode(json));

		assert_eq!(embeds_svg(&uri, TRIANGLE), Some(true));
		assert_eq!(embeds_svg(&uri, "<svg/>"), Some(false));
		assert_eq!(embeds_svg("ipfs://QmHash", TRIANGLE), None);
	}
}
