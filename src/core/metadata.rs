//! Token URI metadata decoding
//!
//! On-chain SVG NFTs return their metadata inline as a `data:` URI, usually
//! `data:application/json;base64,<json>` whose `image` field is itself a
//! `data:image/svg+xml;base64,<svg>` URI.

use crate::types::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

const JSON_BASE64_PREFIX: &str = "data:application/json;base64,";
const JSON_PLAIN_PREFIX: &str = "data:application/json,";
const SVG_BASE64_PREFIX: &str = "data:image/svg+xml;base64,";

/// ERC-721 metadata JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub attributes: Option<serde_json::Value>,
}

impl TokenMetadata {
	/// Decode inline metadata from a token URI
	///
	/// # Returns
	/// None for URIs that point elsewhere (https, ipfs, ...)
	///
	/// # Errors
	/// Returns Error::InvalidTokenUri if an inline payload is not valid
	/// base64 or JSON
	pub fn from_token_uri(uri: &str) -> Result<Option<Self>> {
		let json = if let Some(payload) = uri.strip_prefix(JSON_BASE64_PREFIX) {
			let bytes = STANDARD
				.decode(payload.trim())
				.map_err(|e| Error::InvalidTokenUri(format!("Invalid base64 payload: {e}")))?;
			String::from_utf8(bytes)
				.map_err(|e| Error::InvalidTokenUri(format!("Payload is not UTF-8: {e}")))?
		} else if let Some(payload) = uri.strip_prefix(JSON_PLAIN_PREFIX) {
			payload.to_string()
		} else {
			return Ok(None);
		};

		serde_json::from_str(&json)
			.map(Some)
			.map_err(|e| Error::InvalidTokenUri(format!("Invalid metadata JSON: {e}")))
	}

	/// Decode the image when it is an inline base64 SVG
	pub fn image_svg(&self) -> Result<Option<String>> {
		let Some(payload) = self
			.image
			.as_deref()
			.and_then(|image| image.strip_prefix(SVG_BASE64_PREFIX))
		else {
			return Ok(None);
		};

		let bytes = STANDARD
			.decode(payload.trim())
			.map_err(|e| Error::InvalidTokenUri(format!("Invalid base64 image: {e}")))?;
		String::from_utf8(bytes)
			.map(Some)
			.map_err(|e| Error::InvalidTokenUri(format!("Image is not UTF-8: {e}")))
	}
}

/// Encode SVG markup the way SVGNFT embeds it in metadata
pub fn svg_to_image_uri(svg: &str) -> String {
	format!("{SVG_BASE64_PREFIX}{}", STANDARD.encode(svg))
}
