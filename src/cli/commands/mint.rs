//! Mint and token URI command arguments
//!
//! Both commands target the recorded deployment on the selected network
//! unless an explicit contract address is given.

use clap::Args;
use std::path::PathBuf;

/// Mint an SVG against an existing deployment
#[derive(Args, Debug)]
pub struct MintCommand {
	/// Contract address (defaults to the recorded deployment)
	#[arg(long)]
	pub address: Option<String>,

	/// SVG file to mint (defaults to deploy.svg_path)
	#[arg(long)]
	pub svg: Option<PathBuf>,
}

/// Read the token URI of a minted token
#[derive(Args, Debug)]
pub struct TokenUriCommand {
	/// Contract address (defaults to the recorded deployment)
	#[arg(long)]
	pub address: Option<String>,

	/// Token identifier
	#[arg(long, default_value_t = 0)]
	pub token_id: u64,

	/// Decode inline JSON metadata and SVG image
	#[arg(long)]
	pub decode: bool,
}
