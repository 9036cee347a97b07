//! Deploy command arguments

use clap::Args;
use std::path::PathBuf;

/// Deploy the contract and mint the configured SVG
#[derive(Args, Debug)]
pub struct DeployCommand {
	/// SVG file to mint (defaults to deploy.svg_path)
	#[arg(long)]
	pub svg: Option<PathBuf>,

	/// Deploy even when a deployment with the same bytecode is recorded
	#[arg(long)]
	pub force: bool,
}
