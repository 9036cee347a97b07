//! Initialization command arguments

use crate::constants::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::path::PathBuf;

/// Generate a new configuration file
#[derive(Args, Debug)]
pub struct InitCommand {
	/// Configuration file path
	#[arg(long, default_value = DEFAULT_CONFIG_PATH)]
	pub path: PathBuf,

	/// Chain IDs to configure (comma-separated)
	#[arg(long, value_delimiter = ',', default_value = "31337")]
	pub chains: Vec<u64>,

	/// Force overwrite existing configuration
	#[arg(long)]
	pub force: bool,
}
