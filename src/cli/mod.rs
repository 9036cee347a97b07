//! Command-line interface definitions and parsing
//!
//! Defines the top-level parser, its global options and the subcommands,
//! plus the terminal output helpers used by the binary.

pub mod commands;
pub mod output;

use crate::constants::{env_vars, DEFAULT_CONFIG_PATH};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Deploys the SVGNFT contract and mints on-chain SVG tokens
#[derive(Parser, Debug)]
#[command(name = "svgnft-deploy")]
#[command(about = "Deploy the SVGNFT contract and mint an on-chain SVG token")]
#[command(version)]
pub struct Cli {
	/// Configuration file path
	#[arg(long, global = true, env = env_vars::CONFIG, default_value = DEFAULT_CONFIG_PATH)]
	pub config: PathBuf,

	/// Target network, by name or chain id
	#[arg(long, global = true, env = env_vars::NETWORK)]
	pub network: Option<String>,

	/// Enable debug logging
	#[arg(
		long,
		global = true,
		env = env_vars::DEBUG,
		value_parser = clap::builder::FalseyValueParser::new()
	)]
	pub debug: bool,

	#[command(subcommand)]
	pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Deploy the contract, mint the configured SVG and print its token URI
	Deploy(commands::DeployCommand),

	/// Mint an SVG against an existing deployment
	Mint(commands::MintCommand),

	/// Read the token URI of a minted token
	TokenUri(commands::TokenUriCommand),

	/// List the configured networks
	Networks,

	/// Generate a new configuration file
	Init(commands::InitCommand),
}
