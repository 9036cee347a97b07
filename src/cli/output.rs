//! Terminal output for deployment and mint runs
//!
//! `Display` prints the lines a human reads during a run: the deployment
//! summary, the verification command, the minted token and its URI. The
//! text itself comes from the plain formatting functions below so the
//! wording can be checked without a terminal.

use crate::types::{
	chain::ChainId,
	models::{DeploymentOutcome, MintResult},
};
use alloy_primitives::Address;
use colored::Colorize;

/// Line announcing the contract address
pub fn deployed_line(address: Address) -> String {
	format!("You have deployed an NFT contract to {address}")
}

/// hardhat-deploy style summary of a deployment
///
/// # Arguments
/// * `outcome` - Result of the deployment attempt
///
/// # Returns
/// `deploying "C" (tx: ..)...: deployed at .. with N gas` for a new
/// deployment, `reusing "C" at ..` when the recorded one was kept
pub fn deployment_line(outcome: &DeploymentOutcome) -> String {
	let record = &outcome.record;
	if outcome.newly_deployed {
		format!(
			"deploying \"{}\" (tx: {})...: deployed at {} with {} gas",
			record.contract, record.transaction_hash, record.address, record.gas_used
		)
	} else {
		format!("reusing \"{}\" at {}", record.contract, record.address)
	}
}

/// Line pointing at a token URI
pub fn token_uri_line(uri: &str) -> String {
	format!("You can view the tokenURI here {uri}")
}

/// Label of a network table entry, `name [id]` plus a selection marker
pub fn network_label(name: &str, chain: ChainId, selected: bool) -> String {
	let marker = if selected { " (selected)" } else { "" };
	format!("{name} [{}]{marker}", chain.id())
}

/// Terminal display utilities for formatted CLI output
pub struct Display;

impl Display {
	/// Displays a formatted section header with underline
	///
	/// # Arguments
	/// * `text` - Header text to display
	pub fn header(text: &str) {
		println!("\n{}", text.bold().cyan());
		println!("{}", "─".repeat(text.chars().count()).cyan());
	}

	/// Displays a success message with green checkmark
	pub fn success(message: &str) {
		println!("{} {}", "✓".green().bold(), message);
	}

	/// Displays an error message with red X symbol to stderr
	pub fn error(message: &str) {
		eprintln!("{} {}", "✗".red().bold(), message.red());
	}

	/// Displays a warning message with yellow warning symbol
	pub fn warning(message: &str) {
		println!("{} {}", "⚠".yellow().bold(), message.yellow());
	}

	fn note(message: &str) {
		println!("{} {}", "ℹ".blue().bold(), message);
	}

	/// Displays a key-value pair with formatted labels
	///
	/// # Arguments
	/// * `key` - Label or key name
	/// * `value` - Associated value to display
	pub fn kv(key: &str, value: &str) {
		println!("  {} {}", format!("{}:", key).bold(), value);
	}

	/// Displays the deployment summary line
	pub fn deployment(outcome: &DeploymentOutcome) {
		Self::note(&deployment_line(outcome));
	}

	/// Displays the command that verifies the contract source
	///
	/// # Arguments
	/// * `command` - Verification command to copy
	/// * `local` - Whether the network is a local node without an explorer
	pub fn verify(command: &str, local: bool) {
		println!("Verify with");
		println!("  {}", command.bold());
		if local {
			Self::note("Local networks have no block explorer to verify against");
		}
	}

	/// Displays where to view a token URI
	pub fn token_uri(uri: &str) {
		Self::note(&token_uri_line(uri));
	}

	/// Displays the minted token id and transaction
	pub fn minted(result: &MintResult) {
		Self::kv("Token ID", &result.token_id.to_string());
		Self::kv("Transaction", &result.tx_hash.to_string());
		if let Some(block) = result.block_number {
			Self::kv("Block", &block.to_string());
		}
	}

	/// Displays one entry of the network table
	pub fn network(name: &str, chain: ChainId, rpc_url: &str, selected: bool) {
		Self::kv(&network_label(name, chain, selected), rpc_url);
	}

	/// Displays a formatted section title with arrow prefix
	pub fn section(title: &str) {
		println!("\n{}", format!("▸ {}", title).bold());
	}

	/// Displays a numbered list of next steps
	pub fn next_steps(steps: &[&str]) {
		Self::section("Next Steps");
		for (i, step) in steps.iter().enumerate() {
			println!("  {}. {}", i + 1, step);
		}
	}
}
