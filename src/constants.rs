//! Constants and default values used throughout the deployer
//!
//! Contains the default contract name, file locations, confirmation policy,
//! and the well-known Anvil development account used by generated configs.

/// Contract deployed and minted against
pub const CONTRACT_NAME: &str = "SVGNFT";

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "svgnft.toml";

/// Default directory of compiled contract artifacts (Foundry `out/`)
pub const DEFAULT_ARTIFACTS_DIR: &str = "out";

/// Default directory of deployment records
pub const DEFAULT_DEPLOYMENTS_DIR: &str = "deployments";

/// Default image minted by the deploy command
pub const DEFAULT_SVG_PATH: &str = "./img/triangle.svg";

/// Confirmations waited for on the deployment and mint transactions
pub const DEFAULT_CONFIRMATIONS: u64 = 1;

/// Upper bound on the wait for one transaction, in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Token id read when the mint receipt carries no Transfer event
pub const FALLBACK_TOKEN_ID: u64 = 0;

/// Functions the deployer calls on the contract; the artifact ABI must expose them
pub const REQUIRED_FUNCTIONS: &[&str] = &["create", "tokenURI"];

/// Default Anvil account for local development
///
/// Well-known test account; never use it on a public network.
pub mod anvil_accounts {
	/// Anvil account #0
	pub const DEPLOYER_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

	/// Private key of Anvil account #0
	pub const DEPLOYER_PRIVATE_KEY: &str =
		"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
}

/// Environment variable names
pub mod env_vars {
	pub const CONFIG: &str = "SVGNFT_CONFIG";
	pub const NETWORK: &str = "SVGNFT_NETWORK";
	pub const DEBUG: &str = "SVGNFT_DEBUG";
	pub const DEPLOYER_PRIVATE_KEY: &str = "DEPLOYER_PRIVATE_KEY";
}
