//! End-to-end run against a local development node
//!
//! Ignored by default. Start `anvil`, compile the contract with `forge build`
//! and point `SVGNFT_ARTIFACTS_DIR` at the resulting `out/` directory, then run
//! `cargo test --test local_network -- --ignored`.

use alloy_primitives::Address;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use svgnft_deploy::{
	core::config::Config,
	operations::{read_svg, ContractDeployer, MintOps},
	ChainId, Context, Error,
};
use tempfile::TempDir;

const TRIANGLE: &str = concat!(
	r#"<svg xmlns="http://www.w3.org/2000/svg" height="210" width="400">"#,
	r#"<path d="M150 0 L75 200 L225 200 Z" /></svg>"#
);

fn local_context(dir: &Path) -> Arc<Context> {
	let rpc_url =
		std::env::var("ANVIL_RPC_URL").unwrap_or_else(|_| "http://127.0.0.1:8545".to_string());
	let artifacts = std::env::var("SVGNFT_ARTIFACTS_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|_| PathBuf::from("out"));

	let toml = format!(
		r#"
[deploy]
artifacts_dir = '{artifacts}'
deployments_dir = '{deployments}'

[accounts]
deployer = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"

[networks.31337]
name = "localhost"
rpc_url = "{rpc_url}"
"#,
		artifacts = artifacts.display(),
		deployments = dir.join("deployments").display(),
	);
	let config = Config::from_toml_str(&toml, &dir.join("svgnft.toml")).unwrap();
	Arc::new(Context::new(config, ChainId::from_u64(31337)).unwrap())
}

#[tokio::test]
#[ignore = "needs anvil and a compiled SVGNFT artifact"]
async fn deploy_and_mint_on_local_node() {
	let dir = TempDir::new().unwrap();
	let ctx = local_context(dir.path());
	let provider = ctx.provider().await.unwrap();

	let deployer = ContractDeployer::new(ctx.clone());
	let outcome = deployer.deploy(&provider, false).await.unwrap();
	assert!(outcome.newly_deployed);
	assert_ne!(outcome.record.address, Address::ZERO);

	let again = deployer.deploy(&provider, false).await.unwrap();
	assert!(!again.newly_deployed);
	assert_eq!(again.record.address, outcome.record.address);

	let minted = MintOps::new(ctx.clone())
		.mint(&provider, outcome.record.address, TRIANGLE)
		.await
		.unwrap();
	assert!(!minted.token_uri.is_empty());
}

#[test]
fn missing_svg_is_an_error() {
	let dir = TempDir::new().unwrap();

	let result = read_svg(&dir.path().join("img/triangle.svg"));

	assert!(matches!(result, Err(Error::SvgNotFound(_))));
}
