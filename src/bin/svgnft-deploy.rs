//! Main binary entry point for the SVGNFT deployer
//!
//! Parses arguments, sets up logging and dispatches commands to their
//! operation handlers. `deploy` runs the full flow: deploy the contract,
//! mint the configured SVG and print where to find the token URI.

use alloy_primitives::{Address, U256};
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use svgnft_deploy::{
	cli::{
		commands::{DeployCommand, InitCommand, MintCommand, TokenUriCommand},
		output::{deployed_line, Display},
		Cli, Commands,
	},
	core::{config::Config, logging, metadata::TokenMetadata},
	operations::{read_svg, verify_command, ContractDeployer, InitOps, MintOps},
	Context,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
	// Load environment variables from .env file if it exists
	let _ = dotenvy::dotenv();

	let cli = Cli::parse();
	init_logging(cli.debug);

	let network = cli.network.as_deref();
	let result = match cli.command {
		Commands::Deploy(cmd) => handle_deploy(&cli.config, network, cmd).await,
		Commands::Mint(cmd) => handle_mint(&cli.config, network, cmd).await,
		Commands::TokenUri(cmd) => handle_token_uri(&cli.config, network, cmd).await,
		Commands::Networks => handle_networks(&cli.config, network).await,
		Commands::Init(cmd) => handle_init(cmd).await,
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			Display::error(&format!("{e:#}"));
			ExitCode::FAILURE
		},
	}
}

/// Initialize structured logging
///
/// Logs are controlled via RUST_LOG with a default of info for this crate
/// and warn for dependencies; `--debug` raises this crate to debug.
fn init_logging(debug: bool) {
	use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

	let env_filter = if debug {
		EnvFilter::new("svgnft_deploy=debug,warn")
	} else {
		EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new("svgnft_deploy=info,warn"))
	};

	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_target(true)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.with(env_filter)
		.init();
}

async fn load_context(config: &Path, network: Option<&str>) -> Result<Arc<Context>> {
	let ctx = Context::load(config, network)
		.await
		.with_context(|| format!("Failed to load configuration from {}", config.display()))?;
	Ok(Arc::new(ctx))
}

fn parse_address(address: &str) -> Result<Address> {
	address
		.parse()
		.with_context(|| format!("Invalid contract address: {address}"))
}

/// Handle deploy command
#[instrument(skip(cmd))]
async fn handle_deploy(config: &Path, network: Option<&str>, cmd: DeployCommand) -> Result<()> {
	let ctx = load_context(config, network).await?;

	Display::header(&format!("Deploying {}", ctx.contract_name()));
	Display::kv("Network", &ctx.network.name);
	Display::kv("Chain", &ctx.chain.to_string());

	// Read the image first so a missing file does not cost a deployment
	let svg_path = cmd.svg.unwrap_or_else(|| ctx.config.deploy.svg_path.clone());
	let svg = read_svg(&svg_path)?;

	let provider = ctx.provider().await?;
	if let Some(deployer) = provider.signer_address() {
		Display::kv("Deployer", &deployer.to_string());
	}

	logging::operation_start(
		"deploy",
		&format!("{} on {}", ctx.contract_name(), ctx.network.name),
	);
	let outcome = ContractDeployer::new(ctx.clone())
		.deploy(&provider, cmd.force)
		.await?;
	let record = &outcome.record;

	Display::deployment(&outcome);
	logging::operation_success("deploy", &deployed_line(record.address));
	Display::verify(
		&verify_command(&ctx.network.name, record.address, &record.contract),
		ctx.chain.is_local(),
	);

	logging::operation_start("mint", &svg_path.display().to_string());
	let minted = MintOps::new(ctx.clone())
		.mint(&provider, record.address, &svg)
		.await?;

	logging::operation_success("mint", "You have created an NFT. YAY!");
	Display::token_uri(&minted.token_uri);

	Ok(())
}

/// Handle mint command
#[instrument(skip(cmd))]
async fn handle_mint(config: &Path, network: Option<&str>, cmd: MintCommand) -> Result<()> {
	let ctx = load_context(config, network).await?;
	let mint_ops = MintOps::new(ctx.clone());

	let address = match cmd.address {
		Some(address) => parse_address(&address)?,
		None => mint_ops.deployed_address()?,
	};
	let svg_path = cmd.svg.unwrap_or_else(|| ctx.config.deploy.svg_path.clone());
	let svg = read_svg(&svg_path)?;

	Display::header("Minting SVG NFT");
	Display::kv("Network", &ctx.network.name);
	Display::kv("Contract", &address.to_string());
	Display::kv("Image", &svg_path.display().to_string());

	let provider = ctx.provider().await?;
	let minted = mint_ops.mint(&provider, address, &svg).await?;

	logging::operation_success("mint", "You have created an NFT. YAY!");
	Display::minted(&minted);
	Display::token_uri(&minted.token_uri);

	Ok(())
}

/// Handle token-uri command
#[instrument(skip(cmd))]
async fn handle_token_uri(
	config: &Path,
	network: Option<&str>,
	cmd: TokenUriCommand,
) -> Result<()> {
	let ctx = load_context(config, network).await?;
	let mint_ops = MintOps::new(ctx.clone());

	let address = match cmd.address {
		Some(address) => parse_address(&address)?,
		None => mint_ops.deployed_address()?,
	};

	let provider = ctx.read_only_provider().await?;
	let lookup = mint_ops
		.lookup(&provider, address, U256::from(cmd.token_id))
		.await?;
	match (lookup.minted, lookup.is_minted()) {
		(Some(minted), Some(false)) => logging::operation_warning(
			"token-uri",
			&format!(
				"Token {} has not been minted yet ({minted} minted so far)",
				lookup.token_id
			),
		),
		(None, _) => logging::operation_warning(
			"token-uri",
			"Contract does not report tokenCounter(), minted count unknown",
		),
		_ => {},
	}
	let uri = lookup.token_uri.as_str();

	Display::header(&format!("Token {}", cmd.token_id));
	Display::kv("Contract", &address.to_string());
	if let Some(minted) = lookup.minted {
		Display::kv("Minted", &minted.to_string());
	}
	Display::kv("Token URI", uri);

	if cmd.decode {
		match TokenMetadata::from_token_uri(uri)? {
			Some(metadata) => {
				Display::section("Metadata");
				Display::kv("Name", metadata.name.as_deref().unwrap_or("-"));
				Display::kv("Description", metadata.description.as_deref().unwrap_or("-"));
				if let Some(svg) = metadata.image_svg()? {
					Display::section("Image");
					println!("{svg}");
				} else if let Some(image) = &metadata.image {
					Display::kv("Image", image);
				}
			},
			None => logging::operation_warning(
				"token-uri",
				"Token URI is not inline JSON metadata, nothing to decode",
			),
		}
	}

	Ok(())
}

/// Handle networks command
#[instrument]
async fn handle_networks(config: &Path, network: Option<&str>) -> Result<()> {
	let config = Config::load(config)
		.await
		.with_context(|| format!("Failed to load configuration from {}", config.display()))?;
	let selected = config.resolve_chain(network).ok();

	Display::header("Configured Networks");
	for chain in config.chains() {
		let entry = config.network(chain)?;
		Display::network(&entry.name, chain, &entry.rpc_url, Some(chain) == selected);
	}
	info!(count = config.networks.len(), "Networks listed");

	Ok(())
}

/// Handle init command
#[instrument(skip(cmd))]
async fn handle_init(cmd: InitCommand) -> Result<()> {
	Display::header("Generating New Configuration");

	InitOps::new()
		.create(&cmd.path, cmd.chains, cmd.force)
		.await?;
	logging::operation_success(
		"init",
		&format!("Configuration written to {}", cmd.path.display()),
	);

	Display::next_steps(&[
		"Review the generated configuration",
		"Compile the contract so its artifact is in the artifacts directory",
		"Run 'svgnft-deploy deploy' to deploy and mint",
	]);

	Ok(())
}
