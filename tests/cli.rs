//! Binary behaviour that needs no running node

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
	run_with_env(dir, args, &[])
}

fn run_with_env(dir: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_svgnft-deploy"))
		.current_dir(dir)
		.args(args)
		.env_remove("SVGNFT_CONFIG")
		.env_remove("SVGNFT_NETWORK")
		.env_remove("SVGNFT_DEBUG")
		.env_remove("SEPOLIA_RPC_URL")
		.env_remove("RUST_LOG")
		.env("NO_COLOR", "1")
		.envs(vars.iter().copied())
		.output()
		.unwrap()
}

#[test]
fn init_then_list_networks() {
	let dir = TempDir::new().unwrap();

	let init = run(dir.path(), &["init", "--chains", "31337,11155111"]);
	assert!(init.status.success(), "{}", String::from_utf8_lossy(&init.stderr));
	assert!(dir.path().join("svgnft.toml").is_file());

	let networks = run_with_env(
		dir.path(),
		&["networks"],
		&[("SEPOLIA_RPC_URL", "https://rpc.sepolia.example")],
	);
	assert!(networks.status.success(), "{}", String::from_utf8_lossy(&networks.stderr));
	let stdout = String::from_utf8_lossy(&networks.stdout);
	assert!(stdout.contains("localhost [31337] (selected)"));
	assert!(stdout.contains("sepolia [11155111]"));
	assert!(stdout.contains("https://rpc.sepolia.example"));

	let again = run(dir.path(), &["init"]);
	assert!(!again.status.success());
}

#[test]
fn deploy_exits_nonzero_when_svg_is_missing() {
	let dir = TempDir::new().unwrap();
	assert!(run(dir.path(), &["init"]).status.success());

	// No img/triangle.svg in the working directory and no node listening
	let output = run(dir.path(), &["deploy"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("SVG file not found"), "{stderr}");
}

#[test]
fn unknown_network_is_rejected() {
	let dir = TempDir::new().unwrap();
	assert!(run(dir.path(), &["init"]).status.success());

	let output = run(dir.path(), &["--network", "mainnet", "token-uri"]);

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown network"));
}

#[test]
fn remote_network_without_rpc_url_names_the_variable() {
	let dir = TempDir::new().unwrap();
	assert!(run(dir.path(), &["init", "--chains", "31337,11155111"]).status.success());

	let output = run(dir.path(), &["networks"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("SEPOLIA_RPC_URL"), "{stderr}");
}

#[test]
fn debug_flag_accepts_numeric_environment_values() {
	let dir = TempDir::new().unwrap();
	assert!(run(dir.path(), &["init"]).status.success());

	for value in ["1", "0", "yes", "false"] {
		let output = run_with_env(dir.path(), &["networks"], &[("SVGNFT_DEBUG", value)]);
		assert!(
			output.status.success(),
			"SVGNFT_DEBUG={value}: {}",
			String::from_utf8_lossy(&output.stderr)
		);
	}
}
