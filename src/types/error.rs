//! Error types and result handling for the deployer
//!
//! This module defines the error type used by every library operation. The
//! binary wraps it in `anyhow` at the top level, so any variant aborts the
//! run with a non-zero exit status.

use crate::types::chain::ChainId;
use alloy_primitives::B256;
use std::path::PathBuf;

/// Convenience Result type alias using the local Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all deployment, minting and configuration operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
	// Chain errors
	#[error("Chain not found in network table: {0}")]
	ChainNotFound(ChainId),

	#[error("Unknown network: {0}")]
	UnknownNetwork(String),

	#[error("RPC endpoint reports chain {actual}, configuration expects {expected}")]
	ChainMismatch { expected: ChainId, actual: ChainId },

	#[error("RPC connection failed: {0}")]
	RpcError(String),

	#[error("Transaction reverted: {0}")]
	TransactionReverted(B256),

	// Config errors
	#[error("Configuration file not found: {0}")]
	ConfigNotFound(PathBuf),

	#[error("Invalid configuration format: {0}")]
	InvalidConfig(String),

	#[error("Configuration already exists at: {0}")]
	ConfigExists(PathBuf),

	#[error("Invalid private key")]
	InvalidPrivateKey,

	// Artifact errors
	#[error("Contract artifact {name} not found in {dir}")]
	ArtifactNotFound { name: String, dir: PathBuf },

	#[error("Invalid contract artifact: {0}")]
	InvalidArtifact(String),

	// Input errors
	#[error("SVG file not found: {0}")]
	SvgNotFound(PathBuf),

	#[error("Invalid SVG file: {0}")]
	InvalidSvg(String),

	// Contract errors
	#[error("Deployment failed: {0}")]
	DeploymentFailed(String),

	#[error("No {contract} deployment recorded for network {network}")]
	DeploymentNotFound { contract: String, network: String },

	#[error("Contract call failed: {0}")]
	ContractCallFailed(String),

	#[error("Invalid token URI: {0}")]
	InvalidTokenUri(String),

	// IO errors
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	// JSON errors
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	// TOML errors
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}
