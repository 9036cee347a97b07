//! Logging helpers pairing terminal output with structured tracing
//!
//! Every user-facing status line also produces a tracing event, so a run
//! captured with `RUST_LOG` carries the same milestones as the terminal.

use crate::cli::output::Display;
use tracing::{info, warn};

/// Log operation start with structured context
///
/// Records the beginning of an operation without terminal output.
///
/// # Arguments
/// * `operation` - Name of the operation starting
/// * `context` - Additional context for the operation
pub fn operation_start(operation: &str, context: &str) {
	info!(
		operation = operation,
		context = context,
		"Operation started"
	);
}

/// Operation success with both user and developer logging
///
/// # Arguments
/// * `operation` - Name of the operation that completed
/// * `message` - Line shown to the user
pub fn operation_success(operation: &str, message: &str) {
	Display::success(message);
	info!(
		operation = operation,
		message = message,
		"Operation completed successfully"
	);
}

/// Operation warning with both user and developer logging
///
/// # Arguments
/// * `operation` - Name of the operation with warning
/// * `message` - Warning message to display
pub fn operation_warning(operation: &str, message: &str) {
	Display::warning(message);
	warn!(operation = operation, message = message, "Operation warning");
}
