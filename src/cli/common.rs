//! Shared CLI error and exit-code types.

use clap::ValueEnum;
use std::fmt;

use crate::config::AppConfig;
use crate::constraints::ValidationPolicy;

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Input failed validation
    ValidationFailed = 1,
    /// I/O, usage, or internal error
    Error = 2,
}

impl ExitCode {
    /// The numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// CLI command error.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Input failed validation (exit code 1)
    Validation(String),
    /// File or environment I/O failure (exit code 2)
    Io(String),
    /// Bad command usage (exit code 2)
    Usage(String),
    /// Engine-side failure such as an asset catalog gap (exit code 2)
    Engine(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Creates an engine error.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationFailed,
            Self::Io(_) | Self::Usage(_) | Self::Engine(_) => ExitCode::Error,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation failed: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Usage(msg) => write!(f, "usage error: {msg}"),
            Self::Engine(msg) => write!(f, "engine error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// `--policy` flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Snap out-of-range dimensions onto the grid
    Clamp,
    /// Reject out-of-range dimensions
    Reject,
}

impl From<PolicyArg> for ValidationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Clamp => Self::Clamp,
            PolicyArg::Reject => Self::Reject,
        }
    }
}

/// Resolves the active validation policy: the flag wins, then the config
/// file, then the default.
#[must_use]
pub fn resolve_policy(flag: Option<PolicyArg>) -> ValidationPolicy {
    flag.map_or_else(
        || AppConfig::load().map(|c| c.policy).unwrap_or_default(),
        Into::into,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("x").exit_code().code(), 1);
        assert_eq!(CliError::io("x").exit_code().code(), 2);
        assert_eq!(CliError::usage("x").exit_code().code(), 2);
        assert_eq!(CliError::engine("x").exit_code().code(), 2);
    }

    #[test]
    fn test_policy_arg_maps() {
        assert_eq!(
            ValidationPolicy::from(PolicyArg::Clamp),
            ValidationPolicy::Clamp
        );
        assert_eq!(
            ValidationPolicy::from(PolicyArg::Reject),
            ValidationPolicy::Reject
        );
    }
}
