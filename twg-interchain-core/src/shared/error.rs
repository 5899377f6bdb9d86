//! Error handling for the swap core
//!
//! `SwapError` is what the session controller reports to the user.
//! `RpcFailure` is what the injected collaborators (wallet provider, token
//! reader, bridge transport) return; it keeps the JSON-RPC error code so the
//! controller can tell "unrecognized chain" and "user rejected" apart.

use crate::shared::constants::{UNRECOGNIZED_CHAIN_ERROR_CODE, USER_REJECTED_ERROR_CODE};
use std::fmt;
use thiserror::Error;

/// Swap error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("Wallet provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("User rejected the request: {0}")]
    UserRejected(String),

    #[error("Failed to switch to network {network}: {reason}")]
    NetworkSwitchFailed { network: String, reason: String },

    #[error("Failed to add network {network}: {reason}")]
    NetworkAddFailed { network: String, reason: String },

    #[error("Balance query failed: {0}")]
    BalanceQueryFailed(String),

    #[error("Transfer failed: {0}")]
    TransferFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl SwapError {
    /// Create a provider unavailable error
    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable(message.into())
    }

    /// Create a user rejected error
    pub fn user_rejected(message: impl Into<String>) -> Self {
        Self::UserRejected(message.into())
    }

    pub fn network_switch_failed(network: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NetworkSwitchFailed {
            network: network.into(),
            reason: reason.into(),
        }
    }

    pub fn network_add_failed(network: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NetworkAddFailed {
            network: network.into(),
            reason: reason.into(),
        }
    }

    /// Create a balance query error
    pub fn balance_query_failed(message: impl Into<String>) -> Self {
        Self::BalanceQueryFailed(message.into())
    }

    /// Create a transfer error
    pub fn transfer_failed(message: impl Into<String>) -> Self {
        Self::TransferFailed(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<serde_json::Error> for SwapError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for SwapError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

/// Failure reported by a chain collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcFailure {
    pub code: Option<i64>,
    pub message: String,
}

impl fmt::Display for RpcFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for RpcFailure {}

impl RpcFailure {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// Failure without a JSON-RPC code (transport, decoding, signer setup)
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == Some(UNRECOGNIZED_CHAIN_ERROR_CODE)
    }

    pub fn is_user_rejected(&self) -> bool {
        self.code == Some(USER_REJECTED_ERROR_CODE)
    }
}

impl From<ethers::providers::ProviderError> for RpcFailure {
    fn from(err: ethers::providers::ProviderError) -> Self {
        use ethers::providers::RpcError;
        match err.as_error_response() {
            Some(response) => Self::new(response.code, response.message.clone()),
            None => Self::other(err.to_string()),
        }
    }
}
