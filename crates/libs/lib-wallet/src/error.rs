//! # Wallet Error Handling
//!
//! One error type, [`WalletError`], is shared by the transport, the client handle
//! and the connection provider.
//!
//! ## Error Categories
//!
//! 1. **Wallet side** - the injected provider is missing or refused a request
//!    - [`TransportUnavailable`](WalletError::TransportUnavailable)
//!    - [`Rpc`](WalletError::Rpc) (EIP-1193 `ProviderRpcError`)
//!    - [`Js`](WalletError::Js) (anything thrown that is not an EIP-1193 error)
//!
//! 2. **Data** - a response did not have the expected shape
//!    - [`Decode`](WalletError::Decode)
//!    - [`InvalidQuantity`](WalletError::InvalidQuantity)
//!
//! 3. **Setup** - configuration and task spawning
//!    - [`Config`](WalletError::Config)
//!    - [`Spawn`](WalletError::Spawn)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_wallet::error::{Result, WalletError};
//! use shared::utils::parse_hex_u64;
//!
//! fn block_height(quantity: &str) -> Result<u64> {
//!     parse_hex_u64(quantity).ok_or_else(|| WalletError::InvalidQuantity(quantity.to_string()))
//! }
//!
//! assert_eq!(block_height("0x10").unwrap(), 16);
//! assert!(block_height("0x+1").is_err());
//! ```

use futures::task::SpawnError;
use shared::dto::rpc::ProviderRpcError;
use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error)]
pub enum WalletError {
    /// No injected wallet (`window.ethereum` is undefined).
    #[error("No injected wallet found")]
    TransportUnavailable,

    /// The wallet rejected a request with an EIP-1193 error object.
    #[error("Wallet RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// A JS exception that did not look like a `ProviderRpcError`.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// The response could not be decoded into the expected type.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A hex quantity (`0x...`) was malformed or out of range.
    #[error("Invalid hex quantity: {0}")]
    InvalidQuantity(String),

    /// Invalid target network configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The executor refused to run a task.
    #[error("Failed to spawn task: {0}")]
    Spawn(#[from] SpawnError),
}

impl WalletError {
    /// EIP-1193 code, if this came from the wallet.
    pub fn code(&self) -> Option<i64> {
        match self {
            WalletError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The user dismissed the wallet prompt (code 4001).
    pub fn is_user_rejection(&self) -> bool {
        self.code() == Some(ProviderRpcError::USER_REJECTED)
    }

    /// The wallet does not know the requested chain (code 4902).
    pub fn is_unrecognized_chain(&self) -> bool {
        self.code() == Some(ProviderRpcError::UNRECOGNIZED_CHAIN)
    }

    /// Short text suitable for showing in the UI.
    pub fn user_message(&self) -> String {
        match self {
            WalletError::TransportUnavailable => "No wallet extension detected".to_string(),
            WalletError::Rpc { code, .. } if *code == ProviderRpcError::USER_REJECTED => {
                "Request rejected in wallet".to_string()
            }
            WalletError::Rpc { message, .. } => message.clone(),
            WalletError::Js(_) | WalletError::Decode(_) | WalletError::InvalidQuantity(_) => {
                "Unexpected response from wallet".to_string()
            }
            WalletError::Config(_) | WalletError::Spawn(_) => "An internal error occurred".to_string(),
        }
    }
}

impl From<ProviderRpcError> for WalletError {
    fn from(err: ProviderRpcError) -> Self {
        WalletError::Rpc {
            code: err.code,
            message: err.message,
        }
    }
}
