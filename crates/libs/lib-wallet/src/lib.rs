//! # Wallet Connector Library
//!
//! Connects to an injected EIP-1193 wallet, tracks the active account and the
//! enforced network, and builds a client handle for JSON-RPC reads. The crate is
//! platform independent: the browser binding lives in `wallet-web`, and tests run
//! against [`testing::MockTransport`].
//!
//! ## Modules
//!
//! - [`provider`] - [`WalletConnectionProvider`], the component that fills the state
//! - [`state`] - [`ProviderState`] and its owner-only [`StateStore`]
//! - [`transport`] - [`WalletTransport`] trait and the [`Subscription`] guard
//! - [`client`] - [`BlockchainClient`] handle
//! - [`config`] - [`WalletConfig`] (target network)
//! - [`notify`] - [`Notifier`] for user-visible notices
//! - [`error`] - [`WalletError`] and [`Result`]

pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod provider;
pub mod state;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::BlockchainClient;
pub use config::WalletConfig;
pub use error::{Result, WalletError};
pub use notify::{LogNotifier, Notifier};
pub use provider::{Mounted, WalletConnectionProvider};
pub use state::{ProviderState, StateStore};
pub use transport::{AccountsHandler, Subscription, WalletTransport};
