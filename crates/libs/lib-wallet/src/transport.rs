//! # Wallet Transport
//!
//! [`WalletTransport`] is the capability surface of an injected EIP-1193 wallet:
//! a request method, the `networkVersion` property and the `accountsChanged`
//! event. The web app implements it over `window.ethereum`; tests use
//! [`MockTransport`](crate::testing::MockTransport).
//!
//! Listener registration hands back a [`Subscription`]. Dropping it releases the
//! listener, so a torn-down connector never keeps callbacks alive in the wallet.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;
use shared::dto::rpc::RpcRequest;

use crate::error::Result;

/// Callback invoked with the new account list on every `accountsChanged` event.
pub type AccountsHandler = Rc<dyn Fn(Vec<String>)>;

#[async_trait(?Send)]
pub trait WalletTransport {
    /// Send an EIP-1193 `request(...)` and return the raw JSON result.
    async fn request(&self, request: RpcRequest) -> Result<Value>;

    /// Decimal network id reported by the wallet, if any.
    fn network_version(&self) -> Option<String>;

    /// Register a persistent `accountsChanged` listener.
    fn on_accounts_changed(&self, handler: AccountsHandler) -> Result<Subscription>;
}

/// Guard that runs its release action exactly once, on [`Subscription::unsubscribe`] or drop.
#[must_use = "dropping a Subscription releases the listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release now instead of at drop.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
