//! Test doubles for the wallet transport and notifier.
//!
//! Compiled for this crate's tests and for dependents that enable the
//! `testing` feature.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;
use shared::dto::rpc::{ProviderRpcError, RpcRequest};

use crate::error::{Result, WalletError};
use crate::notify::Notifier;
use crate::transport::{AccountsHandler, Subscription, WalletTransport};

#[derive(Clone)]
enum MockResponse {
    Resolve(Value),
    Reject { code: i64, message: String },
    Pending,
}

type Listeners = Rc<RefCell<Vec<(u64, AccountsHandler)>>>;

/// Scriptable in-memory wallet.
///
/// Unscripted methods reject with 4200 (unsupported method).
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<HashMap<String, MockResponse>>,
    requests: RefCell<Vec<RpcRequest>>,
    network_version: RefCell<Option<String>>,
    listeners: Listeners,
    next_listener_id: Cell<u64>,
    refuse_listeners: Cell<bool>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_network_version(self, version: &str) -> Self {
        *self.network_version.borrow_mut() = Some(version.to_string());
        self
    }

    /// Resolve every `method` request with `result`.
    pub fn respond(&self, method: &str, result: Value) {
        self.responses
            .borrow_mut()
            .insert(method.to_string(), MockResponse::Resolve(result));
    }

    /// Reject every `method` request with an EIP-1193 error.
    pub fn reject(&self, method: &str, code: i64, message: &str) {
        self.responses.borrow_mut().insert(
            method.to_string(),
            MockResponse::Reject {
                code,
                message: message.to_string(),
            },
        );
    }

    /// Never settle `method` requests.
    pub fn hang(&self, method: &str) {
        self.responses
            .borrow_mut()
            .insert(method.to_string(), MockResponse::Pending);
    }

    /// Make `on_accounts_changed` fail.
    pub fn refuse_listeners(&self) {
        self.refuse_listeners.set(true);
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_for(&self, method: &str) -> Vec<RpcRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Fire `accountsChanged` to every registered listener.
    pub fn emit_accounts_changed(&self, accounts: &[&str]) {
        let handlers: Vec<AccountsHandler> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(accounts.iter().map(|a| a.to_string()).collect());
        }
    }
}

#[async_trait(?Send)]
impl WalletTransport for MockTransport {
    async fn request(&self, request: RpcRequest) -> Result<Value> {
        let response = self.responses.borrow().get(&request.method).cloned();
        let method = request.method.clone();
        self.requests.borrow_mut().push(request);

        match response {
            Some(MockResponse::Resolve(value)) => Ok(value),
            Some(MockResponse::Reject { code, message }) => Err(WalletError::Rpc { code, message }),
            Some(MockResponse::Pending) => futures::future::pending().await,
            None => Err(WalletError::Rpc {
                code: ProviderRpcError::UNSUPPORTED_METHOD,
                message: format!("The method '{}' is not supported", method),
            }),
        }
    }

    fn network_version(&self) -> Option<String> {
        self.network_version.borrow().clone()
    }

    fn on_accounts_changed(&self, handler: AccountsHandler) -> Result<Subscription> {
        if self.refuse_listeners.get() {
            return Err(WalletError::Js("listeners not supported".to_string()));
        }

        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, handler));

        let listeners = Rc::downgrade(&self.listeners);
        Ok(Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        }))
    }
}

/// Notifier that remembers every message.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
