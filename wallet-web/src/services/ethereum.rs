//! `window.ethereum` via wasm-bindgen
//!
//! Binds the EIP-1193 surface of an injected wallet (MetaMask and compatible
//! extensions) and implements [`WalletTransport`] on top of it.

use async_trait::async_trait;
use js_sys::{Function, Promise};
use lib_wallet::{AccountsHandler, Subscription, WalletError, WalletTransport};
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use shared::dto::rpc::{ProviderRpcError, RpcRequest, EVENT_ACCOUNTS_CHANGED};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// ============================================================================
// EIP-1193 PROVIDER BINDINGS
// ============================================================================

#[wasm_bindgen]
extern "C" {
    /// The object a wallet extension injects as `window.ethereum`.
    #[derive(Debug, Clone)]
    pub type Ethereum;

    #[wasm_bindgen(method, catch)]
    fn request(this: &Ethereum, args: &JsValue) -> Result<Promise, JsValue>;

    /// Decimal network id; `undefined` before the wallet has loaded it.
    #[wasm_bindgen(method, getter, js_name = networkVersion)]
    fn network_version(this: &Ethereum) -> Option<String>;

    #[wasm_bindgen(method, catch)]
    fn on(this: &Ethereum, event: &str, listener: &Function) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = removeListener)]
    fn remove_listener(
        this: &Ethereum,
        event: &str,
        listener: &Function,
    ) -> Result<(), JsValue>;
}

#[wasm_bindgen(inline_js = "
export function injectedEthereum() {
    if (typeof window !== 'undefined' && window.ethereum) {
        return window.ethereum;
    }
    return null;
}
")]
extern "C" {
    #[wasm_bindgen(js_name = injectedEthereum)]
    fn injected_ethereum() -> Option<Ethereum>;
}

// ============================================================================
// TRANSPORT
// ============================================================================

/// [`WalletTransport`] over the injected `window.ethereum` object.
#[derive(Debug, Clone)]
pub struct EthereumTransport {
    ethereum: Ethereum,
}

impl EthereumTransport {
    /// Fails with [`WalletError::TransportUnavailable`] when no wallet extension
    /// is installed.
    pub fn detect() -> lib_wallet::Result<Self> {
        injected_ethereum()
            .map(|ethereum| Self { ethereum })
            .ok_or(WalletError::TransportUnavailable)
    }
}

#[async_trait(?Send)]
impl WalletTransport for EthereumTransport {
    async fn request(&self, request: RpcRequest) -> lib_wallet::Result<Value> {
        log::debug!("ethereum.request({})", request.method);

        let args = request
            .serialize(&Serializer::json_compatible())
            .map_err(|e| WalletError::Js(e.to_string()))?;
        let promise = self.ethereum.request(&args).map_err(js_error)?;
        let result = JsFuture::from(promise).await.map_err(js_error)?;

        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result).map_err(|e| WalletError::Js(e.to_string()))
    }

    fn network_version(&self) -> Option<String> {
        self.ethereum.network_version()
    }

    fn on_accounts_changed(&self, handler: AccountsHandler) -> lib_wallet::Result<Subscription> {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<String>>(payload) {
                Ok(accounts) => handler(accounts),
                Err(e) => log::warn!("Ignoring malformed accountsChanged payload: {}", e),
            }
        });
        let listener: Function = closure.as_ref().unchecked_ref::<Function>().clone();

        self.ethereum
            .on(EVENT_ACCOUNTS_CHANGED, &listener)
            .map_err(js_error)?;

        let ethereum = self.ethereum.clone();
        Ok(Subscription::new(move || {
            if let Err(e) = ethereum.remove_listener(EVENT_ACCOUNTS_CHANGED, &listener) {
                log::warn!("removeListener(accountsChanged) failed: {:?}", e);
            }
            drop(closure);
        }))
    }
}

/// Map a rejection to [`WalletError::Rpc`] when it carries an EIP-1193 code.
fn js_error(err: JsValue) -> WalletError {
    match serde_wasm_bindgen::from_value::<ProviderRpcError>(err.clone()) {
        Ok(rpc) => rpc.into(),
        Err(_) => WalletError::Js(err.as_string().unwrap_or_else(|| format!("{:?}", err))),
    }
}
