//! # Blockchain Client Handle
//!
//! [`BlockchainClient`] wraps the wallet transport for JSON-RPC reads. It is the
//! `provider` value consumers find in the published context. Cloning is cheap;
//! every clone talks to the same transport.

use std::fmt;
use std::rc::Rc;

use alloy_primitives::U256;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use shared::dto::rpc::{
    RpcRequest, METHOD_ACCOUNTS, METHOD_BLOCK_NUMBER, METHOD_CHAIN_ID, METHOD_GET_BALANCE,
};
use shared::utils::parse_hex_u64;

use crate::error::{Result, WalletError};
use crate::transport::WalletTransport;

#[derive(Clone)]
pub struct BlockchainClient {
    transport: Rc<dyn WalletTransport>,
}

impl BlockchainClient {
    pub fn new(transport: Rc<dyn WalletTransport>) -> Self {
        Self { transport }
    }

    /// Send `method` with optional `params` and decode the result.
    pub async fn request<T: DeserializeOwned>(&self, method: &str, params: Option<Value>) -> Result<T> {
        let request = match params {
            Some(params) => RpcRequest::with_params(method, params),
            None => RpcRequest::new(method),
        };
        let value = self.transport.request(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Hex chain id currently selected in the wallet (`eth_chainId`).
    pub async fn chain_id(&self) -> Result<String> {
        self.request(METHOD_CHAIN_ID, None).await
    }

    /// Authorized accounts, without prompting the user (`eth_accounts`).
    pub async fn accounts(&self) -> Result<Vec<String>> {
        self.request(METHOD_ACCOUNTS, None).await
    }

    pub async fn block_number(&self) -> Result<u64> {
        let quantity: String = self.request(METHOD_BLOCK_NUMBER, None).await?;
        parse_hex_u64(&quantity).ok_or(WalletError::InvalidQuantity(quantity))
    }

    /// Balance in wei at the latest block.
    pub async fn balance(&self, address: &str) -> Result<U256> {
        let quantity: String = self
            .request(METHOD_GET_BALANCE, Some(json!([address, "latest"])))
            .await?;
        parse_u256(&quantity)
    }

    /// `true` when both handles wrap the same transport object.
    pub fn same_transport(&self, other: &BlockchainClient) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockchainClient").finish_non_exhaustive()
    }
}

fn parse_u256(quantity: &str) -> Result<U256> {
    let digits = quantity
        .strip_prefix("0x")
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| WalletError::InvalidQuantity(quantity.to_string()))?;
    U256::from_str_radix(digits, 16).map_err(|_| WalletError::InvalidQuantity(quantity.to_string()))
}
