use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `eth_requestAccounts` - prompts for access and returns authorized addresses.
pub const METHOD_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
/// `eth_accounts` - returns authorized addresses without prompting.
pub const METHOD_ACCOUNTS: &str = "eth_accounts";
/// `eth_chainId` - returns the current chain id as a hex string.
pub const METHOD_CHAIN_ID: &str = "eth_chainId";
/// `eth_blockNumber` - returns the latest block number as a hex quantity.
pub const METHOD_BLOCK_NUMBER: &str = "eth_blockNumber";
/// `eth_getBalance` - returns an account balance in wei as a hex quantity.
pub const METHOD_GET_BALANCE: &str = "eth_getBalance";
/// `wallet_switchEthereumChain` - asks the wallet to change its active chain.
pub const METHOD_SWITCH_CHAIN: &str = "wallet_switchEthereumChain";

/// Event emitted by the wallet when the authorized account list changes.
pub const EVENT_ACCOUNTS_CHANGED: &str = "accountsChanged";

/// Argument of an EIP-1193 `request(...)` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }

    pub fn with_params(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params: Some(params),
        }
    }

    /// `eth_requestAccounts` with no params.
    pub fn request_accounts() -> Self {
        Self::new(METHOD_REQUEST_ACCOUNTS)
    }

    /// `wallet_switchEthereumChain` carrying `[{ chainId }]`.
    pub fn switch_chain(chain_id: &str) -> Self {
        let params = SwitchChainParams {
            chain_id: chain_id.to_string(),
        };
        Self::with_params(
            METHOD_SWITCH_CHAIN,
            Value::Array(vec![serde_json::to_value(params).unwrap_or(Value::Null)]),
        )
    }
}

/// Single element of the `wallet_switchEthereumChain` params array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwitchChainParams {
    #[serde(rename = "chainId")]
    pub chain_id: String,
}

/// Error object a provider rejects with (EIP-1193 `ProviderRpcError`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ProviderRpcError {
    pub const USER_REJECTED: i64 = 4001;
    pub const UNAUTHORIZED: i64 = 4100;
    pub const UNSUPPORTED_METHOD: i64 = 4200;
    pub const DISCONNECTED: i64 = 4900;
    pub const CHAIN_DISCONNECTED: i64 = 4901;
    /// Returned by `wallet_switchEthereumChain` when the wallet does not know the chain.
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;
}
