//! # Data Transfer Objects (DTOs)
//!
//! Shapes that cross the boundary between Rust and the injected wallet.
//!
//! ## Module Organization
//!
//! - [`rpc`] - EIP-1193 request arguments and provider errors
//! - [`network`] - Target network descriptor and presets
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase where the wallet API expects it (`chainId`)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example Wallet Communication
//!
//! ```text
//! ethereum.request({
//!   "method": "wallet_switchEthereumChain",
//!   "params": [{ "chainId": "0x4" }]
//! })
//! ```
//!
//! ```text
//! rejected with
//! { "code": 4001, "message": "User rejected the request." }
//! ```

pub mod network;
pub mod rpc;

pub use network::*;
pub use rpc::*;
