//! # Shared Wallet Types Library
//!
//! The contract between the wallet core, the web app and the injected EIP-1193
//! provider. Everything here is plain data plus small pure helpers.
//!
//! ## Structure
//!
//! - **[`dto`]**: Wire shapes
//!   - **[`dto::rpc`]**: `request(...)` arguments, method names, provider errors
//!   - **[`dto::network`]**: The enforced target network
//! - **[`utils`]**: Address formatting and hex quantity helpers
//!
//! ## Wire Format
//!
//! Request arguments serialize exactly as a wallet expects them:
//!
//! ```rust
//! use shared::dto::rpc::RpcRequest;
//!
//! let request = RpcRequest::switch_chain("0x4");
//! let json = serde_json::to_string(&request).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"method":"wallet_switchEthereumChain","params":[{"chainId":"0x4"}]}"#
//! );
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
