//! Browser-side implementations of the wallet core's seams.

pub mod browser;
pub mod ethereum;

pub use browser::{BrowserAlert, BrowserSpawner};
pub use ethereum::EthereumTransport;
