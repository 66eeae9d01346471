use serde::{Deserialize, Serialize};

/// The one network a connector enforces.
///
/// The same chain is named twice because the wallet API uses two encodings:
/// `networkVersion` reports a decimal string, while `wallet_switchEthereumChain`
/// and `eth_chainId` use a `0x`-prefixed hex string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetNetwork {
    /// Human readable name shown to the user.
    pub name: String,
    /// Decimal identifier, compared against `networkVersion`.
    pub network_version: String,
    /// Hex identifier, sent in switch requests and published as the active chain.
    pub chain_id: String,
}

impl TargetNetwork {
    pub fn new(
        name: impl Into<String>,
        network_version: impl Into<String>,
        chain_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            network_version: network_version.into(),
            chain_id: chain_id.into(),
        }
    }

    /// Rinkeby test network (`4` / `0x4`).
    pub fn rinkeby() -> Self {
        Self::new("Rinkeby", "4", "0x4")
    }

    /// Literal comparison against a wallet-reported `networkVersion`.
    ///
    /// No normalization: `"04"` or `"0x4"` do not match `"4"`.
    pub fn matches_network_version(&self, reported: Option<&str>) -> bool {
        reported == Some(self.network_version.as_str())
    }
}

impl Default for TargetNetwork {
    fn default() -> Self {
        Self::rinkeby()
    }
}
