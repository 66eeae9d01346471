//! # Connector Configuration
//!
//! The connector runs in the browser, so configuration is a plain value built
//! by the host app rather than read from the environment. [`WalletConfig::default`]
//! enforces Rinkeby.
//!
//! ```rust
//! use lib_wallet::config::WalletConfig;
//! use shared::dto::network::TargetNetwork;
//!
//! let config = WalletConfig::default()
//!     .with_target(TargetNetwork::new("Goerli", "5", "0x5"));
//! assert!(config.validate().is_ok());
//! ```

use shared::dto::network::TargetNetwork;
use shared::utils::parse_hex_u64;

use crate::error::{Result, WalletError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    /// The single network the connector enforces.
    pub target: TargetNetwork,

    /// Text of the notice shown after a successful switch.
    ///
    /// `None` uses `"Switch chain to <target name>"`.
    pub switch_notice: Option<String>,
}

impl WalletConfig {
    pub fn with_target(mut self, target: TargetNetwork) -> Self {
        self.target = target;
        self
    }

    pub fn with_switch_notice(mut self, notice: impl Into<String>) -> Self {
        self.switch_notice = Some(notice.into());
        self
    }

    pub fn switch_notice(&self) -> String {
        self.switch_notice
            .clone()
            .unwrap_or_else(|| format!("Switch chain to {}", self.target.name))
    }

    /// Check that both encodings of the target identify the same chain.
    ///
    /// Comparison at runtime stays literal; this only rejects configs where
    /// `network_version` and `chain_id` disagree.
    pub fn validate(&self) -> Result<()> {
        let version = &self.target.network_version;
        if !version.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WalletError::Config(format!(
                "network_version '{}' is not a decimal number",
                version
            )));
        }
        let decimal: u64 = version.parse().map_err(|e| {
            WalletError::Config(format!(
                "network_version '{}' is not a decimal number: {}",
                version, e
            ))
        })?;

        let hex = parse_hex_u64(&self.target.chain_id).ok_or_else(|| {
            WalletError::Config(format!(
                "chain_id '{}' is not a 0x-prefixed hex number",
                self.target.chain_id
            ))
        })?;

        if decimal != hex {
            return Err(WalletError::Config(format!(
                "network_version {} and chain_id {} name different chains",
                self.target.network_version, self.target.chain_id
            )));
        }

        Ok(())
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            target: TargetNetwork::rinkeby(),
            switch_notice: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rinkeby() {
        let config = WalletConfig::default();
        assert_eq!(config.target.network_version, "4");
        assert_eq!(config.target.chain_id, "0x4");
        assert_eq!(config.switch_notice(), "Switch chain to Rinkeby");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatched_encodings() {
        let config = WalletConfig::default().with_target(TargetNetwork::new("Bad", "4", "0x5"));
        assert!(matches!(config.validate(), Err(WalletError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_unparseable_ids() {
        let config = WalletConfig::default().with_target(TargetNetwork::new("Bad", "four", "0x4"));
        assert!(config.validate().is_err());

        let config = WalletConfig::default().with_target(TargetNetwork::new("Bad", "4", "4"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_signed_ids() {
        let config = WalletConfig::default().with_target(TargetNetwork::new("Bad", "4", "0x+4"));
        assert!(matches!(config.validate(), Err(WalletError::Config(_))));

        let config = WalletConfig::default().with_target(TargetNetwork::new("Bad", "+4", "0x4"));
        assert!(matches!(config.validate(), Err(WalletError::Config(_))));
    }

    #[test]
    fn test_custom_notice() {
        let config = WalletConfig::default().with_switch_notice("Please use Rinkeby");
        assert_eq!(config.switch_notice(), "Please use Rinkeby");
    }
}
