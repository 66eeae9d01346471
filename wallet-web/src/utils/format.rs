//! # Formatting Utilities for Wallet Web
//!
//! Value formatting for the status page. For addresses use
//! [`shared::utils::truncate_address`].
//!
//! ## Functions
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_wei_to_eth`] - Convert a wei balance to ETH with fixed decimals
//! - [`format_chain`] - Label a hex chain id for display

use alloy_primitives::U256;
use shared::dto::network::TargetNetwork;

const WEI_PER_ETH: u64 = 1_000_000_000_000_000_000;

/// Add thousands separators to the integer part of a decimal string.
///
/// ```rust
/// use wallet_web::utils::format::format_number;
///
/// assert_eq!(format_number("1234567.89"), "1,234,567.89");
/// assert_eq!(format_number("100"), "100");
/// ```
pub fn format_number(value: &str) -> String {
    let (integer_part, decimal_part) = match value.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (value, None),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    match decimal_part {
        Some(dec) => format!("{}.{}", integer_with_commas, dec),
        None => integer_with_commas,
    }
}

/// Format a wei amount as ETH, truncated (not rounded) to `decimals` places.
///
/// ```rust
/// use alloy_primitives::U256;
/// use wallet_web::utils::format::format_wei_to_eth;
///
/// assert_eq!(format_wei_to_eth(U256::from(1_500_000_000_000_000_000u64), 4), "1.5000");
/// ```
pub fn format_wei_to_eth(wei: U256, decimals: usize) -> String {
    let unit = U256::from(WEI_PER_ETH);
    let whole = wei / unit;
    let remainder = wei % unit;

    let integer = format_number(&whole.to_string());
    if decimals == 0 {
        return integer;
    }

    // remainder < 10^18, so 18 zero-padded digits
    let fraction = format!("{:0>18}", remainder.to_string());
    let shown: String = fraction.chars().take(decimals.min(18)).collect();
    format!("{}.{:0<width$}", integer, shown, width = decimals)
}

/// Human label for a hex chain id, naming the target network when it matches.
pub fn format_chain(chain_id: &str, target: &TargetNetwork) -> String {
    if chain_id == target.chain_id {
        format!("{} ({})", target.name, chain_id)
    } else {
        chain_id.to_string()
    }
}
