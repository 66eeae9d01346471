//! # Shared Utility Functions
//!
//! Helpers used by both the wallet core and the web app.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - [`format_address`] with the usual `0x1234...abcd` shape
//!
//! ## Hex Quantities
//!
//! - [`parse_hex_u64`] - Decode a JSON-RPC hex quantity such as `"0x1b4"`
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x5aAe...eAed");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(format_address(addr, 6, 4), "0x5aAe...eAed");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an Ethereum address keeping the `0x` prefix plus four digits on each side.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(
///     truncate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
///     "0x5aAe...eAed"
/// );
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Decode a JSON-RPC hex quantity (`"0x0"`, `"0x1b4"`) into a `u64`.
///
/// Returns `None` without the `0x` prefix, with no digits, with anything but
/// hex digits after the prefix (`from_str_radix` alone accepts a leading `+`),
/// or on overflow.
pub fn parse_hex_u64(quantity: &str) -> Option<u64> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
