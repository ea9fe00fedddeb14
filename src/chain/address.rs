use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::error::{TipError, TipResult};

/// Parse a base58 wallet address, mapping failures to `InvalidAddress`.
///
/// Surrounding whitespace is not trimmed; `" abc"` is rejected like any other
/// malformed input.
pub fn parse_address(value: &str) -> TipResult<Pubkey> {
    Pubkey::from_str(value).map_err(|_| TipError::InvalidAddress(value.to_string()))
}
