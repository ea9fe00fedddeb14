use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::chain::constants::AUDIO_DECIMALS;
use crate::error::{TipError, TipResult};

/// A tip amount as typed by the user, plus its value in base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
    display: Decimal,
    units: u64,
}

impl TokenAmount {
    /// Parse a display-unit string such as `"2.5"` for a mint with `decimals`.
    ///
    /// Only plain decimal notation is accepted: ASCII digits with at most one
    /// `.`. Digits beyond `decimals` are truncated. Anything else, including
    /// signs, exponents and `_` separators, is `InvalidAmount`.
    pub fn parse(input: &str, decimals: u32) -> TipResult<Self> {
        let invalid = || TipError::InvalidAmount(input.to_string());

        if !is_plain_decimal(input) {
            return Err(invalid());
        }
        let display = Decimal::from_str(input).map_err(|_| invalid())?;

        let scale = 10u64
            .checked_pow(decimals)
            .map(Decimal::from)
            .ok_or_else(invalid)?;
        let units = display
            .checked_mul(scale)
            .map(|scaled| scaled.trunc())
            .and_then(|scaled| scaled.to_u64())
            .ok_or_else(invalid)?;

        Ok(Self { display, units })
    }

    /// Parse an amount of $AUDIO.
    pub fn parse_audio(input: &str) -> TipResult<Self> {
        Self::parse(input, AUDIO_DECIMALS)
    }

    pub fn display(&self) -> Decimal {
        self.display
    }

    /// Amount in the token's smallest unit.
    pub fn units(&self) -> u64 {
        self.units
    }
}

/// ASCII digits with at most one `.`, and at least one digit.
fn is_plain_decimal(input: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for c in input.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
