// Well-known addresses and token parameters for $AUDIO tips.
//
// The mint is fixed at compile time with `solana_program::pubkey!`, so an
// invalid literal fails the build instead of the first request.

use solana_program::pubkey::Pubkey;

/// $AUDIO token mint address (8 decimals)
/// Audius governance and tipping token on Solana
pub const AUDIO_MINT: Pubkey = solana_program::pubkey!("9LzCMqDgTKYz9Drzqnpgee3SGa89up3a247ypMj2xrqM");

/// Decimal places of the $AUDIO mint.
pub const AUDIO_DECIMALS: u32 = 8;

/// Ticker shown in action labels.
pub const AUDIO_SYMBOL: &str = "$AUDIO";

/// Preset tip amounts offered on the metadata endpoint, in display units.
pub const TIP_AMOUNT_OPTIONS: [u64; 3] = [1, 10, 20];

/// Amount used when a POST arrives without an amount segment.
pub const DEFAULT_TIP_AMOUNT: u64 = 1;
