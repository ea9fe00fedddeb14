// Audius Tip Action Library
//
// This library implements a Solana Actions endpoint for tipping Audius
// creators in $AUDIO:
// - Creator profile lookup against the Audius discovery API
// - $AUDIO amount parsing and scaling to base units
// - Unsigned v0 SPL token transfer transactions
// - actix-web routes following the Actions GET/POST convention

pub mod actions;
pub mod audius;
pub mod chain;
pub mod config;
pub mod error;
pub mod utils;

pub use error::{TipError, TipResult};
