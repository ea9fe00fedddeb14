pub mod address;
pub mod amount;
pub mod blockhash;
pub mod constants;
pub mod transaction_builder;

pub use address::parse_address;
pub use amount::TokenAmount;
pub use blockhash::{BlockhashSource, RpcBlockhashSource};
pub use constants::{AUDIO_DECIMALS, AUDIO_MINT};
pub use transaction_builder::{RecipientAccount, TipTransactionBuilder};
