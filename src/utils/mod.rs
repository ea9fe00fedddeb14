pub mod transaction;

pub use transaction::{decode_transaction, encode_transaction};
