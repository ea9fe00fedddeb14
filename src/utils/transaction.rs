use base64::{engine::general_purpose::STANDARD, Engine};
use solana_sdk::transaction::VersionedTransaction;

use crate::error::{TipError, TipResult};

/// Serialize a transaction to Solana wire format and base64-encode it.
pub fn encode_transaction(transaction: &VersionedTransaction) -> TipResult<String> {
    let bytes = bincode::serialize(transaction)
        .map_err(|e| TipError::TransactionBuild(format!("serialization failed: {}", e)))?;
    Ok(STANDARD.encode(bytes))
}

/// Inverse of [`encode_transaction`].
pub fn decode_transaction(encoded: &str) -> TipResult<VersionedTransaction> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| TipError::InvalidRequest(format!("invalid base64: {}", e)))?;
    bincode::deserialize(&bytes)
        .map_err(|e| TipError::InvalidRequest(format!("invalid transaction bytes: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{
        hash::Hash,
        message::{v0::Message as V0Message, VersionedMessage},
        pubkey::Pubkey,
        signature::Signature,
        system_instruction,
    };

    #[test]
    fn test_encoded_transaction_decodes_to_same_message() {
        let payer = Pubkey::new_unique();
        let ix = system_instruction::transfer(&payer, &Pubkey::new_unique(), 42);
        let message = V0Message::try_compile(&payer, &[ix], &[], Hash::new_unique()).unwrap();
        let tx = VersionedTransaction {
            signatures: vec![Signature::default()],
            message: VersionedMessage::V0(message),
        };

        let decoded = decode_transaction(&encode_transaction(&tx).unwrap()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_transaction("!!!").is_err());
        assert!(decode_transaction("AAAA").is_err());
    }
}
