// Unsigned $AUDIO tip transactions
//
// Builds a v0 versioned transaction holding a single SPL token transfer from
// the tipper's associated token account to the creator. The transaction is
// returned unsigned; the caller's wallet signs and submits it.

use solana_sdk::{
    instruction::Instruction,
    message::{v0::Message as V0Message, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};
use spl_associated_token_account::get_associated_token_address;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::chain::blockhash::BlockhashSource;
use crate::chain::constants::AUDIO_MINT;
use crate::error::{TipError, TipResult};

/// Where the transfer lands on the creator's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipientAccount {
    /// Transfer straight into the resolved wallet. Audius `spl_wallet`
    /// values are already $AUDIO token accounts.
    #[default]
    Direct,
    /// Derive the recipient's associated token account for the mint.
    Associated,
}

impl FromStr for RecipientAccount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "associated" | "ata" => Ok(Self::Associated),
            other => Err(format!(
                "unknown recipient account mode '{}' (expected 'direct' or 'associated')",
                other
            )),
        }
    }
}

/// Transaction builder for token tips
pub struct TipTransactionBuilder {
    blockhash_source: Arc<dyn BlockhashSource>,
    mint: Pubkey,
    recipient_account: RecipientAccount,
}

impl TipTransactionBuilder {
    pub fn new(blockhash_source: Arc<dyn BlockhashSource>, recipient_account: RecipientAccount) -> Self {
        Self {
            blockhash_source,
            mint: AUDIO_MINT,
            recipient_account,
        }
    }

    pub fn mint(&self) -> Pubkey {
        self.mint
    }

    pub fn recipient_account(&self) -> RecipientAccount {
        self.recipient_account
    }

    /// Build the unsigned transfer of `amount_units` base units from
    /// `sender` to `recipient`. Fetches a fresh blockhash on every call.
    pub async fn build_token_transfer(
        &self,
        sender: &Pubkey,
        recipient: &Pubkey,
        amount_units: u64,
    ) -> TipResult<VersionedTransaction> {
        let transfer_ix = self.build_transfer_instruction(sender, recipient, amount_units)?;

        let recent_blockhash = self.blockhash_source.latest_blockhash().await?;

        let message = V0Message::try_compile(sender, &[transfer_ix], &[], recent_blockhash)
            .map_err(|e| TipError::TransactionBuild(e.to_string()))?;
        let message = VersionedMessage::V0(message);

        // Placeholder signatures keep the wire layout valid until the wallet signs.
        let num_signatures = message.header().num_required_signatures as usize;
        let transaction = VersionedTransaction {
            signatures: vec![Signature::default(); num_signatures],
            message,
        };

        info!(
            "Built tip transaction: {} -> {}, {} units, blockhash {}",
            sender, recipient, amount_units, recent_blockhash
        );

        Ok(transaction)
    }

    /// Create the SPL token transfer instruction, authorized by `sender`.
    fn build_transfer_instruction(
        &self,
        sender: &Pubkey,
        recipient: &Pubkey,
        amount_units: u64,
    ) -> TipResult<Instruction> {
        let source = get_associated_token_address(sender, &self.mint);
        let destination = match self.recipient_account {
            RecipientAccount::Direct => *recipient,
            RecipientAccount::Associated => get_associated_token_address(recipient, &self.mint),
        };

        debug!(
            "Transfer accounts: source ATA {}, destination {} ({:?})",
            source, destination, self.recipient_account
        );

        spl_token::instruction::transfer(
            &spl_token::id(),
            &source,
            &destination,
            sender,
            &[],
            amount_units,
        )
        .map_err(|e| TipError::TransactionBuild(e.to_string()))
    }
}
