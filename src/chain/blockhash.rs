use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, hash::Hash};
use std::sync::Arc;
use tracing::{debug, error};

use crate::error::{TipError, TipResult};

/// Source of recent blockhashes used as the replay anchor of a transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockhashSource: Send + Sync {
    /// Fetch the latest blockhash. Every call goes to the network.
    async fn latest_blockhash(&self) -> TipResult<Hash>;
}

/// `BlockhashSource` backed by a Solana JSON-RPC endpoint.
pub struct RpcBlockhashSource {
    rpc_client: Arc<RpcClient>,
    commitment: CommitmentConfig,
}

impl RpcBlockhashSource {
    pub fn new(rpc_client: Arc<RpcClient>, commitment: CommitmentConfig) -> Self {
        Self {
            rpc_client,
            commitment,
        }
    }
}

#[async_trait]
impl BlockhashSource for RpcBlockhashSource {
    async fn latest_blockhash(&self) -> TipResult<Hash> {
        let (blockhash, last_valid_block_height) = self
            .rpc_client
            .get_latest_blockhash_with_commitment(self.commitment)
            .await
            .map_err(|e| {
                error!("getLatestBlockhash failed: {}", e);
                TipError::CheckpointFetchFailure(e.to_string())
            })?;

        debug!(
            "Fetched blockhash {} (valid until block {}, commitment {:?})",
            blockhash, last_valid_block_height, self.commitment.commitment
        );

        Ok(blockhash)
    }
}
