use anyhow::{anyhow, Context, Result};
use solana_sdk::commitment_config::CommitmentConfig;
use std::str::FromStr;
use std::time::Duration;

use crate::chain::RecipientAccount;

/// Main configuration struct containing all service settings
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub audius: AudiusConfig,
    pub rpc: RpcConfig,
    pub tip: TipConfig,
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable text.
    pub log_json: bool,
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    /// `None` leaves the worker count to actix (one per core).
    pub workers: Option<usize>,
}

/// Audius discovery API configuration
#[derive(Debug, Clone)]
pub struct AudiusConfig {
    pub api_url: String,
    pub timeout: Option<Duration>,
}

/// RPC endpoint configuration
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub url: String,
    pub commitment: CommitmentConfig,
    pub timeout_seconds: u64,
}

/// Transaction shape configuration
#[derive(Debug, Clone)]
pub struct TipConfig {
    pub recipient_account: RecipientAccount,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Build configuration from the current process environment only.
    pub fn from_env() -> Result<Self> {
        let server = ServerConfig {
            addr: get_env_or_default("SERVER_ADDR", "127.0.0.1:8080"),
            workers: match get_u64_env("SERVER_WORKERS", 0)? {
                0 => None,
                n => Some(n as usize),
            },
        };

        let audius = AudiusConfig {
            api_url: get_env_or_default("AUDIUS_API_URL", "https://discoveryprovider.audius.co"),
            // 0 (or unset) keeps reqwest's default of no timeout
            timeout: match get_u64_env("AUDIUS_TIMEOUT_SECONDS", 0)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        };

        let rpc = RpcConfig {
            url: get_env_or_default("RPC_URL", "https://api.mainnet-beta.solana.com"),
            commitment: parse_commitment(&get_env_or_default("COMMITMENT_LEVEL", "finalized"))?,
            timeout_seconds: get_u64_env("RPC_TIMEOUT_SECONDS", 30)?,
        };

        let tip = TipConfig {
            recipient_account: RecipientAccount::from_str(&get_env_or_default(
                "RECIPIENT_ACCOUNT_MODE",
                "direct",
            ))
            .map_err(|e| anyhow!(e))
            .context("Failed to parse RECIPIENT_ACCOUNT_MODE")?,
        };

        Ok(Config {
            server,
            audius,
            rpc,
            tip,
            log_level: get_env_or_default("LOG_LEVEL", "info"),
            log_json: get_env_or_default("LOG_FORMAT", "text").eq_ignore_ascii_case("json"),
        })
    }
}

// ============================================================================
// Helper Functions for Environment Variable Parsing
// ============================================================================

/// Get environment variable or return default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get u64 environment variable with default
fn get_u64_env(key: &str, default: u64) -> Result<u64> {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .context(format!("Failed to parse {} as u64", key))
}

/// Parse a commitment level name (`processed`, `confirmed`, `finalized`)
fn parse_commitment(level: &str) -> Result<CommitmentConfig> {
    CommitmentConfig::from_str(level)
        .map_err(|_| anyhow!("Unknown COMMITMENT_LEVEL '{}'", level))
}
