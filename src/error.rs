use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// Every failure a tip request can end in.
///
/// Nothing is recovered internally: each variant maps to exactly one HTTP
/// status and is returned to the caller as an Actions error body.
#[derive(thiserror::Error, Debug)]
pub enum TipError {
    #[error("no Audius user with handle '{0}'")]
    ProfileNotFound(String),

    #[error("profile service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("malformed profile response: {0}")]
    ProfileMalformed(String),

    #[error("invalid Solana address '{0}'")]
    InvalidAddress(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("failed to fetch recent blockhash: {0}")]
    CheckpointFetchFailure(String),

    #[error("failed to build transaction: {0}")]
    TransactionBuild(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type TipResult<T> = Result<T, TipError>;

/// Error body defined by the Solana Actions convention.
#[derive(Debug, Serialize)]
pub struct ActionError {
    pub message: String,
}

impl ResponseError for TipError {
    fn status_code(&self) -> StatusCode {
        match self {
            TipError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            TipError::UpstreamUnavailable(_) | TipError::ProfileMalformed(_) => {
                StatusCode::BAD_GATEWAY
            }
            TipError::InvalidAddress(_)
            | TipError::InvalidAmount(_)
            | TipError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            TipError::CheckpointFetchFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
            TipError::TransactionBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ActionError {
            message: self.to_string(),
        })
    }
}
