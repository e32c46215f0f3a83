use thiserror::Error;

/// Errors produced by metadata provider lookups.
///
/// These never cross the resolver boundary: the resolver absorbs them and
/// degrades to an absent context instead.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("metadata request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("metadata provider returned {status} from {endpoint}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
}

pub type Result<T> = std::result::Result<T, MetadataError>;
