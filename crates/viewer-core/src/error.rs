use thiserror::Error;

/// Errors raised while loading or decoding viewer inputs.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("HTTP {status} while fetching {url}")]
    Http { status: u16, url: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid PLY data: {0}")]
    Ply(String),

    #[error("invalid camera records: {0}")]
    Records(#[from] serde_json::Error),

    #[error("invalid viewer configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
