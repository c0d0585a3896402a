use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuctionError {
    #[error("malformed end-time timestamp: {value:?}")]
    MalformedTimestamp { value: String },

    #[error("unknown timezone: {zone:?}")]
    UnknownZone { zone: String },

    #[error("incomplete record: missing required field `{field}`")]
    IncompleteRecord { field: &'static str },

    #[error("invalid price value: {value:?}")]
    InvalidPrice { value: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in `{field}`: {reason}")]
    ConfigError { field: String, reason: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl AuctionError {
    /// True for the per-record failures that skip one item instead of
    /// aborting a whole batch.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            AuctionError::MalformedTimestamp { .. }
                | AuctionError::IncompleteRecord { .. }
                | AuctionError::InvalidPrice { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuctionError>;
