use thiserror::Error;

/// Failure scoped to a single email. The batch runner catches these and
/// moves on to the next message.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid amount '{raw}'")]
    InvalidAmount {
        raw: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("invalid delivery timestamp '{raw}': {source}")]
    InvalidDeliveryDate {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("no table header '{header}' in markup body")]
    MissingTable { header: String },

    #[error("bad extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
