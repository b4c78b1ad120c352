use strum::EnumIs;
use thiserror::Error;

/// Consistency checks an encode can trip over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum InvalidValueReason {
    /// Arrays, maps and indirections are nested deeper than the configured ceiling.
    #[error("value nesting exceeds the configured maximum depth of {max}")]
    DepthExceeded { max: usize },

    /// A lazy sequence produced more elements than the configured ceiling.
    #[error("lazy sequence produced more than the configured maximum of {max} elements")]
    LazySequenceTooLong { max: usize },
}

#[derive(Debug, EnumIs, Error)]
pub enum Error {
    /// The output buffer could not be grown. Fatal for the whole encode.
    #[error("out of memory: failed to grow the output buffer to {requested} bytes")]
    OutOfMemory { requested: usize },

    /// The value handed to the encoder is not encodable as-is.
    #[error("invalid value: {reason}")]
    InvalidValue { reason: InvalidValueReason },

    /// An encoder configuration document could not be parsed.
    #[error("Failed to parse encoder configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The encoded document is not valid UTF-8 and cannot be returned as text.
    #[error("encoded document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl From<InvalidValueReason> for Error {
    fn from(reason: InvalidValueReason) -> Self {
        Error::InvalidValue { reason }
    }
}

pub type LlsdResult<T> = Result<T, Error>;
