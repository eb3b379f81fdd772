/// Result alias used across the crate.
pub type ShotframeResult<T> = Result<T, ShotframeError>;

/// Fatal errors. Per-entry problems are reported as [`crate::SkipReason`] values instead.
#[derive(thiserror::Error, Debug)]
pub enum ShotframeError {
    /// Invalid input that cannot be coerced.
    #[error("validation error: {0}")]
    Validation(String),

    /// An image could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// An image could not be encoded or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Geometry collapsed to an unusable shape.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else, with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShotframeError {
    /// Build a [`ShotframeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShotframeError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ShotframeError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ShotframeError::Geometry`].
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
