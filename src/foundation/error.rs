/// Convenience result type used across motif.
pub type MotifResult<T> = Result<T, MotifError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MotifError {
    /// Malformed interpolation input (breakpoints, range lengths, non-finite values).
    #[error("domain error: {0}")]
    Domain(String),

    /// Invalid composition, timeline, spring or transition configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Frame index outside the composition duration.
    #[error("range error: {0}")]
    Range(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotifError {
    /// Build a [`MotifError::Domain`] value.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Build a [`MotifError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MotifError::Range`] value.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Build a [`MotifError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
