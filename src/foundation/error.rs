/// Convenience result type used across datapaint.
pub type DatapaintResult<T> = Result<T, DatapaintError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DatapaintError {
    /// Invalid render settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed top-level input (missing rows, unreadable source text).
    #[error("input error: {0}")]
    Input(String),

    /// Errors while rasterizing or compositing.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatapaintError {
    /// Build a [`DatapaintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DatapaintError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`DatapaintError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DatapaintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
