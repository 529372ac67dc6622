/// Convenience result type used across facepaint.
pub type FacepaintResult<T> = Result<T, FacepaintError>;

/// Top-level error taxonomy used by compositor APIs.
///
/// Only codec failures, detector failures and surface setup failures surface as errors. Missing
/// faces, unknown categories and unparseable colors are defined outcomes, not errors.
#[derive(thiserror::Error, Debug)]
pub enum FacepaintError {
    /// Invalid caller-provided data (options, products, landmark files).
    #[error("validation error: {0}")]
    Validation(String),

    /// The source image bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The composited surface could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// The landmark detector failed or returned data outside the fixed 468-point schema.
    #[error("detection error: {0}")]
    Detection(String),

    /// Raster surface setup failed.
    ///
    /// The rasterizer addresses pixels with `u16`, so a decodable image wider or taller than
    /// 65535 px ends here instead of producing a result.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FacepaintError {
    /// Build a [`FacepaintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FacepaintError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`FacepaintError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`FacepaintError::Detection`] value.
    pub fn detection(msg: impl Into<String>) -> Self {
        Self::Detection(msg.into())
    }

    /// Build a [`FacepaintError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
