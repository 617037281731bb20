//! # Media Error Types

use thiserror::Error;

/// Image preprocessing errors.
///
/// Decode failure propagates to the caller; the preprocessor never
/// silently produces a blank image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The input bytes are not a decodable image.
    #[error("image decode failed: {0}")]
    DecodeFailed(String),

    /// JPEG re-encoding failed.
    #[error("image encode failed: {0}")]
    EncodeFailed(String),
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, ImageError>;
