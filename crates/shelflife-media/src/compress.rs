//! # Image Preprocessor
//!
//! Downsizes and re-encodes a captured photo into a small embeddable
//! payload before it enters a product record.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        compress()                                   │
//! │                                                                     │
//! │  raw bytes ──► decode ──► scale to width = max_width ──► JPEG q70   │
//! │                              (aspect preserved)            │        │
//! │                                                            ▼        │
//! │                              "data:image/jpeg;base64,..." payload   │
//! │                                                                     │
//! │  decode failure ──► ImageError::DecodeFailed (never a blank image)  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-shot and not re-entrant by design: a second call while one is in
//! flight is simply an independent operation.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use tracing::debug;

use crate::error::{ImageError, MediaResult};

// =============================================================================
// Constants
// =============================================================================

/// Default target width in pixels for embedded product photos.
pub const DEFAULT_MAX_WIDTH: u32 = 300;

/// Fixed lossy re-encode quality (0-100).
pub const JPEG_QUALITY: u8 = 70;

// =============================================================================
// Compression
// =============================================================================

/// Compresses a captured photo into a base64 JPEG data URI.
///
/// The image is scaled uniformly so its width equals `max_width` (height
/// follows the aspect ratio, rounded, minimum 1 pixel), then re-encoded as
/// JPEG at quality 70.
///
/// Decode and encode run on the blocking pool; the await point is the only
/// suspension.
pub async fn compress(bytes: Vec<u8>, max_width: u32) -> MediaResult<String> {
    tokio::task::spawn_blocking(move || compress_blocking(&bytes, max_width))
        .await
        .map_err(|e| ImageError::DecodeFailed(e.to_string()))?
}

/// Same pipeline as [`compress`] for callers already off the async runtime.
pub fn compress_blocking(bytes: &[u8], max_width: u32) -> MediaResult<String> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ImageError::DecodeFailed(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    let ratio = f64::from(max_width) / f64::from(width);
    let new_height = ((f64::from(height) * ratio).round() as u32).max(1);

    debug!(width, height, new_width = max_width, new_height, "Compressing photo");

    // JPEG has no alpha channel; flatten before encoding.
    let resized = img
        .resize_exact(max_width, new_height, FilterType::Triangle)
        .to_rgb8();

    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    resized
        .write_with_encoder(encoder)
        .map_err(|e| ImageError::EncodeFailed(e.to_string()))?;

    Ok(format!(
        "data:image/jpeg;base64,{}",
        BASE64.encode(out.into_inner())
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
