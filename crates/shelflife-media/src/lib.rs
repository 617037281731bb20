//! # shelflife-media: Capture Utilities for ShelfLife
//!
//! Everything that happens between the camera and a product record:
//!
//! - [`compress`] - photo preprocessing (downscale + JPEG re-encode into a
//!   base64 data-URI payload, run once per capture)
//! - [`decoder`] - the barcode-decoder capability trait the shell injects
//!   into the product-creation flow
//! - [`error`] - typed media errors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelflife_media::compress::{compress, DEFAULT_MAX_WIDTH};
//!
//! let payload = compress(captured_bytes, DEFAULT_MAX_WIDTH).await?;
//! let product = Product::new(barcode, name, category, expiry, 1, Some(payload), now);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod compress;
pub mod decoder;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use compress::{compress, compress_blocking, DEFAULT_MAX_WIDTH, JPEG_QUALITY};
pub use decoder::{BarcodeDecoder, FixedDecoder, OnDecoded, OnScanError};
pub use error::{ImageError, MediaResult};
