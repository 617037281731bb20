//! # Barcode Decoder Capability
//!
//! The engine does not decode barcodes. It depends only on this capability
//! trait, injected into the product-creation flow by whatever scanning
//! engine the shell provides (camera, USB scanner, manual entry).
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       BarcodeDecoder                                │
//! │                                                                     │
//! │  start(on_decoded, on_error)                                        │
//! │       │                                                             │
//! │       ├── success ──► on_decoded("8690504012345")                   │
//! │       │               (string assigned verbatim to Product.barcode) │
//! │       └── failure ──► on_error(message)                             │
//! │                                                                     │
//! │  stop()  ← cancel-on-close; safe to call at any time                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

/// Callback invoked once per successful scan with the decoded string.
pub type OnDecoded = Box<dyn FnMut(String) + Send>;

/// Callback invoked when the decoding engine fails.
pub type OnScanError = Box<dyn FnMut(String) + Send>;

/// A pluggable barcode decoding engine.
///
/// Implementations own their capture loop; the engine only consumes the
/// decoded text.
pub trait BarcodeDecoder {
    /// Begins scanning. `on_decoded` fires once per successful scan.
    fn start(&mut self, on_decoded: OnDecoded, on_error: OnScanError);

    /// Stops scanning and releases capture resources. Idempotent.
    fn stop(&mut self);
}

// =============================================================================
// Fixed Decoder
// =============================================================================

/// Decoder that immediately yields a fixed code on start.
///
/// ## Usage
/// Tests and manual-entry fallback (the typed barcode goes through the
/// same capability path as a camera scan).
#[derive(Debug, Clone)]
pub struct FixedDecoder {
    code: String,
    running: bool,
}

impl FixedDecoder {
    /// Creates a decoder that always yields `code`.
    pub fn new(code: impl Into<String>) -> Self {
        FixedDecoder {
            code: code.into(),
            running: false,
        }
    }

    /// Whether start() has been called without a matching stop().
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl BarcodeDecoder for FixedDecoder {
    fn start(&mut self, mut on_decoded: OnDecoded, _on_error: OnScanError) {
        self.running = true;
        on_decoded(self.code.clone());
    }

    fn stop(&mut self) {
        self.running = false;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_fixed_decoder_yields_code_verbatim() {
        let decoded = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&decoded);

        let mut decoder = FixedDecoder::new("8690504012345");
        decoder.start(
            Box::new(move |code| *sink.lock().unwrap() = Some(code)),
            Box::new(|_| panic!("no error expected")),
        );

        assert_eq!(
            decoded.lock().unwrap().as_deref(),
            Some("8690504012345")
        );
        assert!(decoder.is_running());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut decoder = FixedDecoder::new("1");
        decoder.stop();
        decoder.stop();
        assert!(!decoder.is_running());
    }
}
