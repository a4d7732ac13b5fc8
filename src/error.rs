//! # Error Handling
//!
//! Every failure of the normalization pipeline is terminal for that invocation
//! and surfaces to the caller as a [`CanvasError`]. A submission without a
//! drawing is not an error: it yields a [`NormalizedDrawing`](crate::NormalizedDrawing)
//! whose image fields are all `None`.
//!
//! ## Categories
//!
//! - `malformed_payload`: the data URL lacks the `;base64,` marker or its base64 text is invalid
//! - `decode`: the decoded bytes are not a recognizable raster image
//! - `resize`: the decoded image could not be resampled to the canonical size
//!
//! ## Usage
//!
//! ```rust
//! use mnist_canvas::{normalize, CanvasError};
//! use mnist_canvas::error::Retryable;
//!
//! let err = normalize(true, Some("data:image/png,not-base64")).unwrap_err();
//! assert!(matches!(err, CanvasError::MalformedPayload { .. }));
//! assert_eq!(err.category(), "malformed_payload");
//! assert!(!err.is_retryable());
//! ```

use std::error::Error as StdError;

use canvas_scale::cpu::ScaleError;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Base error type for the canvas normalization pipeline.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The data URL could not be split or its base64 text could not be decoded.
    #[error("malformed drawing payload: {reason}")]
    MalformedPayload {
        reason: String,
        #[source]
        source: Option<base64::DecodeError>,
    },
    /// The decoded bytes are not a raster image the pipeline can read.
    #[error("drawing payload is not a decodable image: {reason}")]
    Decode {
        reason: String,
        #[source]
        source: Option<BoxError>,
    },
    /// Resampling to the canonical size failed.
    #[error("failed to resize drawing: {0}")]
    Resize(#[from] ScaleError),
}

impl CanvasError {
    /// Create a malformed-payload error with no underlying cause
    pub fn malformed_payload(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a malformed-payload error from a base64 failure
    pub fn invalid_base64(source: base64::DecodeError) -> Self {
        Self::MalformedPayload {
            reason: format!("invalid base64 text ({source})"),
            source: Some(source),
        }
    }

    /// Create a decode error with no underlying cause
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a decode error wrapping the image library's failure
    pub fn decode_with(
        reason: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Decode {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedPayload { .. } => "malformed_payload",
            Self::Decode { .. } => "decode",
            Self::Resize(_) => "resize",
        }
    }

    /// What the host application can do about the failure.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MalformedPayload { .. } => {
                "send the drawing as `data:<mime>;base64,<text>` with standard padded base64"
            }
            Self::Decode { .. } => {
                "export the canvas as PNG (or another common raster format) before submitting"
            }
            Self::Resize(_) => {
                "report the canvas dimensions; the image decoded but could not be resampled"
            }
        }
    }
}

/// Result type alias using our custom error type
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Trait for errors that can be retried
pub trait Retryable {
    /// Check if this error can be retried
    fn is_retryable(&self) -> bool;
}

impl Retryable for CanvasError {
    // Same payload, same outcome: the pipeline is a pure function of its input.
    fn is_retryable(&self) -> bool {
        false
    }
}
