//! # MNIST Canvas
//!
//! Decoding and normalization of hand-drawn digits for digit-recognition models.
//!
//! A drawing surface (supplied by the host application) exports its canvas as a
//! data URL. This library turns that payload into the raw image bytes, the
//! original base64 text, a 28×28 grayscale image and the matching 28×28 array.
//!
//! ## Architecture
//!
//! - `payload`: data URL splitting and base64 decoding
//! - `pipeline`: raster decode, luma conversion, Lanczos3 resize, array materialization
//! - `config`: drawing-surface options forwarded verbatim to the host
//! - `widget`: the [`DrawingSurface`] seam and the [`MnistCanvas`] glue
//! - `error`: the [`CanvasError`] taxonomy
//!
//! Resampling itself lives in the `canvas-scale` workspace crate.
//!
//! ## Example
//!
//! ```rust
//! use mnist_canvas::{normalize, payload::encode_data_url};
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let white = image::RgbImage::from_pixel(280, 280, image::Rgb([255, 255, 255]));
//! let mut png = Vec::new();
//! white.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
//!
//! let url = encode_data_url("image/png", &png);
//! let drawing = normalize(true, Some(&url))?;
//!
//! let array = drawing.normalized_array.expect("payload was present");
//! assert_eq!(array.dim(), (28, 28));
//! assert!(array.iter().all(|&v| v == 255));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod payload;
pub mod pipeline;
pub mod widget;

pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult};
pub use pipeline::{CANONICAL_SIZE, DrawingSubmission, NormalizedDrawing, normalize};
pub use widget::{DrawingSurface, MnistCanvas};
