//! # Image Normalization Pipeline
//!
//! Turns one drawing submission into a [`NormalizedDrawing`]:
//!
//! 1. **Decode**: split the data URL at `;base64,` and decode the body
//! 2. **Grayscale + resize**: decode the raster (format sniffed from its header),
//!    convert to 8-bit luma, resample to 28×28 with a Lanczos3 filter
//! 3. **Array**: copy the resized pixels into a `(28, 28)` row-major array
//! 4. **Assembly**: return all outputs together
//!
//! The pipeline is a pure function of its input. It holds no state between calls
//! and may be invoked from any number of threads at once.

use canvas_scale::cpu::{ScaleError, rgb_to_luma, scale_gray_cpu};
use canvas_scale::plan::{CanonicalSize, Size, build_plan};
use fast_image_resize::Resizer;
use image::{DynamicImage, GrayImage};
use ndarray::Array2;

use crate::error::{CanvasError, CanvasResult};
use crate::payload::decode_data_url;

/// Output resolution of every normalized drawing.
pub const CANONICAL_SIZE: CanonicalSize = CanonicalSize::Mnist28;

/// What the drawing surface handed back for one interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawingSubmission {
    /// Whether the user explicitly confirmed the drawing.
    pub is_submitted: bool,
    /// `data:<mime>;base64,<encoded>` raster of the canvas, present only when a drawing exists.
    pub image_payload: Option<String>,
}

impl DrawingSubmission {
    pub fn new(is_submitted: bool, image_payload: Option<String>) -> Self {
        Self {
            is_submitted,
            image_payload,
        }
    }

    /// Run the normalization pipeline on this submission.
    pub fn normalize(&self) -> CanvasResult<NormalizedDrawing> {
        normalize(self.is_submitted, self.image_payload.as_deref())
    }
}

/// Snapshot of one submission after normalization.
///
/// `raw_bytes`, `raw_base64`, `normalized_image` and `normalized_array` are either
/// all `Some` or all `None`; only the presence of a payload decides which.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDrawing {
    pub is_submitted: bool,
    /// Decoded image file bytes (typically a PNG).
    pub raw_bytes: Option<Vec<u8>>,
    /// The base64 body of the data URL, exactly as received.
    pub raw_base64: Option<String>,
    /// 28×28 single-channel 8-bit image.
    pub normalized_image: Option<GrayImage>,
    /// Pixels of `normalized_image`, shape `(rows, cols) == (28, 28)`, values 0–255.
    pub normalized_array: Option<Array2<u8>>,
}

impl NormalizedDrawing {
    /// Result for a submission that carried no drawing.
    pub fn blank(is_submitted: bool) -> Self {
        Self {
            is_submitted,
            raw_bytes: None,
            raw_base64: None,
            normalized_image: None,
            normalized_array: None,
        }
    }

    pub fn has_drawing(&self) -> bool {
        self.raw_bytes.is_some()
    }
}

/// Normalize one submission.
///
/// An absent payload is not an error: the result carries `is_submitted` and no
/// image fields. A payload that is present but unusable fails with
/// [`CanvasError::MalformedPayload`] or [`CanvasError::Decode`].
///
/// ```rust
/// let blank = mnist_canvas::normalize(true, None).unwrap();
/// assert!(blank.is_submitted);
/// assert!(blank.normalized_array.is_none());
/// ```
#[tracing::instrument(
    level = "debug",
    skip(image_payload),
    fields(has_payload = image_payload.is_some())
)]
pub fn normalize(
    is_submitted: bool,
    image_payload: Option<&str>,
) -> CanvasResult<NormalizedDrawing> {
    let Some(data_url) = image_payload else {
        tracing::debug!("no drawing in submission");
        return Ok(NormalizedDrawing::blank(is_submitted));
    };

    let payload = decode_data_url(data_url)?;
    let normalized_image = bytes_to_normalized_image(&payload.bytes)?;
    let normalized_array = image_to_array(&normalized_image);

    Ok(NormalizedDrawing {
        is_submitted,
        raw_bytes: Some(payload.bytes),
        raw_base64: Some(payload.base64.to_owned()),
        normalized_image: Some(normalized_image),
        normalized_array: Some(normalized_array),
    })
}

/// Decode an encoded raster and bring it to the canonical grayscale size.
pub fn bytes_to_normalized_image(bytes: &[u8]) -> CanvasResult<GrayImage> {
    if bytes.is_empty() {
        return Err(CanvasError::decode("payload decoded to zero bytes"));
    }
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| CanvasError::decode_with("unrecognized or corrupt image data", e))?;
    to_canonical_gray(&decoded)
}

/// Convert any decoded image to 8-bit luma and resample it to 28×28.
///
/// Alpha is dropped before the luma conversion, not composited.
pub fn to_canonical_gray(image: &DynamicImage) -> CanvasResult<GrayImage> {
    let input = Size {
        w: image.width(),
        h: image.height(),
    };
    let plan = build_plan(input, CANONICAL_SIZE)
        .map_err(|e| CanvasError::decode_with("image has no pixels", e))?;

    let luma = rgb_to_luma(image.to_rgb8().as_raw());
    let mut out = vec![0u8; plan.out.pixel_count()];
    scale_gray_cpu(&mut Resizer::new(), &luma, &plan, &mut out)?;

    tracing::debug!(
        src_w = input.w,
        src_h = input.h,
        color = ?image.color(),
        "resampled drawing to {}x{}",
        plan.out.w,
        plan.out.h
    );

    let got = out.len();
    GrayImage::from_raw(plan.out.w, plan.out.h, out).ok_or_else(|| {
        CanvasError::Resize(ScaleError::BufferTooSmall {
            need: plan.out.pixel_count(),
            got,
        })
    })
}

/// Copy a grayscale image into a `(height, width)` array, row-major.
pub fn image_to_array(image: &GrayImage) -> Array2<u8> {
    let (w, h) = image.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(y, x)| {
        image.get_pixel(x as u32, y as u32).0[0]
    })
}
