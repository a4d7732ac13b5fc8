// SPDX-License-Identifier: MIT
// CPU path built on fast_image_resize (SIMD-accelerated).
// RGB8 → L8 luma, then L8 in → L8 out, direct write into caller-provided dst buffer.

use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8;
use fir::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use thiserror::Error;

use crate::plan::ScalePlan;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("output buffer too small: need {need} bytes, got {got}")]
    BufferTooSmall { need: usize, got: usize },
    #[error("source buffer holds {got} bytes but the plan expects {need}")]
    SourceSizeMismatch { need: usize, got: usize },
    #[error("fast image resize error: {0}")]
    Fir(#[from] fir::ResizeError),
    #[error("image buffer error: {0}")]
    ImageBuf(#[from] fir::ImageBufferError),
}

/// Convert tightly packed RGB8 pixels to 8-bit luma with the ITU-R 601-2 weights.
///
/// `L = R * 299/1000 + G * 587/1000 + B * 114/1000`, evaluated in 16.16 fixed
/// point with rounding. A trailing partial pixel is ignored.
pub fn rgb_to_luma(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .map(|px| luma_601(px[0], px[1], px[2]))
        .collect()
}

#[inline]
fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    // 19595 + 38470 + 7471 == 65536, so white maps to exactly 255.
    let l = (r as u32) * 19595 + (g as u32) * 38470 + (b as u32) * 7471 + 0x8000;
    (l >> 16) as u8
}

/// Resize a single-channel luma image according to `plan`.
///
/// `src_luma` must hold exactly `plan.input` pixels, tightly packed.
/// `dst` must hold at least `plan.out` pixels; only that prefix is written.
pub fn scale_gray_cpu(
    resizer: &mut Resizer,
    src_luma: &[u8],
    plan: &ScalePlan,
    dst: &mut [u8],
) -> Result<(), ScaleError> {
    let src_len = plan.input.pixel_count();
    if src_luma.len() != src_len {
        return Err(ScaleError::SourceSizeMismatch {
            need: src_len,
            got: src_luma.len(),
        });
    }
    let dst_len = plan.out.pixel_count();
    if dst.len() < dst_len {
        return Err(ScaleError::BufferTooSmall {
            need: dst_len,
            got: dst.len(),
        });
    }

    let src_view = TypedImageRef::<U8>::from_buffer(plan.input.w, plan.input.h, src_luma)?;
    let mut dst_image = TypedImage::<U8>::from_buffer(plan.out.w, plan.out.h, &mut dst[..dst_len])?;

    let opts = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .use_alpha(false);
    resizer.resize_typed::<U8>(&src_view, &mut dst_image, &opts)?;

    Ok(())
}
