// SPDX-License-Identifier: MIT
//! # Canonical Sizes and Plan Computation
//!
//! A scaling plan pairs the decoded canvas size with the size the model expects.
//! The aspect ratio is never preserved: a wide or tall canvas is squeezed to fill
//! the whole canonical square, the same way the reference training data was built.

use thiserror::Error;

/// Represents a 2D size with width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    /// Number of pixels covered, i.e. the byte length of an 8-bit single-channel buffer.
    pub fn pixel_count(self) -> usize {
        (self.w as usize) * (self.h as usize)
    }

    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Fixed input resolutions of digit-recognition models.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CanonicalSize {
    /// 28×28, the MNIST layout.
    #[default]
    Mnist28,
}

impl CanonicalSize {
    pub const fn size(self) -> Size {
        match self {
            CanonicalSize::Mnist28 => Size { w: 28, h: 28 },
        }
    }
}

/// Complete scaling plan computed from input parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalePlan {
    /// Decoded canvas dimensions
    pub input: Size,
    /// Model input size used for planning
    pub target: CanonicalSize,
    /// Final output dimensions
    pub out: Size,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("input image has zero area ({}x{})", .0.w, .0.h)]
    EmptyInput(Size),
}

/// Compute a scaling plan from the decoded size and target.
///
/// Both sides are stretched independently, so every input maps onto the full
/// output canvas regardless of its aspect ratio.
pub fn build_plan(input: Size, target: CanonicalSize) -> Result<ScalePlan, PlanError> {
    if input.is_empty() {
        return Err(PlanError::EmptyInput(input));
    }
    Ok(ScalePlan {
        input,
        target,
        out: target.size(),
    })
}
