// SPDX-License-Identifier: MIT
//! # canvas-scale: Canonical Grayscale Scaling for Digit Canvases
//!
//! This crate turns an arbitrary-size RGB raster into the fixed-size, single-channel
//! input that digit-recognition models are trained on (28×28, 8-bit luma).
//!
//! ## Key Components
//!
//! - [`plan`]: Canonical output sizes and scaling plan computation
//! - [`cpu`]: Luma conversion and Lanczos3 downscaling built on fast_image_resize
//!
//! ## Resampling
//!
//! The convolution filter is Lanczos3 with an adaptive kernel support, so heavy
//! downscaling (280px → 28px) averages over every source pixel instead of sampling.
//! Nearest-neighbour resampling is never used: it changes output values and breaks
//! compatibility with models trained on antialiased input.
//!
//! ## Usage Example
//!
//! ```rust
//! use canvas_scale::cpu::{rgb_to_luma, scale_gray_cpu};
//! use canvas_scale::plan::{build_plan, CanonicalSize, Size};
//!
//! let input = Size { w: 280, h: 280 };
//! let rgb = vec![255u8; (input.w * input.h * 3) as usize];
//! let luma = rgb_to_luma(&rgb);
//!
//! let plan = build_plan(input, CanonicalSize::Mnist28).unwrap();
//! let mut resizer = fast_image_resize::Resizer::new();
//! let mut out = vec![0u8; plan.out.pixel_count()];
//! scale_gray_cpu(&mut resizer, &luma, &plan, &mut out).unwrap();
//!
//! assert!(out.iter().all(|&v| v == 255));
//! ```

pub mod cpu;
pub mod plan;
