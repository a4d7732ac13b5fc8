//! Common test utilities and helpers for the canvas tests
//!
//! Fixtures are built in memory with the `image` crate and wrapped in data URLs
//! the same way a browser canvas exports them.

#![allow(dead_code)]

/// Test canvas images and their encodings
pub mod test_canvases {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use mnist_canvas::payload::encode_data_url;

    /// Canvas size the default widget configuration renders
    pub const CANVAS_SIDE: u32 = 280;

    pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    /// Create a solid color RGBA canvas
    pub fn solid(w: u32, h: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(w, h, color)
    }

    /// Black canvas with a thick white vertical bar down the middle, like a drawn "1"
    pub fn drawn_one(w: u32, h: u32) -> RgbaImage {
        let mut img = solid(w, h, BLACK);
        let bar = (w / 10).max(1);
        let x0 = w / 2 - bar / 2;
        for y in h / 8..h - h / 8 {
            for x in x0..x0 + bar {
                img.put_pixel(x, y, WHITE);
            }
        }
        img
    }

    /// Black canvas with a thick white stroke from the top-left to the bottom-right corner
    pub fn drawn_diagonal(w: u32, h: u32) -> RgbaImage {
        let mut img = solid(w, h, BLACK);
        let half = (w.max(h) / 28).max(1) as i64;
        for y in 0..h {
            let cx = (y as i64 * w as i64) / h as i64;
            let lo = (cx - half).max(0) as u32;
            let hi = (cx + half).min(w as i64 - 1) as u32;
            for x in lo..=hi {
                img.put_pixel(x, y, WHITE);
            }
        }
        img
    }

    /// Encode an image in the given container format
    pub fn encode(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Vec::new();
        let dynamic = match format {
            // JPEG has no alpha channel
            ImageFormat::Jpeg => {
                DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img.clone()).to_rgb8())
            }
            _ => DynamicImage::ImageRgba8(img.clone()),
        };
        dynamic
            .write_to(&mut Cursor::new(&mut buf), format)
            .expect("encoding a test image never fails");
        buf
    }

    pub fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        encode(img, ImageFormat::Png)
    }

    /// Data URL in the form `canvas.toDataURL()` produces
    pub fn png_data_url(img: &RgbaImage) -> String {
        encode_data_url("image/png", &png_bytes(img))
    }

    /// Base64 body of a data URL
    pub fn body(data_url: &str) -> &str {
        data_url
            .split_once(";base64,")
            .map(|(_, b)| b)
            .expect("fixture urls always carry the marker")
    }
}

/// Pillow's 8-bit Lanczos resampler (22-bit fixed-point coefficients), ported
/// for comparison against our resize path
pub mod legacy_resample {
    use std::f64::consts::PI;

    const SUPPORT: f64 = 3.0;
    const PRECISION_BITS: u32 = 32 - 8 - 2;

    fn sinc(x: f64) -> f64 {
        if x == 0.0 {
            1.0
        } else {
            (x * PI).sin() / (x * PI)
        }
    }

    fn lanczos(x: f64) -> f64 {
        if (-SUPPORT..SUPPORT).contains(&x) {
            sinc(x) * sinc(x / SUPPORT)
        } else {
            0.0
        }
    }

    /// Per output index: first input index and its integer weights
    fn coefficients(in_size: usize, out_size: usize) -> Vec<(usize, Vec<i64>)> {
        let scale = in_size as f64 / out_size as f64;
        let filterscale = scale.max(1.0);
        let support = SUPPORT * filterscale;
        (0..out_size)
            .map(|xx| {
                let center = (xx as f64 + 0.5) * scale;
                // C-style truncating casts
                let xmin = ((center - support + 0.5) as i64).max(0);
                let xmax = ((center + support + 0.5) as i64).min(in_size as i64);
                let weights: Vec<f64> = (xmin..xmax)
                    .map(|x| lanczos((x as f64 - center + 0.5) / filterscale))
                    .collect();
                let total: f64 = weights.iter().sum();
                let fixed = weights
                    .iter()
                    .map(|w| {
                        let w = if total != 0.0 { w / total } else { *w };
                        let k = w * (1u64 << PRECISION_BITS) as f64;
                        (if k < 0.0 { k - 0.5 } else { k + 0.5 }) as i64
                    })
                    .collect();
                (xmin as usize, fixed)
            })
            .collect()
    }

    fn clip8(v: i64) -> u8 {
        if v >= 1 << (PRECISION_BITS + 8) {
            255
        } else if v <= 0 {
            0
        } else {
            (v >> PRECISION_BITS) as u8
        }
    }

    fn convolve(taps: &[(usize, Vec<i64>)], sample: impl Fn(usize) -> u8, out: usize) -> u8 {
        let (start, weights) = &taps[out];
        let acc = weights
            .iter()
            .enumerate()
            .fold(1i64 << (PRECISION_BITS - 1), |acc, (i, k)| {
                acc + sample(start + i) as i64 * k
            });
        clip8(acc)
    }

    /// Resize a tightly packed luma image: horizontal pass first, 8-bit
    /// intermediate, then vertical. A pass is skipped when its axis keeps its size.
    pub fn resize(luma: &[u8], w: usize, h: usize, out_w: usize, out_h: usize) -> Vec<u8> {
        assert_eq!(luma.len(), w * h);
        let mut cur = luma.to_vec();
        let mut cur_w = w;

        if out_w != w {
            let taps = coefficients(w, out_w);
            let mut next = vec![0u8; out_w * h];
            for y in 0..h {
                let row = &cur[y * w..(y + 1) * w];
                for x in 0..out_w {
                    next[y * out_w + x] = convolve(&taps, |i| row[i], x);
                }
            }
            cur = next;
            cur_w = out_w;
        }

        if out_h != h {
            let taps = coefficients(h, out_h);
            let mut next = vec![0u8; cur_w * out_h];
            for x in 0..cur_w {
                for y in 0..out_h {
                    next[y * cur_w + x] = convolve(&taps, |i| cur[i * cur_w + x], y);
                }
            }
            cur = next;
        }

        cur
    }
}

/// Custom assertions for testing
pub mod assertions {
    use mnist_canvas::NormalizedDrawing;

    /// Assert that every image-derived field is present and 28x28
    pub fn assert_canonical(drawing: &NormalizedDrawing) {
        assert!(drawing.raw_bytes.is_some(), "raw_bytes missing");
        assert!(drawing.raw_base64.is_some(), "raw_base64 missing");
        let image = drawing.normalized_image.as_ref().expect("normalized_image missing");
        assert_eq!(image.dimensions(), (28, 28), "image is not 28x28");
        let array = drawing.normalized_array.as_ref().expect("normalized_array missing");
        assert_eq!(array.dim(), (28, 28), "array is not 28x28");
    }

    /// Assert that no image-derived field is present
    pub fn assert_blank(drawing: &NormalizedDrawing) {
        assert!(drawing.raw_bytes.is_none());
        assert!(drawing.raw_base64.is_none());
        assert!(drawing.normalized_image.is_none());
        assert!(drawing.normalized_array.is_none());
    }

    /// Assert that every pixel of the normalized array equals `value`
    pub fn assert_uniform(drawing: &NormalizedDrawing, value: u8) {
        let array = drawing.normalized_array.as_ref().expect("normalized_array missing");
        if let Some((idx, v)) = array.indexed_iter().find(|(_, v)| **v != value) {
            panic!("pixel {idx:?} is {v}, expected {value}");
        }
    }
}
