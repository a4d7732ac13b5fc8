//! # Widget Glue
//!
//! Connects a host-provided drawing surface to the normalization pipeline.
//! The host renders the canvas and its buttons from the arguments in
//! [`CanvasConfig::to_component_args`] and reports back the latest component value:
//!
//! ```json
//! { "is_submitted": true, "image_data": "data:image/png;base64,iVBORw0..." }
//! ```
//!
//! Before the user touches the canvas the host reports no value at all; after a
//! clear it reports `is_submitted: false` with `image_data: null`.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::CanvasConfig;
use crate::pipeline::{DrawingSubmission, NormalizedDrawing};

/// The host side of the widget: renders the canvas and returns its current value.
pub trait DrawingSurface {
    /// Render (or re-render) the canvas with `args` and return the component
    /// value, or `None` if the user has not interacted yet.
    fn render(&mut self, args: &Value) -> Result<Option<Value>>;
}

impl DrawingSubmission {
    /// Interpret the value reported by the drawing surface.
    ///
    /// Missing or non-object values mean "nothing drawn yet". A `null` or empty
    /// `image_data` is treated as no drawing.
    pub fn from_component_value(value: Option<&Value>) -> Self {
        let Some(obj) = value.and_then(Value::as_object) else {
            return Self::default();
        };
        let is_submitted = obj
            .get("is_submitted")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let image_payload = obj
            .get("image_data")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        Self {
            is_submitted,
            image_payload,
        }
    }
}

/// A digit-drawing canvas bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct MnistCanvas {
    pub config: CanvasConfig,
}

impl MnistCanvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self { config }
    }

    /// Render the canvas on `surface` and normalize whatever it reports back.
    pub fn show<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<NormalizedDrawing> {
        self.config
            .validate()
            .map_err(anyhow::Error::msg)
            .context("invalid canvas configuration")?;

        let args = self.config.to_component_args();
        let value = surface
            .render(&args)
            .context("drawing surface failed to render")?;

        let submission = DrawingSubmission::from_component_value(value.as_ref());
        tracing::debug!(
            key = self.config.key.as_deref(),
            is_submitted = submission.is_submitted,
            has_payload = submission.image_payload.is_some(),
            "drawing surface reported"
        );

        let drawing = submission
            .normalize()
            .context("failed to normalize submitted drawing")?;
        Ok(drawing)
    }
}
