//! # Configuration Module
//!
//! Rendering options of the drawing surface. The widget forwards them verbatim to
//! the host; the normalization pipeline never reads them.
//!
//! ## Configuration Parameters
//!
//! | Parameter | Type | Default | Host argument |
//! |-----------|------|---------|---------------|
//! | `stroke_width` | `u32` | 20 | `strokeWidth` |
//! | `stroke_color` | `String` | `#FFFFFF` | `strokeColor` |
//! | `background_color` | `String` | `#000000` | `backgroundColor` |
//! | `width` | `u32` | 280 | `canvasWidth` |
//! | `height` | `u32` | 280 | `canvasHeight` |
//! | `button_height` | `u32` | 30 | `buttonHeight` |
//! | `submit_button_label` | `String` | `Submit` | `submitButtonLabel` |
//! | `submit_background_color` | `String` | `#FBFBFB` | `submitBackgroundColor` |
//! | `clear_button_label` | `String` | `Clear` | `clearButtonLabel` |
//! | `clear_background_color` | `String` | `#FBFBFB` | `clearBackgroundColor` |
//! | `key` | `Option<String>` | none | `key` |
//!
//! White strokes on a black background match the MNIST convention of a bright
//! digit on a dark field.
//!
//! ## Examples
//!
//! ```rust
//! use mnist_canvas::config::CanvasConfig;
//!
//! let config = CanvasConfig::default()
//!     .with_stroke(12, "#FFFFFF")
//!     .with_key("digit-pad");
//! assert!(config.validate().is_ok());
//!
//! let args = config.to_component_args();
//! assert_eq!(args["strokeWidth"], 12);
//! assert_eq!(args["key"], "digit-pad");
//! ```

use serde::Deserialize;
use serde_json::{Value, json};

/// Options of the drawing surface and its two buttons.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasConfig {
    /// Pen width in canvas pixels.
    pub stroke_width: u32,

    /// Pen color as `#RGB` or `#RRGGBB`.
    pub stroke_color: String,

    /// Canvas fill color, repainted on every clear.
    pub background_color: String,

    /// Canvas width in pixels.
    #[serde(rename = "canvasWidth")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(rename = "canvasHeight")]
    pub height: u32,

    /// Height of the submit/clear button row in pixels.
    pub button_height: u32,

    pub submit_button_label: String,
    pub submit_background_color: String,
    pub clear_button_label: String,
    pub clear_background_color: String,

    /// Identity of the widget instance, for hosts that render several canvases.
    pub key: Option<String>,
}

impl Default for CanvasConfig {
    /// Creates the default digit pad: a 280×280 black canvas with a 20px white pen.
    ///
    /// ```rust
    /// use mnist_canvas::config::CanvasConfig;
    ///
    /// let config = CanvasConfig::default();
    /// assert_eq!(config.width, 280);
    /// assert_eq!(config.stroke_color, "#FFFFFF");
    /// ```
    fn default() -> Self {
        Self {
            stroke_width: 20,
            stroke_color: "#FFFFFF".to_string(),
            background_color: "#000000".to_string(),
            width: 280,
            height: 280,
            button_height: 30,
            submit_button_label: "Submit".to_string(),
            submit_background_color: "#FBFBFB".to_string(),
            clear_button_label: "Clear".to_string(),
            clear_background_color: "#FBFBFB".to_string(),
            key: None,
        }
    }
}

impl CanvasConfig {
    pub fn with_stroke(mut self, width: u32, color: impl Into<String>) -> Self {
        self.stroke_width = width;
        self.stroke_color = color.into();
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Validates the configuration parameters.
    ///
    /// # Validation Rules
    ///
    /// - `stroke_width`, `width`, `height` and `button_height` must be greater than 0
    /// - every color must be `#RGB` or `#RRGGBB` hex
    ///
    /// ```rust
    /// # use mnist_canvas::config::CanvasConfig;
    /// let config = CanvasConfig::default().with_canvas_size(0, 280);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), String> {
        if self.stroke_width == 0 {
            return Err("Stroke width must be greater than 0".to_string());
        }
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Canvas size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if self.button_height == 0 {
            return Err("Button height must be greater than 0".to_string());
        }
        for (field, color) in [
            ("stroke_color", &self.stroke_color),
            ("background_color", &self.background_color),
            ("submit_background_color", &self.submit_background_color),
            ("clear_background_color", &self.clear_background_color),
        ] {
            if !is_hex_color(color) {
                return Err(format!(
                    "{field} must be #RGB or #RRGGBB hex, got {color:?}"
                ));
            }
        }
        Ok(())
    }

    /// Arguments handed to the drawing surface, keyed by the names it expects.
    ///
    /// `default: null` tells the host to report no value until the user interacts.
    pub fn to_component_args(&self) -> Value {
        json!({
            "strokeWidth": self.stroke_width,
            "strokeColor": self.stroke_color,
            "backgroundColor": self.background_color,
            "canvasWidth": self.width,
            "canvasHeight": self.height,
            "buttonHeight": self.button_height,
            "submitButtonLabel": self.submit_button_label,
            "submitBackgroundColor": self.submit_background_color,
            "clearButtonLabel": self.clear_button_label,
            "clearBackgroundColor": self.clear_background_color,
            "key": self.key,
            "default": Value::Null,
        })
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) if hex.len() == 3 || hex.len() == 6 => {
            hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        _ => false,
    }
}
