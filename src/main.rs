use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use mnist_canvas::config::CanvasConfig;
use mnist_canvas::payload::{BASE64_MARKER, encode_data_url};
use mnist_canvas::{DrawingSubmission, NormalizedDrawing};
use tracing_subscriber::EnvFilter;

/// Inspect what the digit canvas hands to a classifier:
/// decode a submission and print its 28×28 grayscale array.
#[derive(Parser, Debug)]
#[command(name = "mnist-canvas")]
#[command(about = "Normalize hand-drawn digit payloads to 28x28 grayscale arrays")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the normalization pipeline on a saved submission
    Normalize {
        /// File holding a data URL, a component value (JSON) or an image
        input: PathBuf,

        /// Report the drawing as not confirmed by the user
        #[arg(long)]
        not_submitted: bool,

        /// How to print the 28x28 array
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
        format: OutputFormat,

        /// Also write the normalized 28x28 image to this path (format from extension)
        #[arg(short, long)]
        save: Option<PathBuf>,
    },
    /// Print an image file as a data URL
    Encode {
        image: PathBuf,

        /// Media type for the data URL; sniffed from the file when omitted
        #[arg(long)]
        mime: Option<String>,
    },
    /// Print the drawing-surface arguments for a configuration
    Config {
        /// JSON file with canvas options; missing fields take their defaults
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Intensity ramp, one character per pixel
    Ascii,
    /// JSON object with the array and payload sizes
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Normalize {
            input,
            not_submitted,
            format,
            save,
        } => run_normalize(&input, !not_submitted, format, save.as_deref()),
        Command::Encode { image, mime } => {
            let bytes = read_input(&image)?;
            let mime = match mime {
                Some(m) => m,
                None => sniff_mime(&bytes)?,
            };
            println!("{}", encode_data_url(&mime, &bytes));
            Ok(())
        }
        Command::Config { file } => {
            let config = match file {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    serde_json::from_str::<CanvasConfig>(&text)
                        .with_context(|| format!("invalid canvas options in {}", path.display()))?
                }
                None => CanvasConfig::default(),
            };
            config.validate().map_err(anyhow::Error::msg)?;
            println!("{}", serde_json::to_string_pretty(&config.to_component_args())?);
            Ok(())
        }
    }
}

fn run_normalize(
    input: &Path,
    is_submitted: bool,
    format: OutputFormat,
    save: Option<&Path>,
) -> Result<()> {
    let bytes = read_input(input)?;
    let submission = submission_from_input(&bytes, is_submitted)?;
    let drawing = submission.normalize().map_err(|e| {
        let hint = e.recovery_suggestion();
        anyhow::Error::new(e).context(format!(
            "failed to normalize {} (hint: {hint})",
            input.display()
        ))
    })?;

    if let (Some(path), Some(image)) = (save, drawing.normalized_image.as_ref()) {
        image
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    match format {
        OutputFormat::Ascii => print!("{}", render_ascii(&drawing)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&render_json(&drawing))?)
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Accepts a bare data URL, a component value as JSON, or an encoded image.
fn submission_from_input(bytes: &[u8], is_submitted: bool) -> Result<DrawingSubmission> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        let text = text.trim();
        if text.starts_with("data:") {
            return Ok(DrawingSubmission::new(is_submitted, Some(text.to_string())));
        }
        if text.starts_with('{') || text == "null" {
            let value: serde_json::Value =
                serde_json::from_str(text).context("input looks like JSON but does not parse")?;
            return Ok(DrawingSubmission::from_component_value(Some(&value)));
        }
    }
    let mime = sniff_mime(bytes)?;
    Ok(DrawingSubmission::new(
        is_submitted,
        Some(encode_data_url(&mime, bytes)),
    ))
}

fn sniff_mime(bytes: &[u8]) -> Result<String> {
    let format = image::guess_format(bytes).map_err(|e| {
        anyhow!(
            "input is neither a data URL (missing `{BASE64_MARKER}`), JSON, \
             nor a known image format: {e}"
        )
    })?;
    Ok(format.to_mime_type().to_string())
}

const RAMP: &[u8] = b" .:-=+*#%@";

fn render_ascii(drawing: &NormalizedDrawing) -> String {
    let mut out = format!("submitted: {}\n", drawing.is_submitted);
    let Some(array) = drawing.normalized_array.as_ref() else {
        out.push_str("(no drawing)\n");
        return out;
    };
    for row in array.rows() {
        for &v in row {
            let idx = (v as usize * (RAMP.len() - 1) + 127) / 255;
            out.push(RAMP[idx] as char);
        }
        out.push('\n');
    }
    out
}

fn render_json(drawing: &NormalizedDrawing) -> serde_json::Value {
    let array = drawing.normalized_array.as_ref().map(|a| {
        a.rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect::<Vec<_>>()
    });
    serde_json::json!({
        "is_submitted": drawing.is_submitted,
        "raw_bytes_len": drawing.raw_bytes.as_ref().map(Vec::len),
        "raw_base64_len": drawing.raw_base64.as_ref().map(String::len),
        "array": array,
    })
}
