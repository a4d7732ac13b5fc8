//! Data URL splitting and base64 decoding.

use base64::{Engine as _, engine::general_purpose};

use crate::error::{CanvasError, CanvasResult};

/// Separator between the media-type prefix and the encoded body of a data URL.
pub const BASE64_MARKER: &str = ";base64,";

/// A data URL split into its parts and decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload<'a> {
    /// Everything before the marker, e.g. `data:image/png`. Not validated.
    pub prefix: &'a str,
    /// The base64 text exactly as received.
    pub base64: &'a str,
    pub bytes: Vec<u8>,
}

/// Split `data_url` at the first `;base64,` marker and decode the suffix with
/// the standard padded alphabet.
pub fn decode_data_url(data_url: &str) -> CanvasResult<DecodedPayload<'_>> {
    let (prefix, encoded) = data_url.split_once(BASE64_MARKER).ok_or_else(|| {
        CanvasError::malformed_payload(format!("payload has no `{BASE64_MARKER}` marker"))
    })?;

    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .map_err(CanvasError::invalid_base64)?;

    tracing::trace!(
        prefix,
        encoded_len = encoded.len(),
        decoded_len = bytes.len(),
        "decoded data url"
    );

    Ok(DecodedPayload {
        prefix,
        base64: encoded,
        bytes,
    })
}

/// Build a `data:<mime>;base64,<text>` URL for `bytes`.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{mime}{BASE64_MARKER}{}",
        general_purpose::STANDARD.encode(bytes)
    )
}
