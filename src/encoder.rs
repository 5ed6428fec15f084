//! Call data encoding
//!
//! Turns a proof document into the hex blob an extrinsic expects: every
//! numeral becomes a 256-bit zero-padded hex word, proof words first,
//! input words after, each sequence in document order.

use std::io::Write;
use std::path::Path;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Num};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::types::ProofDocument;

/// Width of one encoded word in hex characters (256 bits).
pub const HEX_WORD_LEN: usize = 64;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Error decoding JSON: {0}")]
    MalformedJson(String),
    #[error("Missing key in JSON data: {0}")]
    MissingField(String),
    #[error("An error occurred during conversion: {0}")]
    InvalidNumeral(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Read a proof document from `path` and encode it as one hex blob.
pub fn convert_file(path: &Path) -> Result<String, FormatError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FormatError::FileNotFound(path.display().to_string()),
        _ => FormatError::Unexpected(e.to_string()),
    })?;

    let document = ProofDocument::from_json(&raw)?;
    encode(&document)
}

/// Encode an already-parsed document: proof words first, then input
/// words.
pub fn encode(document: &ProofDocument) -> Result<String, FormatError> {
    if !document.source.is_empty() {
        debug!(source = %document.source, "Proof provenance note");
    }

    let mut blob =
        String::with_capacity((document.proof.len() + document.inputs.len()) * HEX_WORD_LEN);
    for element in document.proof.iter().chain(document.inputs.iter()) {
        blob.push_str(&hex_word(&numeral(element)?));
    }

    debug!(
        proof_elements = document.proof.len(),
        input_elements = document.inputs.len(),
        blob_len = blob.len(),
        "Encoded call data blob"
    );

    Ok(blob)
}

/// Coerce one JSON element to an integer.
///
/// Strings parse as optionally signed base-10 of arbitrary size;
/// integral numbers are taken as-is. Everything else is rejected.
pub fn numeral(element: &Value) -> Result<BigInt, FormatError> {
    match element {
        Value::String(s) => BigInt::from_str_radix(s.trim(), 10)
            .map_err(|_| FormatError::InvalidNumeral(s.clone())),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(BigInt::from(u))
            } else if let Some(i) = n.as_i64() {
                Ok(BigInt::from(i))
            } else {
                // a float still counts if its fractional part is zero
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .and_then(BigInt::from_f64)
                    .ok_or_else(|| FormatError::InvalidNumeral(n.to_string()))
            }
        }
        other => Err(FormatError::InvalidNumeral(other.to_string())),
    }
}

/// Render an integer as one hex word: lowercase digits, left-padded
/// with zeros to `HEX_WORD_LEN` characters.
///
/// Values wider than 256 bits pass through at their natural length,
/// untruncated. Negative values keep the sign ahead of the padding.
pub fn hex_word(value: &BigInt) -> String {
    let hex = value.to_str_radix(16);
    if hex.len() >= HEX_WORD_LEN {
        return hex;
    }
    match hex.strip_prefix('-') {
        Some(digits) => format!("-{:0>width$}", digits, width = HEX_WORD_LEN - 1),
        None => format!("{:0>width$}", hex, width = HEX_WORD_LEN),
    }
}

/// Write the blob as fixed-width lines. The final line may be shorter;
/// an empty blob writes nothing.
pub fn emit<W: Write>(blob: &str, line_width: usize, out: &mut W) -> std::io::Result<()> {
    // hex words are ASCII, chunking bytes never splits a character
    for chunk in blob.as_bytes().chunks(line_width.max(1)) {
        out.write_all(chunk)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
