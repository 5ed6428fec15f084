//! Proof document model
//!
//! The on-disk JSON shape produced by proving toolchains: two ordered
//! sequences of numeral values plus an optional provenance note.

use serde_json::Value;

use crate::encoder::FormatError;

/// A parsed proof document.
///
/// `proof` and `inputs` keep their JSON element order; the encoder
/// relies on it when assembling the call data blob.
#[derive(Debug, Clone)]
pub struct ProofDocument {
    /// Free-text note on where the proof came from (empty if absent)
    pub source: String,
    /// Proof scalar components, in submission order
    pub proof: Vec<Value>,
    /// Public inputs, in submission order
    pub inputs: Vec<Value>,
}

impl ProofDocument {
    /// Parse a proof document from raw JSON text.
    ///
    /// The two numeral sequences are probed by key so an absent key is
    /// reported as `MissingField` rather than a generic decode failure.
    pub fn from_json(raw: &str) -> Result<Self, FormatError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| FormatError::MalformedJson(e.to_string()))?;

        let source = value
            .get("source")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let proof = Self::numeral_array(&value, "proof")?;
        let inputs = Self::numeral_array(&value, "inputs")?;

        Ok(Self {
            source,
            proof,
            inputs,
        })
    }

    fn numeral_array(value: &Value, key: &str) -> Result<Vec<Value>, FormatError> {
        let field = value
            .get(key)
            .ok_or_else(|| FormatError::MissingField(key.to_string()))?;
        field
            .as_array()
            .cloned()
            .ok_or_else(|| FormatError::MalformedJson(format!("key `{key}` is not an array")))
    }
}
