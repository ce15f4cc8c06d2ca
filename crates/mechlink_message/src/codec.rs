//! Document encodings.
//!
//! - Binary (bincode): the compatibility surface shared with the consumer.
//! - JSON (serde_json): a human-readable rendering for debugging.

use crate::SCHEMA_VERSION;
use crate::error::{MessageError, Result};
use crate::schema::Document;

impl Document {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a binary document, rejecting other schema versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let document: Document = bincode::deserialize(bytes)?;
        if document.schema_version != SCHEMA_VERSION {
            return Err(MessageError::SchemaMismatch {
                found: document.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(document)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
