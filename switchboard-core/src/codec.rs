//! Wire codec for the signaling protocol.
//!
//! Inbound frames are validated against the closed [`SignalMessage`] set. Anything
//! that does not match (bad UTF-8, bad JSON, a non-object, an unknown `type`, a
//! missing or mistyped field) is reported as `None` so the caller can drop it
//! without replying.

use crate::model::{ServerMessage, SignalMessage};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode {kind} message: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode one inbound frame. Text frames are passed as their UTF-8 bytes.
pub fn parse_signal(raw: &[u8]) -> Option<SignalMessage> {
    let value: Value = serde_json::from_slice(raw).ok()?;

    // Internally tagged enums would also accept `["offer", "..."]`; only objects are valid frames.
    if !value.is_object() {
        return None;
    }

    serde_json::from_value(value).ok()
}

/// Encode an outbound message as a JSON text frame payload.
pub fn encode(message: &ServerMessage) -> Result<String, CodecError> {
    serde_json::to_string(message).map_err(|source| CodecError::Encode {
        kind: message.kind(),
        source,
    })
}
