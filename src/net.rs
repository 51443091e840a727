//! Wire codec for replication events.
//!
//! The transport (out of scope here) is assumed to provide an ordered,
//! reliable, per-connection channel; this module only fixes the byte
//! encoding of the events that cross it. Encoding is deterministic: equal
//! events produce equal bytes.

use thiserror::Error;

use crate::table::messages::TableEvent;

/// Maximum encoded event size. A full 60-card hand snapshot is far below
/// this; anything larger indicates a corrupt or hostile frame.
pub const MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// Errors that can occur while encoding or decoding replication events.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// Failed to encode an event
    #[error("Failed to encode event: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Failed to decode an event
    #[error("Failed to decode event: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// Message size exceeded maximum allowed
    #[error("Message size {actual} exceeds maximum {max}")]
    MessageTooLarge { actual: usize, max: usize },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Encode a replication event for the wire.
pub fn encode_event(event: &TableEvent) -> Result<Vec<u8>> {
    let bytes = bincode::serde::encode_to_vec(event, bincode::config::standard())?;
    if bytes.len() > MAX_MESSAGE_SIZE {
        return Err(SerializationError::MessageTooLarge {
            actual: bytes.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }
    Ok(bytes)
}

/// Decode a replication event received from the wire.
pub fn decode_event(bytes: &[u8]) -> Result<TableEvent> {
    if bytes.len() > MAX_MESSAGE_SIZE {
        return Err(SerializationError::MessageTooLarge {
            actual: bytes.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }
    let (event, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    Ok(event)
}
