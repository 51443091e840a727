//! Authoritative game core: entities, the single-writer state, and the seat
//! layout resolver.
//!
//! Nothing in this module is async or transport-aware. The table actor in
//! [`crate::table`] owns one [`GameState`] and serializes every mutation
//! through it; these types are what make that actor testable without a
//! runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod constants;
pub mod entities;
pub mod seating;
pub mod state;

pub use entities::{Card, CardColor, CardRank, Deck, DrawEnd, Hand, ParticipantId, TablePool};
pub use seating::{SeatPosition, TableGeometry, compute_seats};
pub use state::{GameState, PlayedCard};

/// Errors raised by state mutations. All of these are recovered locally: the
/// offending request is rejected and logged, and no error is ever fatal to
/// the host.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("card index {index} out of range for hand of {len}")]
    InvalidIndex { index: usize, len: usize },
    #[error("mutation requires table authority")]
    NotAuthority,
    #[error("no participants to deal to")]
    EmptyRoster,
    #[error("unknown participant {0}")]
    UnknownParticipant(ParticipantId),
    #[error("participant {0} already seated")]
    AlreadySeated(ParticipantId),
    #[error("table is full")]
    TableFull,
}
