//! # Wizard Table
//!
//! The authoritative state core of a networked Wizard-style trick-taking
//! table: deck construction and shuffling, per-participant hands, the shared
//! trick pool, dealing, play validation, and per-viewer seat layout.
//!
//! ## Architecture
//!
//! One host process holds the only mutable copy of all state. Every viewer
//! (including the host's own view) works from read-only snapshots replicated
//! to it after each committed mutation.
//!
//! - [`game`]: the synchronous single-writer core — [`game::GameState`] plus
//!   the card entities and the seat layout resolver. Fully testable without
//!   a runtime.
//! - [`table`]: the tokio actor that owns one `GameState`, serializes all
//!   mutation requests into a single commit order, enforces host authority,
//!   and fans replication events out to subscribers.
//! - [`net`]: the deterministic wire codec for replication events. Transport
//!   itself (connections, framing, identity) is provided externally.
//!
//! ## Example
//!
//! ```
//! use wizard_table::game::GameState;
//! use wizard_table::game::entities::ParticipantId;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut state = GameState::new();
//! state.join(ParticipantId(0)).unwrap();
//! state.join(ParticipantId(1)).unwrap();
//! state.start_round(&mut StdRng::seed_from_u64(0));
//! state.deal_round(5).unwrap();
//!
//! // Participant 0 plays their third card into the trick.
//! let played = state.play_card(ParticipantId(0), 2).unwrap();
//! assert_eq!(played.trick, vec![played.card]);
//! ```

/// Core game logic: entities, authoritative state, seat layout.
pub mod game;
pub use game::{
    GameError, GameState,
    constants::{self, DECK_SIZE, DEFAULT_CARDS_PER_DEAL},
    entities::{Card, CardColor, CardRank, Deck, Hand, ParticipantId, TablePool},
    seating::{SeatPosition, TableGeometry, compute_seats},
};

/// Wire codec for replication events.
pub mod net;

/// Table actor: authority and replication.
pub mod table;
pub use table::{Origin, TableActor, TableConfig, TableEvent, TableHandle, TableMessage, TableResponse};
