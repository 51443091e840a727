//! Table actor message types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::{mpsc, oneshot};

use crate::game::{
    GameError,
    entities::{Card, ParticipantId},
    seating::SeatPosition,
};

/// Who a request arrived from, bound by the transport to the connection's
/// authenticated identity. A participant can never claim to be someone else
/// because the message shape carries no free-form identity field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Origin {
    /// The hosting process itself (session bootstrap, round control).
    Host,
    /// A connected participant.
    Participant(ParticipantId),
}

/// Messages that can be sent to a [`TableActor`](super::actor::TableActor).
#[derive(Debug)]
pub enum TableMessage {
    /// Seat a newly connected participant. Roster changes originate from the
    /// transport on the host side.
    Join {
        origin: Origin,
        id: ParticipantId,
        response: oneshot::Sender<TableResponse>,
    },

    /// Unseat a departing participant; their hand is discarded.
    Leave {
        origin: Origin,
        id: ParticipantId,
        response: oneshot::Sender<TableResponse>,
    },

    /// Rebuild and shuffle the deck for a new round.
    StartRound {
        origin: Origin,
        response: oneshot::Sender<TableResponse>,
    },

    /// Deal the configured number of cards to every seated participant.
    Deal {
        origin: Origin,
        response: oneshot::Sender<TableResponse>,
    },

    /// Play the card at `hand_index` from the requesting participant's own
    /// hand into the trick. The hand is identified by the origin, never by a
    /// payload field.
    PlayCard {
        origin: Origin,
        hand_index: usize,
        response: oneshot::Sender<TableResponse>,
    },

    /// Clear the trick pool between tricks.
    ClearTrick {
        origin: Origin,
        response: oneshot::Sender<TableResponse>,
    },

    /// Read a participant's hand snapshot.
    GetHand {
        id: ParticipantId,
        response: oneshot::Sender<Option<Vec<Card>>>,
    },

    /// Read the trick pool snapshot.
    GetTrick { response: oneshot::Sender<Vec<Card>> },

    /// Read the roster in ascending id order.
    GetRoster {
        response: oneshot::Sender<Vec<ParticipantId>>,
    },

    /// Compute the seat layout from `viewer`'s perspective. `None` when the
    /// viewer is not in the roster yet.
    GetSeats {
        viewer: ParticipantId,
        response: oneshot::Sender<Option<BTreeMap<ParticipantId, SeatPosition>>>,
    },

    /// Subscribe to replication events.
    Subscribe {
        id: ParticipantId,
        sender: mpsc::Sender<TableEvent>,
    },

    /// Unsubscribe from replication events.
    Unsubscribe { id: ParticipantId },

    /// Shut the table down.
    Close {
        response: oneshot::Sender<TableResponse>,
    },
}

/// Response to a table request.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TableResponse {
    /// The request committed.
    Success,
    /// The request was rejected; no state changed.
    Rejected(GameError),
}

impl TableResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, TableResponse::Success)
    }

    pub fn rejection(&self) -> Option<&GameError> {
        match self {
            TableResponse::Success => None,
            TableResponse::Rejected(err) => Some(err),
        }
    }
}

/// Replication event published to every subscriber after a committed
/// mutation, in commit order. Events carry the full resulting snapshot, never
/// a diff: observers rebuild their view from scratch on every event.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TableEvent {
    /// A hand changed (deal or play). One event per mutated hand.
    HandChanged {
        participant: ParticipantId,
        cards: Vec<Card>,
    },

    /// The trick pool changed (play or clear).
    TrickChanged { cards: Vec<Card> },

    /// The roster changed (join or leave). Viewers recompute their seat
    /// layout when they observe this.
    RosterChanged { roster: Vec<ParticipantId> },
}
