//! Table actor: the single authority over one table's state.
//!
//! All mutation requests funnel through one mpsc inbox and are applied one at
//! a time by the actor task, which is what turns concurrent submissions from
//! many connections into a single total commit order. Every committed
//! mutation is followed by exactly one replication event per affected
//! container, published to all subscribers in commit order.

use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};
use tokio::sync::mpsc;

use super::{
    config::TableConfig,
    messages::{Origin, TableEvent, TableMessage, TableResponse},
};
use crate::game::{GameError, GameState, compute_seats, entities::ParticipantId};

/// Capacity of the actor inbox and of each subscriber channel.
const CHANNEL_CAPACITY: usize = 100;

/// Handle for sending messages to a table.
#[derive(Clone)]
pub struct TableHandle {
    sender: mpsc::Sender<TableMessage>,
}

impl TableHandle {
    pub fn new(sender: mpsc::Sender<TableMessage>) -> Self {
        Self { sender }
    }

    /// Send a message to the table.
    pub async fn send(&self, message: TableMessage) -> Result<(), String> {
        self.sender
            .send(message)
            .await
            .map_err(|_| "Table is closed".to_string())
    }
}

/// Actor owning the authoritative state of a single table.
pub struct TableActor {
    config: TableConfig,

    /// The single-writer game state.
    state: GameState,

    /// Shuffle randomness. Injectable for reproducible rounds in tests.
    rng: StdRng,

    /// Message inbox.
    inbox: mpsc::Receiver<TableMessage>,

    /// Replication subscribers, keyed by participant id.
    subscribers: HashMap<ParticipantId, mpsc::Sender<TableEvent>>,

    is_closed: bool,
}

impl TableActor {
    /// Create a new table actor and the handle for talking to it.
    pub fn new(config: TableConfig) -> (Self, TableHandle) {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a table actor with an explicit shuffle rng. Seeded rngs make
    /// dealt hands reproducible.
    pub fn with_rng(config: TableConfig, rng: StdRng) -> (Self, TableHandle) {
        let (sender, inbox) = mpsc::channel(CHANNEL_CAPACITY);
        let actor = Self {
            config,
            state: GameState::new(),
            rng,
            inbox,
            subscribers: HashMap::new(),
            is_closed: false,
        };
        (actor, TableHandle::new(sender))
    }

    /// Run the table actor event loop until closed or all handles drop.
    pub async fn run(mut self) {
        log::info!("table '{}' starting", self.config.name);

        while let Some(message) = self.inbox.recv().await {
            self.handle_message(message);
            if self.is_closed {
                break;
            }
        }

        log::info!("table '{}' closed", self.config.name);
    }

    fn handle_message(&mut self, message: TableMessage) {
        match message {
            TableMessage::Join {
                origin,
                id,
                response,
            } => {
                let result = self.handle_join(origin, id);
                let _ = response.send(result);
            }

            TableMessage::Leave {
                origin,
                id,
                response,
            } => {
                let result = self.handle_leave(origin, id);
                let _ = response.send(result);
            }

            TableMessage::StartRound { origin, response } => {
                let result = self.handle_start_round(origin);
                let _ = response.send(result);
            }

            TableMessage::Deal { origin, response } => {
                let result = self.handle_deal(origin);
                let _ = response.send(result);
            }

            TableMessage::PlayCard {
                origin,
                hand_index,
                response,
            } => {
                let result = self.handle_play_card(origin, hand_index);
                let _ = response.send(result);
            }

            TableMessage::ClearTrick { origin, response } => {
                let result = self.handle_clear_trick(origin);
                let _ = response.send(result);
            }

            TableMessage::GetHand { id, response } => {
                let snapshot = self.state.hand(id).map(|hand| hand.snapshot());
                let _ = response.send(snapshot);
            }

            TableMessage::GetTrick { response } => {
                let _ = response.send(self.state.trick_cards().to_vec());
            }

            TableMessage::GetRoster { response } => {
                let _ = response.send(self.state.roster());
            }

            TableMessage::GetSeats { viewer, response } => {
                let seats = compute_seats(&self.state.roster(), viewer, &self.config.geometry);
                let _ = response.send(seats);
            }

            TableMessage::Subscribe { id, sender } => {
                self.subscribers.insert(id, sender);
                log::debug!("{id} subscribed to table '{}'", self.config.name);
            }

            TableMessage::Unsubscribe { id } => {
                self.subscribers.remove(&id);
                log::debug!("{id} unsubscribed from table '{}'", self.config.name);
            }

            TableMessage::Close { response } => {
                self.is_closed = true;
                let _ = response.send(TableResponse::Success);
            }
        }
    }

    /// Reject a privileged request that did not come from the host. With a
    /// correct transport binding this never fires; it is a protocol-violation
    /// backstop.
    fn require_host(&self, origin: Origin, operation: &str) -> Result<(), GameError> {
        match origin {
            Origin::Host => Ok(()),
            Origin::Participant(id) => {
                log::warn!("protocol violation: {id} attempted host-only '{operation}'");
                Err(GameError::NotAuthority)
            }
        }
    }

    fn handle_join(&mut self, origin: Origin, id: ParticipantId) -> TableResponse {
        if let Err(err) = self.require_host(origin, "join") {
            return TableResponse::Rejected(err);
        }
        if self.state.roster_len() >= self.config.max_participants {
            return TableResponse::Rejected(GameError::TableFull);
        }
        match self.state.join(id) {
            Ok(()) => {
                self.notify(TableEvent::RosterChanged {
                    roster: self.state.roster(),
                });
                TableResponse::Success
            }
            Err(err) => TableResponse::Rejected(err),
        }
    }

    fn handle_leave(&mut self, origin: Origin, id: ParticipantId) -> TableResponse {
        if let Err(err) = self.require_host(origin, "leave") {
            return TableResponse::Rejected(err);
        }
        match self.state.leave(id) {
            Ok(()) => {
                self.subscribers.remove(&id);
                self.notify(TableEvent::RosterChanged {
                    roster: self.state.roster(),
                });
                TableResponse::Success
            }
            Err(err) => TableResponse::Rejected(err),
        }
    }

    fn handle_start_round(&mut self, origin: Origin) -> TableResponse {
        if let Err(err) = self.require_host(origin, "start round") {
            return TableResponse::Rejected(err);
        }
        self.state.start_round(&mut self.rng);
        TableResponse::Success
    }

    fn handle_deal(&mut self, origin: Origin) -> TableResponse {
        if let Err(err) = self.require_host(origin, "deal") {
            return TableResponse::Rejected(err);
        }
        match self.state.deal_round(self.config.cards_per_deal) {
            Ok(dealt) => {
                // One batched event per mutated hand, in roster order.
                for (participant, cards) in dealt {
                    self.notify(TableEvent::HandChanged { participant, cards });
                }
                TableResponse::Success
            }
            Err(err) => {
                log::warn!("deal rejected: {err}");
                TableResponse::Rejected(err)
            }
        }
    }

    fn handle_play_card(&mut self, origin: Origin, hand_index: usize) -> TableResponse {
        // A play is always made from the requester's own hand; the host has
        // no hand to play from.
        let id = match origin {
            Origin::Participant(id) => id,
            Origin::Host => {
                log::warn!("protocol violation: host attempted to play a card");
                return TableResponse::Rejected(GameError::NotAuthority);
            }
        };
        match self.state.play_card(id, hand_index) {
            Ok(played) => {
                // Both mutations are committed; observers see the card in
                // exactly one container no matter when they look.
                self.notify(TableEvent::HandChanged {
                    participant: id,
                    cards: played.hand,
                });
                self.notify(TableEvent::TrickChanged { cards: played.trick });
                TableResponse::Success
            }
            Err(err) => {
                log::warn!("play by {id} rejected: {err}");
                TableResponse::Rejected(err)
            }
        }
    }

    fn handle_clear_trick(&mut self, origin: Origin) -> TableResponse {
        if let Err(err) = self.require_host(origin, "clear trick") {
            return TableResponse::Rejected(err);
        }
        self.state.clear_trick();
        self.notify(TableEvent::TrickChanged { cards: Vec::new() });
        TableResponse::Success
    }

    /// Publish a replication event to all subscribers. Disconnected
    /// subscribers are dropped; a full channel means the subscriber is too
    /// slow and loses this event (logged).
    fn notify(&mut self, event: TableEvent) {
        self.subscribers
            .retain(|id, sender| match sender.try_send(event.clone()) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    log::warn!("subscriber {id} channel full, dropping event");
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    log::debug!("subscriber {id} disconnected, removing");
                    false
                }
            });
    }
}
