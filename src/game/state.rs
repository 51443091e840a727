//! The host-authoritative table state.
//!
//! [`GameState`] is the single writer for the deck, every hand, and the trick
//! pool. The roster is an explicit registry keyed by participant id and
//! updated transactionally on join/leave; the dealer and the play gateway
//! query it directly, so there is no secondary cache of hands that could go
//! stale.
//!
//! Mutating methods commit fully before returning and hand back owned
//! snapshots of everything they changed. Callers notify observers from those
//! snapshots, which is what guarantees observers never see a torn
//! intermediate state (e.g. a played card in neither the hand nor the trick).

use log::{debug, info, warn};
use rand::Rng;
use std::collections::BTreeMap;

use super::GameError;
use super::entities::{Card, Deck, DrawEnd, Hand, ParticipantId, TablePool};

/// Result of a committed play action: the card that moved plus post-commit
/// snapshots of both containers it moved between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayedCard {
    pub card: Card,
    pub hand: Vec<Card>,
    pub trick: Vec<Card>,
}

/// Authoritative state of one table. Owned by exactly one task; everything
/// viewers see is a snapshot replicated out after a commit.
#[derive(Debug, Default)]
pub struct GameState {
    /// Roster registry: hand per seated participant, ordered by id. The key
    /// order is the roster order all viewers agree on.
    roster: BTreeMap<ParticipantId, Hand>,
    deck: Deck,
    table: TablePool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats a new participant with an empty hand.
    pub fn join(&mut self, id: ParticipantId) -> Result<(), GameError> {
        if self.roster.contains_key(&id) {
            return Err(GameError::AlreadySeated(id));
        }
        self.roster.insert(id, Hand::new());
        info!("{id} joined, roster size {}", self.roster.len());
        Ok(())
    }

    /// Removes a participant; their hand is discarded with them.
    pub fn leave(&mut self, id: ParticipantId) -> Result<(), GameError> {
        if self.roster.remove(&id).is_none() {
            return Err(GameError::UnknownParticipant(id));
        }
        info!("{id} left, roster size {}", self.roster.len());
        Ok(())
    }

    /// Rebuilds the deck and shuffles it. Whatever remained of the previous
    /// round's deck is discarded.
    pub fn start_round<R: Rng>(&mut self, rng: &mut R) {
        let mut deck = Deck::build();
        deck.shuffle(rng);
        self.deck = deck;
        info!("round started, deck shuffled ({} cards)", self.deck.len());
    }

    /// Deals `per_hand` cards to every seated participant in roster order,
    /// drawing from the front of the deck. If the deck runs out mid-deal the
    /// deal stops short and the shortfall is logged; everything already dealt
    /// stands.
    ///
    /// Returns one post-deal hand snapshot per participant so the caller can
    /// publish a single notification per mutated hand.
    pub fn deal_round(
        &mut self,
        per_hand: usize,
    ) -> Result<Vec<(ParticipantId, Vec<Card>)>, GameError> {
        if self.roster.is_empty() {
            return Err(GameError::EmptyRoster);
        }

        let mut dealt = Vec::with_capacity(self.roster.len());
        let mut exhausted = false;
        for (id, hand) in &mut self.roster {
            for _ in 0..per_hand {
                match self.deck.draw_from(DrawEnd::Front) {
                    Some(card) => hand.push(card),
                    None => {
                        exhausted = true;
                        break;
                    }
                }
            }
            dealt.push((*id, hand.snapshot()));
        }

        if exhausted {
            warn!(
                "deck exhausted while dealing {per_hand} cards to {} participants",
                dealt.len()
            );
        } else {
            debug!(
                "dealt {per_hand} cards to {} participants, {} left in deck",
                dealt.len(),
                self.deck.len()
            );
        }
        Ok(dealt)
    }

    /// The play-action gateway: moves the card at `index` from `id`'s hand to
    /// the trick pool. Validation and both mutations happen here as one
    /// indivisible step; the index is checked against the hand's current
    /// length, never trusted from a stale replica.
    pub fn play_card(&mut self, id: ParticipantId, index: usize) -> Result<PlayedCard, GameError> {
        let hand = self
            .roster
            .get_mut(&id)
            .ok_or(GameError::UnknownParticipant(id))?;
        let card = hand.remove_at(index)?;
        let hand = hand.snapshot();
        self.table.add(card);
        debug!("{id} played {card} into the trick");
        Ok(PlayedCard {
            card,
            hand,
            trick: self.table.snapshot(),
        })
    }

    /// Empties the trick pool between tricks.
    pub fn clear_trick(&mut self) {
        self.table.clear();
        debug!("trick cleared");
    }

    /// Roster ids in ascending order.
    pub fn roster(&self) -> Vec<ParticipantId> {
        self.roster.keys().copied().collect()
    }

    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    pub fn hand(&self, id: ParticipantId) -> Option<&Hand> {
        self.roster.get(&id)
    }

    pub fn trick_cards(&self) -> &[Card] {
        self.table.cards()
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }
}
