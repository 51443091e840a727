//! Table configuration.

use serde::{Deserialize, Serialize};

use crate::game::constants::{DECK_SIZE, DEFAULT_CARDS_PER_DEAL, DEFAULT_MAX_PARTICIPANTS};
use crate::game::seating::TableGeometry;

/// Configuration for one table.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TableConfig {
    /// Table name, used in logs.
    pub name: String,

    /// Seat capacity.
    pub max_participants: usize,

    /// Cards dealt to each participant per round.
    pub cards_per_deal: usize,

    /// Ellipse the seat layout is projected onto.
    pub geometry: TableGeometry,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: "Wizard Table".to_string(),
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            cards_per_deal: DEFAULT_CARDS_PER_DEAL,
            geometry: TableGeometry::default(),
        }
    }
}

impl TableConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_participants == 0 {
            return Err("Max participants must be at least 1".to_string());
        }

        if self.cards_per_deal == 0 {
            return Err("Cards per deal must be at least 1".to_string());
        }

        if self.max_participants * self.cards_per_deal > DECK_SIZE {
            return Err(format!(
                "A full table would need {} cards but the deck has {}",
                self.max_participants * self.cards_per_deal,
                DECK_SIZE
            ));
        }

        if self.geometry.radius_x <= 0.0 || self.geometry.radius_y <= 0.0 {
            return Err("Table radii must be positive".to_string());
        }

        Ok(())
    }

    /// Load a configuration from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}
