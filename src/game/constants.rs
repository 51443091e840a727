//! Deck composition and default table sizing.

/// Total cards in a freshly built deck: 4 colors x 13 ranks + 4 Wizards
/// + 4 Jesters.
pub const DECK_SIZE: usize = 60;

/// Number of Wizard cards in the deck.
pub const WIZARD_COUNT: usize = 4;

/// Number of Jester cards in the deck.
pub const JESTER_COUNT: usize = 4;

/// Numbered ranks per color.
pub const RANKS_PER_COLOR: usize = 13;

/// Cards dealt to each participant per round unless configured otherwise.
pub const DEFAULT_CARDS_PER_DEAL: usize = 5;

/// Default seat capacity of a table.
pub const DEFAULT_MAX_PARTICIPANTS: usize = 6;
