use crate::logic::level::LevelConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Face symbols available to the deck builder. Levels draw a prefix of this
/// pool, so the largest board (6x6, 18 pairs) still has headroom.
pub const SYMBOL_POOL: [char; 24] = [
    '🐶', '🐱', '🐭', '🐹', '🐰', '🦊', '🐻', '🐼', '🐨', '🐯', '🦁', '🐮',
    '🐷', '🐸', '🐵', '🐔', '🐧', '🐦', '🐤', '🦆', '🦅', '🦉', '🦇', '🐺',
];

/// One tile on the board. Created when a round starts, discarded when the
/// board is rebuilt for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub symbol: char,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            flipped: false,
            matched: false,
        }
    }

    /// A card shows its identifying face while flipped and stays up once
    /// matched.
    #[must_use]
    pub const fn face_up(&self) -> bool {
        self.flipped || self.matched
    }
}

/// Builds the shuffled face-down deck for one round: the first
/// `config.total_pairs()` symbols of the pool, each appearing exactly twice.
///
/// Pure with respect to the rng, so callers can seed it for deterministic
/// boards.
pub fn build_deck<R: Rng>(config: LevelConfig, rng: &mut R) -> Vec<Card> {
    let mut cards: Vec<Card> = SYMBOL_POOL
        .iter()
        .take(config.total_pairs())
        .flat_map(|&symbol| [Card::new(symbol), Card::new(symbol)])
        .collect();
    cards.shuffle(rng);
    cards
}
