use crate::logic::board::{build_deck, Card};
use crate::logic::level::Level;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Playing,
    Won,
    TimeUp,
}

/// What activating the control button does next. The view layer maps this to
/// a label; control flow never compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundAction {
    Restart,
    NextLevel,
    TryAgain,
    /// Terminal state after winning the last level; the control is disabled.
    Finished,
}

/// Why a tile click was ignored. The client drops these silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipError {
    RoundOver,
    BoardLocked,
    OutOfBounds,
    AlreadyMatched,
    AlreadyFlipped,
}

/// Result of an accepted flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of an attempt turned face up.
    First,
    /// Second card matched the first; both stay up for good.
    Matched { round_won: bool },
    /// Second card did not match. The board is locked until
    /// [`GameState::resolve_mismatch`] runs.
    Mismatch,
}

/// The single mutable round context: board, flip bookkeeping, countdown and
/// level progression. Owned by the game controller; the flip and timer paths
/// borrow it rather than sharing globals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub level: Level,
    pub cards: Vec<Card>,
    pub matched_pairs: usize,
    pub first: Option<usize>,
    pub second: Option<usize>,
    pub locked: bool,
    pub time_left: u32,
    pub status: RoundStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game at level 1 with a shuffled board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Construction for callers that seed their own rng.
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut state = Self {
            level: Level::FIRST,
            cards: Vec::new(),
            matched_pairs: 0,
            first: None,
            second: None,
            locked: false,
            time_left: 0,
            status: RoundStatus::Playing,
        };
        state.start_round(rng);
        state
    }

    /// Rebuilds the board for the current level with a freshly shuffled deck
    /// and resets all round bookkeeping.
    pub fn start_round<R: Rng>(&mut self, rng: &mut R) {
        let config = self.level.config();
        self.cards = build_deck(config, rng);
        self.matched_pairs = 0;
        self.first = None;
        self.second = None;
        self.locked = false;
        self.time_left = config.time_limit;
        self.status = RoundStatus::Playing;
        log::debug!(
            "round started: level {} ({}x{}, {}s)",
            self.level.number(),
            config.rows,
            config.cols,
            config.time_limit
        );
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Reveals the card at `index`.
    ///
    /// At most two cards are ever flipped-and-unresolved: the first flip is
    /// remembered, the second resolves immediately into a match or locks the
    /// board for a mismatch revert.
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, FlipError> {
        if self.status != RoundStatus::Playing {
            return Err(FlipError::RoundOver);
        }
        if self.locked {
            return Err(FlipError::BoardLocked);
        }
        let card = *self.cards.get(index).ok_or(FlipError::OutOfBounds)?;
        if card.matched {
            return Err(FlipError::AlreadyMatched);
        }
        if card.flipped {
            // Covers re-clicking the currently revealed first card.
            return Err(FlipError::AlreadyFlipped);
        }

        if let Some(revealed) = self.cards.get_mut(index) {
            revealed.flipped = true;
        }

        let Some(first) = self.first else {
            self.first = Some(index);
            return Ok(FlipOutcome::First);
        };

        self.second = Some(index);
        if self.cards.get(first).map(|c| c.symbol) == Some(card.symbol) {
            self.retain_match(first, index);
            let round_won = self.matched_pairs == self.total_pairs();
            if round_won {
                self.status = RoundStatus::Won;
                log::info!("round won: level {}", self.level.number());
            }
            Ok(FlipOutcome::Matched { round_won })
        } else {
            self.locked = true;
            Ok(FlipOutcome::Mismatch)
        }
    }

    fn retain_match(&mut self, a: usize, b: usize) {
        for index in [a, b] {
            if let Some(card) = self.cards.get_mut(index) {
                card.matched = true;
            }
        }
        self.matched_pairs += 1;
        self.first = None;
        self.second = None;
    }

    /// Turns a mismatched pair face down again after the reveal delay.
    ///
    /// The lock is released only while the round is still in play: a timeout
    /// that fired during the delay keeps the board dead.
    pub fn resolve_mismatch(&mut self) {
        if let (Some(a), Some(b)) = (self.first, self.second) {
            for index in [a, b] {
                if let Some(card) = self.cards.get_mut(index) {
                    card.flipped = false;
                }
            }
        }
        self.first = None;
        self.second = None;
        if self.status == RoundStatus::Playing {
            self.locked = false;
        }
    }

    /// One countdown step. On reaching zero the round is lost and the board
    /// locks. Ticking a finished round changes nothing.
    pub fn tick(&mut self) {
        if self.status != RoundStatus::Playing {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.status = RoundStatus::TimeUp;
            self.locked = true;
            log::info!("time over: level {}", self.level.number());
        }
    }

    /// The pending intent of the control button.
    #[must_use]
    pub fn action(&self) -> RoundAction {
        match self.status {
            RoundStatus::Playing => RoundAction::Restart,
            RoundStatus::TimeUp => RoundAction::TryAgain,
            RoundStatus::Won => {
                if self.level.is_last() {
                    RoundAction::Finished
                } else {
                    RoundAction::NextLevel
                }
            }
        }
    }

    /// Applies the pending action: advance the level after a win, otherwise
    /// replay the current one. A finished game stays finished.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        match self.action() {
            RoundAction::Finished => {}
            RoundAction::NextLevel => {
                if let Some(next) = self.level.next() {
                    self.level = next;
                }
                self.start_round(rng);
            }
            RoundAction::Restart | RoundAction::TryAgain => self.start_round(rng),
        }
    }
}

/// Renders seconds as `MM:SS` for the countdown display.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
