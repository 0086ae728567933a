use serde::{Deserialize, Serialize};

/// Fixed (rows, columns, time limit) tuple for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub rows: usize,
    pub cols: usize,
    /// Round time limit in seconds.
    pub time_limit: u32,
}

impl LevelConfig {
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub const fn total_pairs(&self) -> usize {
        self.card_count() / 2
    }
}

/// The five difficulty tiers. `Level5` is terminal; there is no level 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl Level {
    pub const FIRST: Self = Self::Level1;

    #[must_use]
    pub const fn config(self) -> LevelConfig {
        match self {
            Self::Level1 => LevelConfig {
                rows: 3,
                cols: 4,
                time_limit: 60,
            },
            Self::Level2 => LevelConfig {
                rows: 4,
                cols: 4,
                time_limit: 80,
            },
            Self::Level3 => LevelConfig {
                rows: 4,
                cols: 5,
                time_limit: 100,
            },
            Self::Level4 => LevelConfig {
                rows: 5,
                cols: 6,
                time_limit: 150,
            },
            Self::Level5 => LevelConfig {
                rows: 6,
                cols: 6,
                time_limit: 180,
            },
        }
    }

    /// The next tier, or `None` at the terminal level.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Level1 => Some(Self::Level2),
            Self::Level2 => Some(Self::Level3),
            Self::Level3 => Some(Self::Level4),
            Self::Level4 => Some(Self::Level5),
            Self::Level5 => None,
        }
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// 1-based display number.
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
            Self::Level4 => 4,
            Self::Level5 => 5,
        }
    }

    #[must_use]
    pub fn all() -> [Self; 5] {
        [
            Self::Level1,
            Self::Level2,
            Self::Level3,
            Self::Level4,
            Self::Level5,
        ]
    }
}
