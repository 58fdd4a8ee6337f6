use std::{fmt, str::FromStr};

use crate::constants::MAX_SCREEN_WIDTH;
use crate::error::{ConfigError, Result};

/// Size of the safe zone when the first click lands away from every edge
const FULL_SAFE_ZONE: usize = 9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub const fn profile(self) -> Profile {
        match self {
            Difficulty::Beginner => Profile::new(9, 9, 10, 40),
            Difficulty::Intermediate => Profile::new(16, 16, 40, 30),
            Difficulty::Expert => Profile::new(30, 16, 99, 30),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_owned()))
    }
}

/// Board dimensions, mine count and cell size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    cell_size: u32,
}

impl Profile {
    pub const fn new(width: usize, height: usize, mines: usize, cell_size: u32) -> Self {
        Profile {
            width,
            height,
            mines,
            cell_size,
        }
    }

    pub const fn total_cells(&self) -> usize {
        self.width * self.height
    }

    /// Cell size shrunk so the board never gets wider than [`MAX_SCREEN_WIDTH`]
    pub fn cell_size(&self) -> u32 {
        if self.width as u32 * self.cell_size > MAX_SCREEN_WIDTH {
            MAX_SCREEN_WIDTH / self.width as u32
        } else {
            self.cell_size
        }
    }

    /// Rejects profiles where the mines could not be placed around a first click
    /// that gets a full 3x3 safe zone.
    pub fn validate(&self) -> Result<()> {
        let usable = self.total_cells().saturating_sub(FULL_SAFE_ZONE);
        if self.mines > usable {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                usable,
            });
        }
        Ok(())
    }
}
