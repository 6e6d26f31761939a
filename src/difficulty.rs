//! Game difficulty settings.

use std::str::FromStr;

/// Session difficulty, chosen once at the start of a game.
///
/// Easy mode disables item breakage on terrain crossings and starts the
/// hunter with a larger purse. It is passed explicitly to everything that
/// consults it; there is no global mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Normal,
    Easy,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Normal => "Normal",
            Difficulty::Easy => "Easy",
        }
    }

    /// Gold the hunter starts the game with.
    pub fn starting_gold(&self) -> i32 {
        match self {
            Difficulty::Normal => 10,
            Difficulty::Easy => 20,
        }
    }

    /// Whether a used crossing item can break.
    pub fn items_break(&self) -> bool {
        matches!(self, Difficulty::Normal)
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "normal" => Ok(Difficulty::Normal),
            "e" | "easy" => Ok(Difficulty::Easy),
            _ => Err(()),
        }
    }
}
