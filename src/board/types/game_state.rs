//! Game-state classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Outcome recorded by the last move-generation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    #[default]
    Ongoing,
    WhiteWins,
    BlackWins,
    /// Stalemate or insufficient material
    Draw,
}

impl GameState {
    /// The state when `color` is checkmated
    #[must_use]
    pub const fn checkmated(color: Color) -> Self {
        match color {
            Color::White => GameState::BlackWins,
            Color::Black => GameState::WhiteWins,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::Ongoing)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::WhiteWins => Some(Color::White),
            GameState::BlackWins => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Ongoing => write!(f, "ongoing"),
            GameState::WhiteWins => write!(f, "white wins"),
            GameState::BlackWins => write!(f, "black wins"),
            GameState::Draw => write!(f, "draw"),
        }
    }
}
