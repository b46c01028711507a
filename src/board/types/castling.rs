//! Castling state and the four fixed castle transitions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const WHITE_KING_MOVED: u8 = 1 << 0;
pub(crate) const BLACK_KING_MOVED: u8 = 1 << 1;
pub(crate) const A1_ROOK_MOVED: u8 = 1 << 2;
pub(crate) const H1_ROOK_MOVED: u8 = 1 << 3;
pub(crate) const A8_ROOK_MOVED: u8 = 1 << 4;
pub(crate) const H8_ROOK_MOVED: u8 = 1 << 5;

/// Every king and rook has moved
pub(crate) const ALL_MOVED: u8 = WHITE_KING_MOVED
    | BLACK_KING_MOVED
    | A1_ROOK_MOVED
    | H1_ROOK_MOVED
    | A8_ROOK_MOVED
    | H8_ROOK_MOVED;

/// One of the four castle transitions. The king and rook squares are rule
/// constants, never inferred from the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleRule {
    pub color: Color,
    pub kingside: bool,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: &'static [Square],
    /// Squares the king stands on, passes and lands on; none may be attacked.
    pub king_path: [Square; 3],
    rook_moved_bit: u8,
}

/// e1g1, e1c1, e8g8, e8c8.
pub const CASTLE_RULES: [CastleRule; 4] = [
    CastleRule {
        color: Color::White,
        kingside: true,
        king_from: Square(0, 4),
        king_to: Square(0, 6),
        rook_from: Square(0, 7),
        rook_to: Square(0, 5),
        between: &[Square(0, 5), Square(0, 6)],
        king_path: [Square(0, 4), Square(0, 5), Square(0, 6)],
        rook_moved_bit: H1_ROOK_MOVED,
    },
    CastleRule {
        color: Color::White,
        kingside: false,
        king_from: Square(0, 4),
        king_to: Square(0, 2),
        rook_from: Square(0, 0),
        rook_to: Square(0, 3),
        between: &[Square(0, 1), Square(0, 2), Square(0, 3)],
        king_path: [Square(0, 4), Square(0, 3), Square(0, 2)],
        rook_moved_bit: A1_ROOK_MOVED,
    },
    CastleRule {
        color: Color::Black,
        kingside: true,
        king_from: Square(7, 4),
        king_to: Square(7, 6),
        rook_from: Square(7, 7),
        rook_to: Square(7, 5),
        between: &[Square(7, 5), Square(7, 6)],
        king_path: [Square(7, 4), Square(7, 5), Square(7, 6)],
        rook_moved_bit: H8_ROOK_MOVED,
    },
    CastleRule {
        color: Color::Black,
        kingside: false,
        king_from: Square(7, 4),
        king_to: Square(7, 2),
        rook_from: Square(7, 0),
        rook_to: Square(7, 3),
        between: &[Square(7, 1), Square(7, 2), Square(7, 3)],
        king_path: [Square(7, 4), Square(7, 3), Square(7, 2)],
        rook_moved_bit: A8_ROOK_MOVED,
    },
];

impl CastleRule {
    /// The rules available to one color, kingside first.
    pub fn for_color(color: Color) -> impl Iterator<Item = &'static CastleRule> {
        CASTLE_RULES.iter().filter(move |rule| rule.color == color)
    }

    /// Find the rule whose king transition matches `from -> to` for `color`.
    #[must_use]
    pub fn matching(color: Color, from: Square, to: Square) -> Option<&'static CastleRule> {
        CASTLE_RULES
            .iter()
            .find(|rule| rule.color == color && rule.king_from == from && rule.king_to == to)
    }
}

/// "Has moved" flags for both kings and the four corner rooks.
///
/// Flags are monotonic: once set they are never cleared by play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Nothing has moved: all four castles remain possible
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(0)
    }

    /// Every king and rook is marked as moved
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(ALL_MOVED)
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    /// True while neither the king nor the rook of this castle has moved.
    #[inline]
    #[must_use]
    pub const fn allows(self, rule: &CastleRule) -> bool {
        self.0 & (Self::king_bit(rule.color) | rule.rook_moved_bit) == 0
    }

    /// Convenience lookup by color and side.
    #[must_use]
    pub fn has(self, color: Color, kingside: bool) -> bool {
        CastleRule::for_color(color)
            .find(|rule| rule.kingside == kingside)
            .is_some_and(|rule| self.allows(rule))
    }

    /// Record that whatever stood on `sq` has left or been captured there.
    ///
    /// Only the six king/rook home squares carry a flag.
    #[inline]
    pub fn touch(&mut self, sq: Square) {
        self.0 |= match sq {
            Square(0, 4) => WHITE_KING_MOVED,
            Square(7, 4) => BLACK_KING_MOVED,
            Square(0, 0) => A1_ROOK_MOVED,
            Square(0, 7) => H1_ROOK_MOVED,
            Square(7, 0) => A8_ROOK_MOVED,
            Square(7, 7) => H8_ROOK_MOVED,
            _ => 0,
        };
    }

    /// Forbid one castle by marking its rook as moved
    #[inline]
    pub fn revoke(&mut self, rule: &CastleRule) {
        self.0 |= rule.rook_moved_bit;
    }

    /// Mark a king as moved, forbidding both of its castles
    #[inline]
    pub fn revoke_king(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_fixed_squares() {
        let notation: Vec<String> = CASTLE_RULES
            .iter()
            .map(|r| format!("{}{}", r.king_from, r.king_to))
            .collect();
        assert_eq!(notation, vec!["e1g1", "e1c1", "e8g8", "e8c8"]);
    }

    #[test]
    fn test_matching_requires_color() {
        assert!(CastleRule::matching(Color::White, Square(0, 4), Square(0, 6)).is_some());
        assert!(CastleRule::matching(Color::Black, Square(0, 4), Square(0, 6)).is_none());
        assert!(CastleRule::matching(Color::White, Square(0, 4), Square(0, 5)).is_none());
    }

    #[test]
    fn test_touch_is_monotonic() {
        let mut rights = CastlingRights::all();
        assert!(rights.has(Color::White, true));
        rights.touch(Square(0, 7));
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        rights.touch(Square(3, 3));
        rights.touch(Square(0, 7));
        assert!(!rights.has(Color::White, true));

        rights.touch(Square(7, 4));
        assert!(rights.king_moved(Color::Black));
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
    }

    #[test]
    fn test_none_blocks_everything() {
        let rights = CastlingRights::none();
        for rule in &CASTLE_RULES {
            assert!(!rights.allows(rule));
        }
    }
}
