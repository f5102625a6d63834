// Keytranspose Direction
// The four compass steps a finger can slip on the key grid

use std::fmt;
use strum_macros::EnumIter;

/// A single step on the key grid.
///
/// Up and Down move to the row above or below on the same finger column;
/// Left and Right move to the adjacent key in the same row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Every direction in table order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Parse a direction from its command-line symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'u' => Some(Direction::Up),
            'r' => Some(Direction::Right),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            _ => None,
        }
    }

    /// The command-line symbol for this direction
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Right => 'r',
            Direction::Down => 'd',
            Direction::Left => 'l',
        }
    }

    /// Column of this direction in the adjacency table
    pub fn index(self) -> usize {
        self as usize
    }

    /// The step that undoes this one
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Human-readable name
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
