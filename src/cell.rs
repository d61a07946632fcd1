use std::fmt::{Display, Formatter};

use crate::error::Error;

/// The color of a stone.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, strum::Display)]
pub enum Color {
    /// Encoded as `1`, drawn as `X`.
    Black,
    /// Encoded as `-1`, drawn as `O`.
    White,
}

/// A single intersection on the board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// No stone; a liberty for any orthogonally adjacent stone.
    #[default]
    Empty,
    /// A stone of the given color.
    Stone(Color),
}

impl Cell {
    pub(crate) fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Stone(Color::Black) => 'X',
            Cell::Stone(Color::White) => 'O',
        }
    }

    pub(crate) fn from_symbol(symbol: char) -> Result<Self, Error> {
        match symbol {
            '.' => Ok(Cell::Empty),
            'X' | 'x' => Ok(Cell::Stone(Color::Black)),
            'O' | 'o' => Ok(Cell::Stone(Color::White)),
            other => Err(Error::UnknownSymbol(other)),
        }
    }
}

impl TryFrom<i8> for Cell {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Stone(Color::Black)),
            -1 => Ok(Cell::Stone(Color::White)),
            other => Err(Error::UnknownCell(other)),
        }
    }
}

impl From<Cell> for i8 {
    fn from(value: Cell) -> Self {
        match value {
            Cell::Empty => 0,
            Cell::Stone(Color::Black) => 1,
            Cell::Stone(Color::White) => -1,
        }
    }
}

impl From<Color> for Cell {
    fn from(value: Color) -> Self {
        Cell::Stone(value)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
