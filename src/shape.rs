//! Cell adjacency on a rectangular board.

use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// A single step between orthogonally adjacent cells.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result is not bounds checked; a step off the top or left edge yields a location no board contains.
    fn attempt_from(&self, location: Location) -> Location;
}

/// The square cell type of a rectangular Go board. Adjacency is 4-connected, with no wraparound.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Step for SquareStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation across all step types.
pub trait Shape: Step {
    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in `Self::VARIANTS`.
    ///
    /// Callers filter the result against the board; nothing here knows the board's bounds.
    fn neighbors_of(location: Location) -> Vec<(Self, Location)>;
}

impl<Sh> Shape for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }
}
