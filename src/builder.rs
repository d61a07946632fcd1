//! Incremental construction of [`Board`]s.

use std::num::NonZero;
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};
use thiserror::Error;

use crate::board::Board;
use crate::cell::{Cell, Color};
use crate::error;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// A stone was placed or removed outside the bounds specified by `dims` on a builder.
    #[error("location {0} is out of bounds")]
    OutOfBounds(Location),
}

impl From<&Vec<BuilderInvalidReason>> for error::Error {
    fn from(value: &Vec<BuilderInvalidReason>) -> Self {
        error::Error::InvalidBoard(value.clone())
    }
}

/// Functionality all board builders must implement.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
pub trait Builder: Clone {
    /// Construct a new, empty [`Self`] with the specified dimensions, specified in `(x, y)` order.
    fn with_dims(dims: (Dimension, Dimension)) -> Self;
    /// Put a stone of `color` at `location`, replacing whatever was there.
    ///
    /// May cause the builder to enter an [`OutOfBounds`](BuilderInvalidReason::OutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    fn place(&mut self, color: Color, location: Location) -> &mut Self;
    /// Shorthand for multiple calls to [`Self::place`], with the same conditions.
    fn place_all(&mut self, color: Color, locations: impl IntoIterator<Item = Location>) -> &mut Self;
    /// Clear `location` back to [`Cell::Empty`].
    ///
    /// May cause the builder to enter an [`OutOfBounds`](BuilderInvalidReason::OutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    fn remove(&mut self, location: Location) -> &mut Self;
    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>>;
    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>>;
}

/// A builder for rectangular Go boards.
#[derive(Clone)]
pub struct SquareBoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for SquareBoardBuilder {
    fn default() -> Self {
        // the smallest board in common play
        let side = NonZero::<usize>::MIN.saturating_add(8);
        Self::with_dims((side, side))
    }
}

impl SquareBoardBuilder {
    fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.dims.0.get() && location.1 < self.dims.1.get()
    }

    fn set(&mut self, location: Location, cell: Cell) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::OutOfBounds(location));
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(cell);
        self
    }
}

impl Builder for SquareBoardBuilder {
    fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
            invalid_reasons: Default::default(),
        }
    }

    fn place(&mut self, color: Color, location: Location) -> &mut Self {
        self.set(location, Cell::Stone(color))
    }

    fn place_all(&mut self, color: Color, locations: impl IntoIterator<Item = Location>) -> &mut Self {
        for location in locations {
            self.place(color, location);
        }

        self
    }

    fn remove(&mut self, location: Location) -> &mut Self {
        self.set(location, Cell::Empty)
    }

    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            cells: self.cells.clone(),
            dims: self.dims,
        })
    }
}

impl TryFrom<&SquareBoardBuilder> for Board {
    type Error = error::Error;

    /// Build a [`Board`], reporting an invalid builder as [`Error::InvalidBoard`](error::Error::InvalidBoard).
    fn try_from(value: &SquareBoardBuilder) -> Result<Self, Self::Error> {
        Ok(value.build()?)
    }
}
