#![warn(missing_docs)]

//! # `strands`
//!
//! Two small searches over structured input.
//!
//! ## Locating split text in a tree
//! A [`Node`] tree models a simplified HTML DOM: internal nodes group children, and leaves carry text.
//! [`locate()`] finds which leaves, read in document order, hold a target string. Usually that is one
//! leaf, but the target may straddle several, e.g. `"very funny"` across `<b>is very</b><i>funny</i>`.
//! Build trees with [`Node::leaf`] and [`Node::parent`], or with a [`NodeBuilder`] when the shape is
//! not known ahead of time.
//!
//! ## Counting liberties on a Go board
//! A [`Board`] holds empty cells and black or white stones.
//! [`Board::liberties`] reports, for every stone of one color, how many empty cells touch it, discovering
//! each group with a flood fill. [`Board::groups`] reports each group with its distinct liberties instead.
//! Boards come from integer rows ([`Board::from_rows`] and [`count_liberties`]), from diagrams
//! (`"X.O\n..."` via [`str::parse`]), or from a [`SquareBoardBuilder`](builder::SquareBoardBuilder).
//!
//! Malformed input, such as ragged rows or a node with both text and children, fails with an [`Error`]
//! rather than producing a wrong answer. Finding nothing is not an error.

pub use board::{count_liberties, Board, Group};
pub use builder::Builder;
pub use cell::{Cell, Color};
pub use error::Error;
pub use locate::locate;
pub use location::Location;
pub use tree::{Leaves, Node, NodeBuilder};

pub(crate) mod board;
pub mod builder;
pub(crate) mod cell;
pub(crate) mod error;
pub(crate) mod locate;
pub(crate) mod location;
pub mod shape;
pub(crate) mod tree;
#[cfg(test)]
mod testing;
