use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use tracing::{debug, instrument, trace};

use crate::cell::{Cell, Color};
use crate::error::Error;
use crate::location::{Dimension, Location};
use crate::shape::{Shape, SquareStep, Step};

/// A maximal 4-connected set of same-colored stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Color,
    // row-major order
    stones: Vec<Location>,
    liberties: BTreeSet<Location>,
}

impl Group {
    /// The color shared by every stone in this group.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Every stone in the group, in reading order.
    pub fn stones(&self) -> &[Location] {
        &self.stones
    }

    /// The distinct empty cells adjacent to at least one stone of the group.
    pub fn liberties(&self) -> &BTreeSet<Location> {
        &self.liberties
    }

    /// The number of distinct liberties; a group with none is captured.
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// Whether `location` holds one of this group's stones.
    pub fn contains(&self, location: Location) -> bool {
        self.stones.contains(&location)
    }
}

/// A rectangular Go board of [`Cell`]s.
///
/// [`Board`]s can be parsed from integer rows ([`Board::from_rows`]), from a diagram ([`str::parse`]),
/// or built using a [`Builder`](crate::builder::Builder) such as [`SquareBoardBuilder`](crate::builder::SquareBoardBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let dims = match (Dimension::new(width), Dimension::new(height)) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(Error::EmptyBoard),
        };

        if let Some((row, found)) = rows.iter().map(Vec::len).find_position(|len| *len != width) {
            return Err(Error::RaggedRow { row, expected: width, found });
        }

        Ok(Self {
            cells: Array2::from_shape_fn((height, width), |(y, x)| rows[y][x]),
            dims,
        })
    }

    /// Parse a board from rows of `0` (empty), `1` (black) and `-1` (white).
    ///
    /// Fails on an empty board, rows of unequal length, or any other value.
    pub fn from_rows(rows: &[Vec<i8>]) -> Result<Self, Error> {
        let cells = rows.iter()
            .map(|row| row.iter().map(|value| Cell::try_from(*value)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells)
    }

    /// The board as rows of integers, the inverse of [`Board::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        self.cells.rows().into_iter()
            .map(|row| row.iter().map(|cell| i8::from(*cell)).collect_vec())
            .collect_vec()
    }

    /// `(width, height)` of the board.
    pub fn dims(&self) -> (usize, usize) {
        (self.dims.0.get(), self.dims.1.get())
    }

    /// The cell at `location`, or `None` if it is off the board.
    pub fn get(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    fn on_board_neighbors(&self, location: Location) -> impl Iterator<Item = (Location, Cell)> + '_ {
        SquareStep::neighbors_of(location).into_iter()
            .filter_map(move |(_, neighbor)| self.get(neighbor).map(|cell| (neighbor, cell)))
    }

    /// For every stone of `color`, the number of empty cells orthogonally adjacent to that stone.
    ///
    /// Groups are discovered with a breadth-first flood fill, and each stone reports only its own liberties;
    /// a liberty shared by two stones of a group is counted once for each of them.
    /// Empty cells and stones of the other color always read `0`.
    #[instrument(level = "trace", skip(self), fields(dims = ?self.dims()))]
    pub fn liberties(&self, color: Color) -> Array2<usize> {
        let stone = Cell::Stone(color);
        let mut liberties = Array2::<usize>::zeros(self.cells.raw_dim());
        let mut visited = Array2::from_elem(self.cells.raw_dim(), false);
        let mut queue = VecDeque::new();

        for (index, cell) in self.cells.indexed_iter() {
            if *cell != stone || visited[index] {
                continue;
            }

            let origin = Location::from(index);
            visited[index] = true;
            queue.push_back(origin);
            let mut size = 0usize;

            while let Some(location) = queue.pop_front() {
                size += 1;

                for (neighbor, neighbor_cell) in self.on_board_neighbors(location) {
                    if neighbor_cell == Cell::Empty {
                        liberties[location.as_index()] += 1;
                    } else if neighbor_cell == stone && !visited[neighbor.as_index()] {
                        // mark on enqueue so no stone is counted twice
                        visited[neighbor.as_index()] = true;
                        queue.push_back(neighbor);
                    }
                }
            }

            trace!(%origin, size, "flooded group");
        }

        liberties
    }

    /// Every group of `color` on the board, ordered by the first stone of each in reading order.
    #[instrument(level = "trace", skip(self), fields(dims = ?self.dims()))]
    pub fn groups(&self, color: Color) -> Vec<Group> {
        let stone = Cell::Stone(color);
        let mut graph: UnGraphMap<Location, ()> = UnGraphMap::new();

        for (index, _) in self.cells.indexed_iter().filter(|(_, cell)| **cell == stone) {
            let location = Location::from(index);
            graph.add_node(location);

            // edges only toward higher indices, the reverse is implied since the graph is undirected
            for step in [SquareStep::Right, SquareStep::Down] {
                let neighbor = step.attempt_from(location);
                if self.get(neighbor) == Some(stone) {
                    graph.add_edge(location, neighbor, ());
                }
            }
        }

        let mut seen = HashSet::with_capacity(graph.node_count());
        let mut groups = Vec::new();

        for start in graph.nodes().sorted_by_key(Location::row_major) {
            if seen.contains(&start) {
                continue;
            }

            let mut stones = Vec::new();
            let mut bfs = Bfs::new(&graph, start);
            while let Some(location) = bfs.next(&graph) {
                seen.insert(location);
                stones.push(location);
            }
            stones.sort_by_key(Location::row_major);

            let liberties = stones.iter()
                .flat_map(|location| self.on_board_neighbors(*location))
                .filter(|(_, cell)| *cell == Cell::Empty)
                .map(|(neighbor, _)| neighbor)
                .collect::<BTreeSet<_>>();

            debug!(%start, %color, stones = stones.len(), liberties = liberties.len(), "found group");
            groups.push(Group { color, stones, liberties });
        }

        groups
    }

    /// The group containing the stone at `location`, or `None` if that cell is empty or off the board.
    pub fn group_at(&self, location: Location) -> Option<Group> {
        match self.get(location)? {
            Cell::Empty => None,
            Cell::Stone(color) => self.groups(color).into_iter().find(|group| group.contains(location)),
        }
    }
}

impl TryFrom<Vec<Vec<i8>>> for Board {
    type Error = Error;

    fn try_from(value: Vec<Vec<i8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&value)
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse a diagram with one row per line: `.` for empty, `X` for black and `O` for white.
    /// Surrounding whitespace and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(Cell::from_symbol).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(cell.symbol());
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}

/// Liberties per stone for integer boards, as [`Board::liberties`] does for a parsed [`Board`].
///
/// `color` must be `1` or `-1`.
/// The result has the same shape as `grid`.
pub fn count_liberties(grid: &[Vec<i8>], color: i8) -> Result<Vec<Vec<usize>>, Error> {
    let color = match Cell::try_from(color)? {
        Cell::Empty => return Err(Error::EmptyColor),
        Cell::Stone(color) => color,
    };
    let board = Board::from_rows(grid)?;

    Ok(board.liberties(color).rows().into_iter()
        .map(|row| row.to_vec())
        .collect_vec())
}
