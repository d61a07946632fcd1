use proptest::prelude::*;
use strands::{count_liberties, Board, Cell, Color, Location};

fn grid() -> impl Strategy<Value = Vec<Vec<i8>>> {
    (1usize..7, 1usize..7).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(-1i8..=1, width), height)
    })
}

fn empty_neighbors(grid: &[Vec<i8>], y: usize, x: usize) -> usize {
    let mut count = 0;
    if y > 0 && grid[y - 1][x] == 0 { count += 1; }
    if y + 1 < grid.len() && grid[y + 1][x] == 0 { count += 1; }
    if x > 0 && grid[y][x - 1] == 0 { count += 1; }
    if x + 1 < grid[y].len() && grid[y][x + 1] == 0 { count += 1; }
    count
}

proptest! {
    #[test]
    fn each_stone_counts_its_own_empty_neighbors(grid in grid(), color in prop_oneof![Just(1i8), Just(-1i8)]) {
        let liberties = count_liberties(&grid, color).unwrap();

        prop_assert_eq!(liberties.len(), grid.len());
        for (y, row) in grid.iter().enumerate() {
            prop_assert_eq!(liberties[y].len(), row.len());
            for (x, value) in row.iter().enumerate() {
                let expected = if *value == color { empty_neighbors(&grid, y, x) } else { 0 };
                prop_assert_eq!(liberties[y][x], expected);
            }
        }
    }

    #[test]
    fn liberties_are_repeatable(grid in grid()) {
        prop_assert_eq!(count_liberties(&grid, 1).unwrap(), count_liberties(&grid, 1).unwrap());
    }

    #[test]
    fn groups_partition_stones(grid in grid()) {
        let board = Board::from_rows(&grid).unwrap();

        for color in [Color::Black, Color::White] {
            let groups = board.groups(color);
            let stones: usize = groups.iter().map(|group| group.stones().len()).sum();
            let expected = grid.iter().flatten().filter(|value| Cell::try_from(**value).unwrap() == Cell::Stone(color)).count();
            prop_assert_eq!(stones, expected);

            let per_stone = board.liberties(color);
            for group in &groups {
                let summed: usize = group.stones().iter().map(|Location(x, y)| per_stone[(*y, *x)]).sum();
                // distinct liberties never exceed the per-stone tally
                prop_assert!(group.liberty_count() <= summed);
                for liberty in group.liberties() {
                    prop_assert_eq!(board.get(*liberty), Some(Cell::Empty));
                }
                for stone in group.stones() {
                    let found = board.group_at(*stone);
                    prop_assert_eq!(found.as_ref(), Some(group));
                }
            }
        }
    }
}
