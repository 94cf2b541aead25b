use rand::distributions::uniform::SampleRange;
use rand::Rng;

use itertools::Itertools;

use crate::basic::{BoardDim, Cell};
use crate::snake::Snake;

/// Playable area of the grid. The top row (y = 0) is the score bar, it counts
/// as a wall and never holds a snake cell or the fruit.
#[derive(Copy, Clone, Debug)]
pub struct Board {
    dim: BoardDim,
}

impl Board {
    pub fn new(dim: BoardDim) -> Self {
        assert!(dim.x > 0 && dim.y > 1, "degenerate board: {dim:?}");
        Self { dim }
    }

    pub fn dim(self) -> BoardDim {
        self.dim
    }

    pub fn contains(self, cell: Cell) -> bool {
        (0..self.dim.x).contains(&cell.x) && (1..self.dim.y).contains(&cell.y)
    }

    /// Number of cells in the playable area
    pub fn playable_len(self) -> usize {
        (self.dim.x * (self.dim.y - 1)) as usize
    }

    fn index_of(self, cell: Cell) -> usize {
        ((cell.y - 1) * self.dim.x + cell.x) as usize
    }

    fn cell_at(self, idx: usize) -> Cell {
        Cell {
            x: idx as isize % self.dim.x,
            y: idx as isize / self.dim.x + 1,
        }
    }

    /// Uniform sample from the playable cells not in `occupied_cells`, `None`
    /// when the board is full. `occupied_cells` must be sorted.
    pub fn random_free_cell(self, occupied_cells: &[Cell], rng: &mut impl Rng) -> Option<Cell> {
        let free_spaces = self.playable_len() - occupied_cells.len();
        if free_spaces == 0 {
            return None;
        }

        let mut new_idx = (0..free_spaces).sample_single(rng);
        for &cell in occupied_cells {
            if self.index_of(cell) <= new_idx {
                new_idx += 1;
            }
        }

        assert!(new_idx < self.playable_len());
        Some(self.cell_at(new_idx))
    }
}

/// Snake cells sorted the way `random_free_cell` expects
pub fn occupied_cells(snake: &Snake) -> Vec<Cell> {
    snake.cells.iter().copied().sorted_unstable().collect_vec()
}

#[cfg(test)]
fn test_board() -> Board {
    Board::new(BoardDim { x: 4, y: 3 })
}

#[test]
fn test_contains() {
    let board = Board::new(BoardDim { x: 20, y: 20 });

    [
        ((0, 1), true),
        ((19, 19), true),
        ((10, 10), true),
        ((0, 0), false), // score row
        ((19, 0), false),
        ((-1, 5), false),
        ((20, 5), false),
        ((5, 20), false),
        ((5, -1), false),
    ]
    .iter()
    .for_each(|&((x, y), expected)| {
        assert_eq!(board.contains(Cell { x, y }), expected, "<{}, {}>", x, y);
    });
}

#[test]
fn test_free_cell_never_occupied() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board = test_board();
    let mut rng = StdRng::seed_from_u64(7);

    // 5 of the 8 playable cells taken
    let occupied = [(0, 1), (1, 1), (2, 1), (3, 1), (0, 2)]
        .iter()
        .map(|&(x, y)| Cell { x, y })
        .collect_vec();

    for _ in 0..100 {
        let cell = board.random_free_cell(&occupied, &mut rng).unwrap();
        assert!(board.contains(cell));
        assert!(!occupied.contains(&cell));
    }
}

#[test]
fn test_free_cell_full_board() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board = test_board();
    let mut rng = StdRng::seed_from_u64(7);

    let all = (1..3)
        .cartesian_product(0..4)
        .map(|(y, x)| Cell { x, y })
        .collect_vec();
    assert_eq!(all.len(), board.playable_len());

    assert_eq!(board.random_free_cell(&all, &mut rng), None);
}

#[test]
fn test_free_cell_single_gap() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board = test_board();
    let mut rng = StdRng::seed_from_u64(7);

    let gap = Cell { x: 2, y: 2 };
    let occupied = (1..3)
        .cartesian_product(0..4)
        .map(|(y, x)| Cell { x, y })
        .filter(|&cell| cell != gap)
        .collect_vec();

    // only one free cell left, sampling must find it every time
    for _ in 0..20 {
        assert_eq!(board.random_free_cell(&occupied, &mut rng), Some(gap));
    }
}
