use rand::Rng;

use crate::basic::board::{occupied_cells, Board};
use crate::basic::Cell;
use crate::snake::Snake;

/// The one fruit on the board.
pub struct Fruit {
    pub pos: Cell,
}

impl Fruit {
    /// Place the first fruit of the session, `None` if the snake already
    /// covers the whole playable area
    pub fn spawn(board: Board, snake: &Snake, rng: &mut impl Rng) -> Option<Self> {
        board
            .random_free_cell(&occupied_cells(snake), rng)
            .map(|pos| Self { pos })
    }

    /// Move the fruit after it was eaten, `None` when no free cell is left
    pub fn relocate(&mut self, board: Board, snake: &Snake, rng: &mut impl Rng) -> Option<Cell> {
        let pos = board.random_free_cell(&occupied_cells(snake), rng)?;
        self.pos = pos;
        Some(pos)
    }
}

#[test]
fn test_relocate_avoids_snake() {
    use crate::basic::{BoardDim, Dir};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board = Board::new(BoardDim { x: 5, y: 3 });
    let snake = Snake::new(Cell { x: 3, y: 1 }, Dir::East, 4);
    let mut rng = StdRng::seed_from_u64(3);

    let mut fruit = Fruit::spawn(board, &snake, &mut rng).unwrap();
    for _ in 0..50 {
        let pos = fruit.relocate(board, &snake, &mut rng).unwrap();
        assert!(board.contains(pos));
        assert!(!snake.cells.contains(&pos));
        assert_eq!(fruit.pos, pos);
    }
}

#[test]
fn test_spawn_with_full_board() {
    use crate::basic::{BoardDim, Dir};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // the snake fills the playable row wall to wall
    let board = Board::new(BoardDim { x: 4, y: 2 });
    let snake = Snake::new(Cell { x: 3, y: 1 }, Dir::East, 4);
    let mut rng = StdRng::seed_from_u64(3);

    assert!(Fruit::spawn(board, &snake, &mut rng).is_none());
}
