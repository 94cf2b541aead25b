use std::collections::VecDeque;

use crate::basic::{Cell, Dir};

/// The player-controlled snake.
pub struct Snake {
    /// Body cells in order, oldest (tail) at the front, head at the back
    pub cells: VecDeque<Cell>,
    /// Direction the snake is currently going
    pub dir: Dir,
    /// The tail cell removed by the last `advance`, retained for one tick
    /// so `grow` can put it back
    pub removed_tail: Option<Cell>,
    pub score: u32,
}

impl Snake {
    /// A snake of `len` contiguous cells ending at `head`, facing `dir`
    pub fn new(head: Cell, dir: Dir, len: usize) -> Self {
        assert!(len >= 1, "zero-length snake");
        let cells = (0..len)
            .rev()
            .map(|dist| head.translate(-dir, dist as isize))
            .collect();
        Self {
            cells,
            dir,
            removed_tail: None,
            score: 0,
        }
    }

    pub fn head(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Move one cell in the current direction. Collision checking is the
    /// caller's job, after the fact.
    pub fn advance(&mut self) {
        let new_head = self.head().translate(self.dir, 1);
        self.cells.push_back(new_head);
        self.removed_tail = self.cells.pop_front();
    }

    /// Change heading, 90° turns only, reversals and repeats are ignored
    pub fn turn(&mut self, dir: Dir) {
        if dir.perpendicular_to(self.dir) {
            self.dir = dir;
        }
    }

    /// Put back the tail cell removed by this tick's `advance`, making the
    /// snake one cell longer, and bump the score
    pub fn grow(&mut self) {
        let tail = self.removed_tail.take().expect("grow before advance");
        self.cells.push_front(tail);
        self.score += 1;
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.cells.iter().rev().skip(1).any(|&cell| cell == head)
    }
}

#[test]
fn test_starting_shape() {
    use Dir::*;

    let snake = Snake::new(Cell { x: 10, y: 10 }, East, 4);
    let cells: Vec<_> = snake.cells.iter().copied().collect();
    assert_eq!(
        cells,
        vec![
            Cell { x: 7, y: 10 },
            Cell { x: 8, y: 10 },
            Cell { x: 9, y: 10 },
            Cell { x: 10, y: 10 },
        ]
    );
    assert_eq!(snake.head(), Cell { x: 10, y: 10 });
    assert_eq!(snake.dir, East);
    assert_eq!(snake.score, 0);
}

#[test]
fn test_advance_keeps_length_and_contiguity() {
    use itertools::Itertools;
    use Dir::*;

    let mut snake = Snake::new(Cell { x: 10, y: 10 }, East, 4);
    for _ in 0..5 {
        snake.advance();
        assert_eq!(snake.cells.len(), 4);
        for (a, b) in snake.cells.iter().tuple_windows() {
            assert_eq!(a.manhattan_distance(*b), 1);
        }
    }
    assert_eq!(snake.head(), Cell { x: 15, y: 10 });
    assert_eq!(snake.removed_tail, Some(Cell { x: 11, y: 10 }));
}

#[test]
fn test_grow_reinserts_removed_tail() {
    use Dir::*;

    let mut snake = Snake::new(Cell { x: 10, y: 10 }, East, 4);
    snake.advance();
    snake.grow();
    assert_eq!(snake.cells.len(), 5);
    assert_eq!(snake.score, 1);
    assert_eq!(snake.cells[0], Cell { x: 7, y: 10 });
    assert_eq!(snake.head(), Cell { x: 11, y: 10 });
}

#[test]
fn test_no_reversal() {
    use Dir::*;

    let mut snake = Snake::new(Cell { x: 10, y: 10 }, East, 4);
    snake.turn(West);
    assert_eq!(snake.dir, East);
    snake.turn(East);
    assert_eq!(snake.dir, East);
    snake.turn(North);
    assert_eq!(snake.dir, North);
    snake.turn(South);
    assert_eq!(snake.dir, North);
}

#[test]
fn test_bites_itself() {
    use Dir::*;

    // head curls back into the body
    let mut snake = Snake::new(Cell { x: 10, y: 10 }, East, 6);
    assert!(!snake.bites_itself());
    for dir in [North, West, South] {
        snake.turn(dir);
        snake.advance();
    }
    assert!(snake.bites_itself());
}

#[test]
fn test_tail_chase_is_legal() {
    use Dir::*;

    // at length 4 the tail vacates a cell on the same tick the head enters it
    let mut snake = Snake::new(Cell { x: 10, y: 10 }, East, 4);
    for dir in [North, West, South] {
        snake.turn(dir);
        snake.advance();
        assert!(!snake.bites_itself());
    }
}
