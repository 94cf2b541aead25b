use super::dir::Dir;
use crate::basic::Point;
use std::{
    cmp::Ordering,
    fmt::{Debug, Error, Formatter},
};

#[derive(Eq, PartialEq, Copy, Clone, Add, Hash)]
pub struct Cell {
    pub x: isize,
    pub y: isize,
}

pub type BoardDim = Cell;

impl Cell {
    /// Top-left corner of this cell in pixel space
    pub fn to_point(self, cell_side: f32) -> Point {
        Point {
            x: self.x as f32 * cell_side,
            y: self.y as f32 * cell_side,
        }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: isize) -> Self {
        let v = dir.vector();
        Self {
            x: self.x + v.x * dist,
            y: self.y + v.y * dist,
        }
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as usize
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major, the order free-cell indices are counted in
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

#[test]
fn test_translate() {
    use Dir::*;

    [
        ((10, 10), East, 1, (11, 10)),
        ((10, 10), West, 1, (9, 10)),
        ((10, 10), North, 1, (10, 9)),
        ((10, 10), South, 1, (10, 11)),
        ((10, 10), East, 3, (13, 10)),
        ((0, 1), West, 1, (-1, 1)),
    ]
    .iter()
    .for_each(|&((x1, y1), dir, dist, (x2, y2))| {
        let from = Cell { x: x1, y: y1 };
        let to = Cell { x: x2, y: y2 };
        assert_eq!(from.translate(dir, dist), to);
    });
}

#[test]
fn test_row_major_order() {
    let low = Cell { x: 19, y: 1 };
    let high = Cell { x: 0, y: 2 };
    assert!(low < high);
    assert!(Cell { x: 3, y: 5 } < Cell { x: 4, y: 5 });
}
