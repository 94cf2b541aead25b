use std::ops::Neg;

use crate::basic::Cell;
use Dir::*;

// defined in clockwise order starting at North
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        // SAFETY: (num % 4) is between 0 and 3
        unsafe { std::mem::transmute(num % 4) }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Vertical,   // N-S
    Horizontal, // E-W
}

impl Dir {
    // clockwise order starting from North
    pub fn iter() -> impl Iterator<Item = Self> {
        [North, East, South, West].iter().copied()
    }

    /// Unit vector of one step in this direction, y grows downward
    pub fn vector(self) -> Cell {
        match self {
            North => Cell { x: 0, y: -1 },
            East => Cell { x: 1, y: 0 },
            South => Cell { x: 0, y: 1 },
            West => Cell { x: -1, y: 0 },
        }
    }

    pub fn axis(self) -> Axis {
        use Axis::*;

        match self {
            North | South => Vertical,
            East | West => Horizontal,
        }
    }

    /// Whether a turn from `other` to `self` is a 90° turn
    pub fn perpendicular_to(self, other: Self) -> bool {
        self.axis() != other.axis()
    }
}

#[test]
fn test_opposites() {
    for &(a, b) in &[(North, South), (East, West)] {
        assert_eq!(-a, b);
        assert_eq!(-b, a);
        assert_eq!(-(-a), a);
    }
}

#[test]
fn test_vector_table() {
    assert_eq!(North.vector(), Cell { x: 0, y: -1 });
    assert_eq!(East.vector(), Cell { x: 1, y: 0 });
    assert_eq!(South.vector(), Cell { x: 0, y: 1 });
    assert_eq!(West.vector(), Cell { x: -1, y: 0 });

    for dir in Dir::iter() {
        let v = dir.vector();
        // unit steps only, never diagonal
        assert_eq!(v.x.abs() + v.y.abs(), 1);
        // opposite directions cancel out
        assert_eq!(v + (-dir).vector(), Cell { x: 0, y: 0 });
    }
}

#[test]
fn test_perpendicular() {
    for dir in Dir::iter() {
        assert!(!dir.perpendicular_to(dir));
        assert!(!dir.perpendicular_to(-dir));
        assert!(dir.perpendicular_to(Dir::from(dir as u8 + 1)));
        assert!(dir.perpendicular_to(Dir::from(dir as u8 + 3)));
    }
}
