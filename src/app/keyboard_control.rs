use ggez::input::keyboard::KeyCode::{self, *};

use crate::basic::Dir;

/// Key bindings for steering the snake.
#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

pub const ARROWS: Controls = Controls { u: Up, d: Down, l: Left, r: Right };

impl Default for Controls {
    fn default() -> Self {
        ARROWS
    }
}

impl Controls {
    pub fn dir_of(self, key: KeyCode) -> Option<Dir> {
        use Dir::*;

        match key {
            _ if key == self.u => Some(North),
            _ if key == self.d => Some(South),
            _ if key == self.l => Some(West),
            _ if key == self.r => Some(East),
            _ => None,
        }
    }
}

/// Pending direction change, fed by key-press events, drained once per tick.
/// Of the valid (perpendicular) presses between two ticks the last one wins;
/// an invalid press never evicts an earlier valid one.
#[derive(Default)]
pub struct Steering {
    pending: Option<Dir>,
}

impl Steering {
    pub fn record(&mut self, heading: Dir, dir: Dir) {
        if dir.perpendicular_to(heading) {
            self.pending = Some(dir);
        }
    }

    pub fn take(&mut self) -> Option<Dir> {
        self.pending.take()
    }
}

#[test]
fn test_latest_valid_press_wins() {
    use Dir::*;

    let mut steering = Steering::default();
    steering.record(East, North);
    steering.record(East, South);
    assert_eq!(steering.take(), Some(South));
    assert_eq!(steering.take(), None);
}

#[test]
fn test_invalid_press_preserves_pending() {
    use Dir::*;

    let mut steering = Steering::default();
    steering.record(East, North);
    steering.record(East, West);
    steering.record(East, East);
    assert_eq!(steering.take(), Some(North));
}

#[test]
fn test_default_bindings() {
    use Dir::*;

    let controls = Controls::default();
    assert_eq!(controls.dir_of(Up), Some(North));
    assert_eq!(controls.dir_of(Down), Some(South));
    assert_eq!(controls.dir_of(Left), Some(West));
    assert_eq!(controls.dir_of(Right), Some(East));
    assert_eq!(controls.dir_of(Space), None);
}
