use std::time::{Duration, Instant};

/// Decides when simulation ticks are due, decoupling the tick rate from the
/// render rate. Late frames catch up by running several ticks, early frames
/// run none.
pub struct Control {
    game_frame_duration: Duration,
    last_update: Instant,

    // time already owed to the game clock but not yet accounted
    // for as a whole tick (in ticks, always < 1)
    remainder: f64,

    // ticks that still need to be performed to catch up with
    // the current time
    missed_updates: Option<usize>,
}

impl Control {
    pub fn new(game_fps: f64) -> Self {
        assert!(game_fps > 0., "nonpositive tick rate: {game_fps}");
        Self {
            game_frame_duration: Duration::from_nanos((1_000_000_000.0 / game_fps) as u64),
            last_update: Instant::now(),
            remainder: 0.,
            missed_updates: None,
        }
    }

    // repeatedly called in update() as a while loop condition
    pub fn can_update(&mut self) -> bool {
        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                // how many ticks should have occurred since the last call
                let game_frames = self.last_update.elapsed().as_secs_f64()
                    / self.game_frame_duration.as_secs_f64()
                    + self.remainder;
                let missed_updates = game_frames as usize;

                if missed_updates > 0 {
                    self.remainder = game_frames % 1.;
                    self.last_update = Instant::now();
                    self.missed_updates = Some(missed_updates - 1);
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[test]
fn test_no_tick_due_immediately() {
    let mut control = Control::new(5.);
    assert!(!control.can_update());
}

#[test]
fn test_late_frame_catches_up() {
    let mut control = Control::new(100.);
    std::thread::sleep(Duration::from_millis(35));

    let mut ticks = 0;
    while control.can_update() {
        ticks += 1;
    }
    // at 100 ticks/s, 35ms owe at least 3 ticks
    assert!(ticks >= 3, "only {ticks} ticks");
}
