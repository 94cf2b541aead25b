use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::app::config::Config;
use crate::basic::board::Board;
use crate::basic::{Cell, Dir};
use crate::fruit::Fruit;
use crate::snake::Snake;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Collision {
    Wall,
    Itself,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Running,
    /// The snake hit a wall or itself
    Crashed(Collision),
    /// The snake covers the whole playable area, nowhere left to put a fruit
    Won,
}

/// The simulation. Advances one tick at a time; rendering, input, and pacing
/// live in the presentation loop.
pub struct GameState<R: Rng = ThreadRng> {
    pub snake: Snake,
    pub fruit: Fruit,
    board: Board,
    state: State,
    rng: R,
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameState<R> {
    /// `config` must have passed `Config::validate`
    pub fn with_rng(config: &Config, mut rng: R) -> Self {
        let board = Board::new(config.grid_dim);
        let head = Cell {
            x: board.dim().x / 2,
            y: board.dim().y / 2,
        };
        let snake = Snake::new(head, Dir::East, config.start_len);
        assert!(
            snake.cells.iter().all(|&cell| board.contains(cell)),
            "starting snake out of bounds"
        );
        let fruit = Fruit::spawn(board, &snake, &mut rng).expect("no room for the first fruit");

        Self {
            snake,
            fruit,
            board,
            state: State::Running,
            rng,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.snake.score
    }

    /// One simulation tick. `steer` is this tick's one allowed direction
    /// change, if the player asked for one. Terminal states latch: stepping
    /// a finished session does nothing.
    pub fn step(&mut self, steer: Option<Dir>) -> State {
        if self.state != State::Running {
            return self.state;
        }

        if let Some(dir) = steer {
            self.snake.turn(dir);
        }
        self.snake.advance();

        let head = self.snake.head();
        if !self.board.contains(head) {
            self.state = State::Crashed(Collision::Wall);
        } else if self.snake.bites_itself() {
            self.state = State::Crashed(Collision::Itself);
        } else if head == self.fruit.pos {
            self.snake.grow();
            match self.fruit.relocate(self.board, &self.snake, &mut self.rng) {
                Some(pos) => debug!("fruit relocated to {:?}", pos),
                None => self.state = State::Won,
            }
        }

        self.state
    }
}

#[cfg(test)]
fn test_game(dim: (isize, isize), start_len: usize) -> GameState<rand::rngs::StdRng> {
    use crate::basic::BoardDim;
    use rand::SeedableRng;

    let config = Config {
        grid_dim: BoardDim { x: dim.0, y: dim.1 },
        start_len,
        ..Config::default()
    };
    config.validate().unwrap();
    GameState::with_rng(&config, rand::rngs::StdRng::seed_from_u64(12345))
}

#[test]
fn test_starting_state() {
    let game = test_game((20, 20), 4);
    assert_eq!(game.state(), State::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.snake.dir, Dir::East);
    assert_eq!(game.snake.head(), Cell { x: 10, y: 10 });
    assert_eq!(game.snake.cells.len(), 4);
    assert!(game.board.contains(game.fruit.pos));
    assert!(!game.snake.cells.contains(&game.fruit.pos));
}

#[test]
fn test_length_constant_without_fruit() {
    let mut game = test_game((20, 20), 4);
    game.fruit.pos = Cell { x: 0, y: 19 }; // out of the snake's path
    for _ in 0..5 {
        assert_eq!(game.step(None), State::Running);
        assert_eq!(game.snake.cells.len(), 4);
        assert_eq!(game.score(), 0);
    }
}

#[test]
fn test_eat_and_grow() {
    let mut game = test_game((20, 20), 4);
    game.fruit.pos = Cell { x: 11, y: 10 }; // right in front of the head

    assert_eq!(game.step(None), State::Running);
    assert_eq!(game.score(), 1);

    let cells: Vec<_> = game.snake.cells.iter().copied().collect();
    let expected: Vec<_> = [(7, 10), (8, 10), (9, 10), (10, 10), (11, 10)]
        .iter()
        .map(|&(x, y)| Cell { x, y })
        .collect();
    assert_eq!(cells, expected);

    // the fruit moved to a free cell
    assert!(game.board.contains(game.fruit.pos));
    assert!(!game.snake.cells.contains(&game.fruit.pos));
}

#[test]
fn test_wall_death() {
    let mut game = test_game((20, 20), 4);
    game.fruit.pos = Cell { x: 0, y: 19 };

    for _ in 0..9 {
        assert_eq!(game.step(None), State::Running);
    }
    assert_eq!(game.snake.head(), Cell { x: 19, y: 10 });
    assert_eq!(game.step(None), State::Crashed(Collision::Wall));
    assert_eq!(game.score(), 0);
}

#[test]
fn test_score_row_is_a_wall() {
    let mut game = test_game((20, 20), 4);
    game.fruit.pos = Cell { x: 0, y: 19 };

    assert_eq!(game.step(Some(Dir::North)), State::Running);
    for _ in 0..8 {
        assert_eq!(game.step(None), State::Running);
    }
    assert_eq!(game.snake.head(), Cell { x: 10, y: 1 });
    assert_eq!(game.step(None), State::Crashed(Collision::Wall));
}

#[test]
fn test_self_collision() {
    let mut game = test_game((20, 20), 6);
    game.fruit.pos = Cell { x: 0, y: 19 };

    assert_eq!(game.step(Some(Dir::North)), State::Running);
    assert_eq!(game.step(Some(Dir::West)), State::Running);
    assert_eq!(game.step(Some(Dir::South)), State::Crashed(Collision::Itself));

    // nothing beyond the triggering move happened
    assert_eq!(game.snake.cells.len(), 6);
    assert_eq!(game.score(), 0);
    assert_eq!(game.fruit.pos, Cell { x: 0, y: 19 });
}

#[test]
fn test_terminal_state_latches() {
    let mut game = test_game((20, 20), 4);
    game.fruit.pos = Cell { x: 0, y: 19 };

    for _ in 0..10 {
        game.step(None);
    }
    assert_eq!(game.state(), State::Crashed(Collision::Wall));

    let head = game.snake.head();
    assert_eq!(game.step(Some(Dir::North)), State::Crashed(Collision::Wall));
    assert_eq!(game.snake.head(), head);
}

#[test]
fn test_reversal_ignored_by_step() {
    let mut game = test_game((20, 20), 4);
    game.fruit.pos = Cell { x: 0, y: 19 };

    assert_eq!(game.step(Some(Dir::West)), State::Running);
    // kept going East
    assert_eq!(game.snake.head(), Cell { x: 11, y: 10 });
}

#[test]
fn test_won_when_snake_fills_the_board() {
    // 3 playable cells, snake of 2, the fruit lands in the only gap
    let mut game = test_game((3, 2), 2);
    assert_eq!(game.fruit.pos, Cell { x: 2, y: 1 });

    assert_eq!(game.step(None), State::Won);
    assert_eq!(game.score(), 1);
    assert_eq!(game.snake.cells.len(), 3);
}
