use std::time::Duration;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{BoundaryPolicy, Playfield, SPEED_MS};
use crate::effect::{Effect, score_text};
use crate::food::Food;
use crate::input::{Direction, GameInput, direction_change_is_valid};
use crate::snake::{Cell, Snake};

/// Delay between two ticks while playing.
pub const SPEED: Duration = Duration::from_millis(SPEED_MS);

/// Direction every new game starts with.
pub const DEFAULT_DIRECTION: Direction = Direction::Down;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Title,
    Playing,
    GameOver,
}

/// What the caller should do with its tick timer after a controller call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickSchedule {
    /// Leave any pending tick as it is.
    Unchanged,
    /// Replace any pending tick with one due after the delay.
    After(Duration),
    /// Cancel any pending tick.
    Halt,
}

/// Draw effects plus the timer instruction produced by one inbound call.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Update {
    pub effects: Vec<Effect>,
    pub schedule: TickSchedule,
}

impl Update {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            schedule: TickSchedule::Unchanged,
        }
    }
}

/// Owns one snake session: direction, score, high score, and the
/// title/playing/game-over state machine.
///
/// The controller never sleeps or schedules anything itself. Every call
/// returns an [`Update`] and the caller owns the timer.
#[derive(Debug, Clone)]
pub struct GameController {
    pub snake: Snake,
    pub food: Food,
    score: u32,
    high_score: u32,
    direction: Direction,
    status: GameStatus,
    field: Playfield,
    rng: StdRng,
}

impl GameController {
    /// Creates a controller on the title screen with an entropy-seeded RNG.
    #[must_use]
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self::with_rng(Playfield::standard(policy), StdRng::from_entropy())
    }

    /// Creates a deterministic controller for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(policy: BoundaryPolicy, seed: u64) -> Self {
        Self::with_rng(Playfield::standard(policy), StdRng::seed_from_u64(seed))
    }

    fn with_rng(field: Playfield, rng: StdRng) -> Self {
        let snake = Snake::initialize(field, &mut Vec::new());
        let food = Food::new(Cell { x: 0, y: 0 });

        Self {
            snake,
            food,
            score: 0,
            high_score: 0,
            direction: DEFAULT_DIRECTION,
            status: GameStatus::Title,
            field,
            rng,
        }
    }

    /// Draws the title screen. Only confirm input leaves it.
    pub fn initialize(&mut self) -> Update {
        self.status = GameStatus::Title;
        Update {
            effects: vec![Effect::ClearBoard, Effect::DisplayTitle],
            schedule: TickSchedule::Halt,
        }
    }

    /// Resets score, direction, snake, and food and begins ticking at once.
    pub fn start_game(&mut self) -> Update {
        let mut effects = vec![Effect::ClearBoard];

        self.score = 0;
        self.direction = DEFAULT_DIRECTION;
        effects.push(Effect::DisplayScore {
            text: score_text(self.score),
        });

        self.snake = Snake::initialize(self.field, &mut effects);
        // A fresh three-cell snake always leaves room on the board.
        let occupied = self.snake.occupied();
        if let Some(food) = Food::spawn(&mut self.rng, self.field, &occupied, &mut effects) {
            self.food = food;
        }
        self.status = GameStatus::Playing;

        info!(
            "game started: policy={:?} high_score={}",
            self.field.policy, self.high_score
        );

        Update {
            effects,
            schedule: TickSchedule::After(Duration::ZERO),
        }
    }

    /// Confirm-gated restart; a no-op unless on the title or game-over screen.
    pub fn restart(&mut self) -> Update {
        match self.status {
            GameStatus::Title | GameStatus::GameOver => self.start_game(),
            GameStatus::Playing => Update::unchanged(),
        }
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> Update {
        if self.status != GameStatus::Playing {
            return Update::unchanged();
        }

        let mut effects = Vec::new();
        self.snake.move_towards(self.direction, self.field, &mut effects);

        if self.snake.check_collisions(self.field) {
            self.finish(&mut effects);
            return Update {
                effects,
                schedule: TickSchedule::Halt,
            };
        }

        if self.snake.eat_food(self.food.cell, &mut effects) {
            self.score += 1;
            debug!("food eaten at {:?}, score={}", self.food.cell, self.score);
            effects.push(Effect::DisplayScore {
                text: score_text(self.score),
            });
            effects.push(Effect::RemoveFood);

            let occupied = self.snake.occupied();
            match Food::spawn(&mut self.rng, self.field, &occupied, &mut effects) {
                Some(food) => self.food = food,
                None => {
                    warn!("board is full at length {}", self.snake.len());
                    self.finish(&mut effects);
                    return Update {
                        effects,
                        schedule: TickSchedule::Halt,
                    };
                }
            }
        }

        Update {
            effects,
            schedule: TickSchedule::After(SPEED),
        }
    }

    /// Sets the direction used by the next tick. Reversals and calls outside
    /// of play are ignored.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Playing {
            return;
        }

        if !direction_change_is_valid(self.direction, direction) {
            debug!("rejected reversal {:?} -> {direction:?}", self.direction);
            return;
        }

        self.direction = direction;
    }

    /// Applies one external input event.
    pub fn handle_input(&mut self, input: GameInput) -> Update {
        match input {
            GameInput::Direction(direction) => {
                self.change_direction(direction);
                Update::unchanged()
            }
            GameInput::Confirm => self.restart(),
            GameInput::Quit => Update::unchanged(),
        }
    }

    fn finish(&mut self, effects: &mut Vec<Effect>) {
        self.high_score = self.high_score.max(self.score);
        self.status = GameStatus::GameOver;

        info!(
            "game over: score={} high_score={}",
            self.score, self.high_score
        );

        effects.push(Effect::ClearBoard);
        effects.push(Effect::DisplayGameOver {
            score: self.score,
            high_score: self.high_score,
        });
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn playfield(&self) -> Playfield {
        self.field
    }
}
