//! Terminal-free simulation driven by a turn script.

use serde::Serialize;

use crate::config::BoundaryPolicy;
use crate::effect::Effect;
use crate::error::AppError;
use crate::game::{GameController, GameStatus};
use crate::input::Direction;

/// One effect together with the tick that produced it (0 is the game start).
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TraceEvent {
    pub tick: u64,
    #[serde(flatten)]
    pub effect: Effect,
}

/// Parses a turn script: `u d l r` turn, `.` keeps going. Whitespace is skipped.
pub fn parse_script(script: &str) -> Result<Vec<Option<Direction>>, AppError> {
    script
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch.to_ascii_lowercase() {
            'u' => Ok(Some(Direction::Up)),
            'd' => Ok(Some(Direction::Down)),
            'l' => Ok(Some(Direction::Left)),
            'r' => Ok(Some(Direction::Right)),
            '.' => Ok(None),
            other => Err(AppError::InvalidScript(other)),
        })
        .collect()
}

/// Starts a seeded game and runs up to `max_ticks` ticks, applying one script
/// step before each tick. Stops early on game over.
#[must_use]
pub fn simulate(
    policy: BoundaryPolicy,
    seed: u64,
    script: &[Option<Direction>],
    max_ticks: u64,
) -> Vec<TraceEvent> {
    let mut game = GameController::new_with_seed(policy, seed);
    let mut trace: Vec<TraceEvent> = tagged(0, game.start_game().effects).collect();

    for tick in 1..=max_ticks {
        let step = usize::try_from(tick - 1).ok().and_then(|i| script.get(i));
        if let Some(Some(direction)) = step {
            game.change_direction(*direction);
        }

        trace.extend(tagged(tick, game.tick().effects));
        if game.status() == GameStatus::GameOver {
            break;
        }
    }

    trace
}

fn tagged(tick: u64, effects: Vec<Effect>) -> impl Iterator<Item = TraceEvent> {
    effects
        .into_iter()
        .map(move |effect| TraceEvent { tick, effect })
}
