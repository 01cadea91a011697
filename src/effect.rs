//! Abstract draw commands emitted by the engine.
//!
//! The engine never touches a screen. Every state change that should become
//! visible is described by an [`Effect`]; a presentation adapter folds them
//! into whatever it draws with.

use serde::Serialize;

use crate::config::Rgb;
use crate::snake::{Cell, SegmentId};

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    CreateSegment {
        id: SegmentId,
        cell: Cell,
        color: Rgb,
    },
    RemoveSegment {
        id: SegmentId,
    },
    CreateFood {
        cell: Cell,
        color: Rgb,
    },
    RemoveFood,
    ClearBoard,
    DisplayScore {
        text: String,
    },
    DisplayGameOver {
        score: u32,
        high_score: u32,
    },
    DisplayTitle,
}

/// Text shown in the score label above the board.
#[must_use]
pub fn score_text(score: u32) -> String {
    format!("Score:{score}")
}
