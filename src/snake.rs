use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::config::{BODY_PARTS, BoundaryPolicy, Playfield, SNAKE_COLOR};
use crate::effect::Effect;
use crate::input::Direction;

/// Grid-aligned position in pixel units.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns true when the cell lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn is_within(self, field: Playfield) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < field.width && self.y < field.height
    }

    /// Returns this cell wrapped into the board on both axes.
    #[must_use]
    pub fn wrapped(self, field: Playfield) -> Self {
        Self {
            x: self.x.rem_euclid(field.width),
            y: self.y.rem_euclid(field.height),
        }
    }

    /// Returns the neighbouring cell one step towards `direction`, unbounded.
    #[must_use]
    pub fn step(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Handle the presentation layer uses to address one drawn segment.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct SegmentId(pub u64);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Segment {
    cell: Cell,
    id: SegmentId,
}

/// Snake body, head first.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Segment>,
    next_id: u64,
}

impl Snake {
    /// Lays out `BODY_PARTS` segments in a row centred on the board, head at
    /// the centre and the rest trailing to the left.
    #[must_use]
    pub fn initialize(field: Playfield, effects: &mut Vec<Effect>) -> Self {
        let head = Cell {
            x: field.width / 2,
            y: field.height / 2,
        };
        let cells = (0..BODY_PARTS).scan(head, |cell, _| {
            let current = *cell;
            *cell = cell.step(Direction::Left, field.cell_size);
            Some(current)
        });

        let snake = Self::from_cells(cells);
        effects.extend(snake.body.iter().map(|segment| segment.create_effect()));
        snake
    }

    /// Creates a snake from explicit cells (first is head) without emitting effects.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            next_id: 0,
        };
        for cell in cells {
            let segment = snake.new_segment(cell);
            snake.body.push_back(segment);
        }
        snake
    }

    /// Advances one cell towards `direction`: a new head goes in, the old tail
    /// comes out.
    pub fn move_towards(
        &mut self,
        direction: Direction,
        field: Playfield,
        effects: &mut Vec<Effect>,
    ) {
        let mut next = self.head().step(direction, field.cell_size);
        if field.policy == BoundaryPolicy::Wrap {
            next = next.wrapped(field);
        }

        let head = self.new_segment(next);
        self.body.push_front(head);
        effects.push(head.create_effect());

        if let Some(tail) = self.body.pop_back() {
            effects.push(Effect::RemoveSegment { id: tail.id });
        }
    }

    /// Grows by duplicating the tail when the head sits on `food`.
    pub fn eat_food(&mut self, food: Cell, effects: &mut Vec<Effect>) -> bool {
        if self.head() != food {
            return false;
        }

        let Some(tail) = self.body.back().map(|segment| segment.cell) else {
            return false;
        };
        let segment = self.new_segment(tail);
        self.body.push_back(segment);
        effects.push(segment.create_effect());
        true
    }

    /// Returns true when the head overlaps the body or, with hard walls,
    /// lies off the board.
    #[must_use]
    pub fn check_collisions(&self, field: Playfield) -> bool {
        let head = self.head();
        if field.policy == BoundaryPolicy::HardWall && !head.is_within(field) {
            return true;
        }

        self.body.iter().skip(1).any(|segment| segment.cell == head)
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.body
            .front()
            .expect("snake body must always contain at least one segment")
            .cell
    }

    /// Returns the current tail cell.
    #[must_use]
    pub fn tail(&self) -> Option<Cell> {
        self.body.back().map(|segment| segment.cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.iter().any(|segment| segment.cell == cell)
    }

    /// Iterates over body cells from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().map(|segment| segment.cell)
    }

    /// Set of every cell the body covers.
    #[must_use]
    pub fn occupied(&self) -> HashSet<Cell> {
        self.cells().collect()
    }

    fn new_segment(&mut self, cell: Cell) -> Segment {
        let id = SegmentId(self.next_id);
        self.next_id += 1;
        Segment { cell, id }
    }
}

impl Segment {
    fn create_effect(self) -> Effect {
        Effect::CreateSegment {
            id: self.id,
            cell: self.cell,
            color: SNAKE_COLOR,
        }
    }
}
