use std::collections::HashSet;

use rand::Rng;

use crate::config::{FOOD_COLOR, Playfield};
use crate::effect::Effect;
use crate::snake::Cell;

/// Food currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub cell: Cell,
}

impl Food {
    #[must_use]
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }

    /// Places food on a random free cell and emits its draw effect.
    ///
    /// Returns `None` when `occupied` already covers the whole board.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        field: Playfield,
        occupied: &HashSet<Cell>,
        effects: &mut Vec<Effect>,
    ) -> Option<Self> {
        let food = Self::new(spawn_cell(rng, field, occupied)?);
        effects.push(food.create_effect());
        Some(food)
    }

    #[must_use]
    pub fn create_effect(self) -> Effect {
        Effect::CreateFood {
            cell: self.cell,
            color: FOOD_COLOR,
        }
    }
}

/// Draws uniformly random grid-aligned cells until one is not in `occupied`.
///
/// Returns `None` when every cell is occupied.
#[must_use]
pub fn spawn_cell<R: Rng + ?Sized>(
    rng: &mut R,
    field: Playfield,
    occupied: &HashSet<Cell>,
) -> Option<Cell> {
    let taken = occupied.iter().filter(|cell| cell.is_within(field)).count();
    if taken >= field.total_cells() {
        return None;
    }

    loop {
        let column = rng.gen_range(0..field.columns());
        let row = rng.gen_range(0..field.rows());
        let cell = grid_cell(field, column, row);
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
}

fn grid_cell(field: Playfield, column: i32, row: i32) -> Cell {
    Cell {
        x: column * field.cell_size,
        y: row * field.cell_size,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::{BoundaryPolicy, FOOD_COLOR, Playfield};
    use crate::effect::Effect;
    use crate::snake::{Cell, Snake};

    use super::{Food, spawn_cell};

    fn small_field() -> Playfield {
        Playfield {
            width: 80,
            height: 60,
            cell_size: 20,
            policy: BoundaryPolicy::Wrap,
        }
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_cells([
            Cell { x: 0, y: 0 },
            Cell { x: 20, y: 0 },
            Cell { x: 40, y: 0 },
        ]);
        let occupied = snake.occupied();

        for _ in 0..100 {
            let cell = spawn_cell(&mut rng, small_field(), &occupied).expect("board has room");
            assert!(!snake.occupies(cell));
        }
    }

    #[test]
    fn spawned_cells_are_aligned_and_on_board() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = Playfield::standard(BoundaryPolicy::Wrap);

        for _ in 0..500 {
            let cell = spawn_cell(&mut rng, field, &HashSet::new()).expect("board is empty");
            assert_eq!(cell.x % field.cell_size, 0);
            assert_eq!(cell.y % field.cell_size, 0);
            assert!(cell.is_within(field));
        }
    }

    #[test]
    fn single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = small_field();
        let free = Cell { x: 40, y: 20 };
        let occupied: HashSet<Cell> = (0..field.rows())
            .flat_map(|row| (0..field.columns()).map(move |column| (column, row)))
            .map(|(column, row)| Cell {
                x: column * 20,
                y: row * 20,
            })
            .filter(|cell| *cell != free)
            .collect();

        assert_eq!(spawn_cell(&mut rng, field, &occupied), Some(free));
    }

    #[test]
    fn full_board_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        let field = small_field();
        let occupied: HashSet<Cell> = (0..field.rows())
            .flat_map(|row| (0..field.columns()).map(move |column| (column, row)))
            .map(|(column, row)| Cell {
                x: column * 20,
                y: row * 20,
            })
            .collect();
        let mut effects = Vec::new();

        assert_eq!(spawn_cell(&mut rng, field, &occupied), None);
        assert_eq!(Food::spawn(&mut rng, field, &occupied, &mut effects), None);
        assert!(effects.is_empty());
    }

    #[test]
    fn spawn_emits_create_food() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut effects = Vec::new();

        let food = Food::spawn(&mut rng, small_field(), &HashSet::new(), &mut effects)
            .expect("board is empty");

        assert_eq!(
            effects,
            vec![Effect::CreateFood {
                cell: food.cell,
                color: FOOD_COLOR,
            }]
        );
    }
}
