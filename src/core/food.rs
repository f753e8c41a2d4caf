//! Food placement - seeded uniform sampling over free cells
//!
//! Uses rejection sampling: draw a cell uniformly over the whole grid and
//! resample while it is covered by the snake. With the snake far below 400
//! cells in practice, the expected number of draws stays close to one; a
//! fully occupied board is unreachable under the speed tuning.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::snake::Snake;
use crate::types::{Point, GRID_SIZE};

/// Seeded source of food positions.
///
/// Two spawners built from the same seed hand out identical sequences,
/// which keeps whole game runs reproducible under test.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: SmallRng,
    seed: u64,
}

impl FoodSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this spawner was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a food cell uniformly from the cells not covered by `snake`.
    pub fn spawn(&mut self, snake: &Snake) -> Point {
        loop {
            let p = Point::new(
                self.rng.gen_range(0..GRID_SIZE),
                self.rng.gen_range(0..GRID_SIZE),
            );
            if !snake.contains(p) {
                return p;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_CELLS;

    #[test]
    fn test_spawn_never_lands_on_the_snake() {
        let snake = Snake::spawn();
        let mut spawner = FoodSpawner::new(7);

        for _ in 0..200 {
            let food = spawner.spawn(&snake);
            assert!(food.in_bounds());
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let snake = Snake::spawn();
        let mut a = FoodSpawner::new(42);
        let mut b = FoodSpawner::new(42);

        for _ in 0..50 {
            assert_eq!(a.spawn(&snake), b.spawn(&snake));
        }
    }

    #[test]
    fn test_sampling_reaches_the_whole_grid() {
        let snake = Snake::spawn();
        let mut spawner = FoodSpawner::new(1);
        let mut seen = std::collections::HashSet::new();

        // Plenty of draws relative to the cell count; every free cell
        // should eventually show up under uniform sampling.
        for _ in 0..GRID_CELLS * 50 {
            seen.insert(spawner.spawn(&snake));
        }
        assert_eq!(seen.len(), GRID_CELLS - snake.len());
    }
}
