//! Snake body - the ordered chain of occupied cells
//!
//! Cells are stored head first, tail last. The body never contains
//! duplicate cells while the game is alive; the engine's self-collision
//! check guarantees that before every advance.

use std::collections::VecDeque;

use crate::types::{Direction, Point, GRID_SIZE, INITIAL_SNAKE_LEN};

/// The snake body, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    cells: VecDeque<Point>,
}

impl Snake {
    /// The starting body: length 2, centered, head one cell right of the
    /// tail so the opening move continues rightwards.
    pub fn spawn() -> Self {
        let head = Point::new(GRID_SIZE / 2, GRID_SIZE / 2);
        let mut cells = VecDeque::with_capacity(INITIAL_SNAKE_LEN);
        cells.push_back(head);
        cells.push_back(Point::new(head.x - 1, head.y));
        Self { cells }
    }

    pub fn head(&self) -> Point {
        // The body is never empty: spawn() seeds two cells and advance()
        // always pushes before it pops.
        self.cells.front().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether any body cell (head and tail included) covers `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.cells.iter().any(|&c| c == p)
    }

    /// The cell the head would occupy after one step in `dir`.
    /// May lie outside the board; callers run the wall check.
    pub fn next_head(&self, dir: Direction) -> Point {
        self.head().step(dir)
    }

    /// Move the head onto `new_head`. With `grow` the tail stays in place
    /// (net length +1), otherwise the tail cell is vacated.
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.cells.push_front(new_head);
        if !grow {
            self.cells.pop_back();
        }
    }

    /// Body cells in order, head first.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().copied()
    }

    /// Build a body from explicit cells (head first) for tests.
    #[cfg(test)]
    pub fn from_cells(cells: Vec<Point>) -> Self {
        assert!(cells.len() >= 2, "snake is never shorter than two cells");
        Self {
            cells: cells.into(),
        }
    }
}
