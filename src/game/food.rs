use rand::Rng;
use std::collections::HashSet;

use super::config::GridSize;
use super::vector::Vector;

/// The food items currently on the grid
///
/// Every position is unique and, at the moment it was generated, was not
/// covered by the snake.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSet {
    grid: GridSize,
    positions: HashSet<Vector>,
}

impl FoodSet {
    /// Create an empty food set for the given grid
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            positions: HashSet::new(),
        }
    }

    /// Discard all food and place `count` fresh items on free cells
    pub fn initialize<R: Rng>(&mut self, count: usize, snake: &[Vector], rng: &mut R) {
        self.positions.clear();
        self.positions.reserve(count);

        for _ in 0..count {
            let pos = self.generate_free_position(snake, rng);
            self.positions.insert(pos);
        }
    }

    /// Remove `eaten` and put a new item on a free cell
    ///
    /// Returns the new position, or `None` if `eaten` was not food.
    pub fn replace<R: Rng>(
        &mut self,
        eaten: Vector,
        snake: &[Vector],
        rng: &mut R,
    ) -> Option<Vector> {
        if !self.positions.remove(&eaten) {
            return None;
        }

        let pos = self.generate_free_position(snake, rng);
        self.positions.insert(pos);
        Some(pos)
    }

    /// Draw uniformly random cells until one is neither food nor snake
    ///
    /// # Panics
    ///
    /// Panics if every cell of the grid is already taken.
    pub fn generate_free_position<R: Rng>(&self, snake: &[Vector], rng: &mut R) -> Vector {
        assert!(
            self.free_cells(snake) > 0,
            "no free cell left on a {}x{} grid ({} food, {} snake segments)",
            self.grid.width,
            self.grid.height,
            self.positions.len(),
            snake.len()
        );

        loop {
            let pos = Vector::new(
                rng.gen_range(0..self.grid.width),
                rng.gen_range(0..self.grid.height),
            );

            if !self.positions.contains(&pos) && !snake.contains(&pos) {
                return pos;
            }
        }
    }

    /// Number of cells covered by neither food nor snake
    pub fn free_cells(&self, snake: &[Vector]) -> usize {
        let snake_only: HashSet<&Vector> = snake
            .iter()
            .filter(|pos| self.grid.contains(**pos) && !self.positions.contains(*pos))
            .collect();

        self.grid
            .area()
            .saturating_sub(self.positions.len() + snake_only.len())
    }

    pub fn contains(&self, pos: Vector) -> bool {
        self.positions.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &HashSet<Vector> {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.positions.iter()
    }

    #[cfg(test)]
    pub(crate) fn from_positions(
        grid: GridSize,
        positions: impl IntoIterator<Item = Vector>,
    ) -> Self {
        Self {
            grid,
            positions: positions.into_iter().collect(),
        }
    }
}
