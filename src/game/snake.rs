use super::config::GridSize;
use super::food::FoodSet;
use super::vector::Vector;

/// Outcome of moving the snake by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    /// The new head would leave the grid; the body was not touched
    OutOfBounds,
    /// The new head landed on another segment
    SelfCollision,
    /// The snake moved, growing by one segment if it ate
    Moved { ate: bool },
}

impl AdvanceResult {
    /// Returns true if this outcome ends the current game
    pub fn is_fatal(&self) -> bool {
        matches!(self, AdvanceResult::OutOfBounds | AdvanceResult::SelfCollision)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeBody {
    /// Body segments, with head at index 0
    segments: Vec<Vector>,
}

impl SnakeBody {
    /// Create a one-segment snake at `head`
    pub fn new(head: Vector) -> Self {
        Self {
            segments: vec![head],
        }
    }

    /// Create a snake from explicit segments, head first
    ///
    /// Returns `None` for an empty segment list.
    pub fn from_segments(segments: Vec<Vector>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self { segments })
    }

    /// Replace the body with a single segment at the grid center
    pub fn reset(&mut self, grid: GridSize) {
        self.segments.clear();
        self.segments.push(grid.center());
    }

    pub fn head(&self) -> Vector {
        self.segments[0]
    }

    pub fn tail(&self) -> Vector {
        self.segments[self.segments.len() - 1]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Vector] {
        &self.segments
    }

    /// Segments excluding the head
    pub fn body_segments(&self) -> &[Vector] {
        &self.segments[1..]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, pos: Vector) -> bool {
        self.segments.contains(&pos)
    }

    /// Move the head by `direction` and drag the body along
    ///
    /// A zero `direction` is a valid idle step: the head stays put and the
    /// usual checks still run. Growth appends the cell vacated by the old
    /// tail, and the self-collision check runs after any growth.
    pub fn advance(&mut self, direction: Vector, grid: GridSize, food: &FoodSet) -> AdvanceResult {
        let new_head = self.head() + direction;

        if !grid.contains(new_head) {
            return AdvanceResult::OutOfBounds;
        }

        // Each segment takes the old position of the one in front of it
        let mut last_position = std::mem::replace(&mut self.segments[0], new_head);
        for segment in self.segments[1..].iter_mut() {
            last_position = std::mem::replace(segment, last_position);
        }

        let ate = food.contains(new_head);
        if ate {
            self.segments.push(last_position);
        }

        if self.body_segments().contains(&new_head) {
            return AdvanceResult::SelfCollision;
        }

        AdvanceResult::Moved { ate }
    }
}
