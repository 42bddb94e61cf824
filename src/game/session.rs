use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tracing::{debug, info};

use super::config::{GameConfig, GridSize};
use super::food::FoodSet;
use super::snake::{AdvanceResult, SnakeBody};
use super::vector::Vector;

/// Whether ticks are currently processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Paused,
}

/// What a single call to [`GameSession::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is paused; nothing changed
    Paused,
    /// The snake was advanced; fatal results have already restarted the game
    Advanced(AdvanceResult),
}

impl TickOutcome {
    /// Returns true if this tick ended a game and started a new one
    pub fn restarted(&self) -> bool {
        matches!(self, TickOutcome::Advanced(result) if result.is_fatal())
    }
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid: GridSize,
    /// Snake segments, head first
    pub snake: Vec<Vector>,
    pub food: HashSet<Vector>,
    pub score: u32,
    pub running: bool,
}

/// One game of snake: the snake, its food, the score and the input state
///
/// A collision is not terminal for the session; it starts a fresh game in
/// place. All mutation goes through [`tick`](Self::tick),
/// [`set_direction`](Self::set_direction), [`toggle_pause`](Self::toggle_pause)
/// and [`reset`](Self::reset).
pub struct GameSession {
    config: GameConfig,
    grid: GridSize,
    snake: SnakeBody,
    food: FoodSet,
    direction: Vector,
    score: u32,
    state: SessionState,
    rng: StdRng,
}

impl GameSession {
    /// Start a new game with the given configuration
    ///
    /// The configuration is expected to have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = config.grid();

        let mut session = Self {
            snake: SnakeBody::new(grid.center()),
            food: FoodSet::new(grid),
            grid,
            config,
            direction: Vector::ZERO,
            score: 0,
            state: SessionState::Running,
            rng,
        };
        session.reset();
        session
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.state == SessionState::Paused {
            return TickOutcome::Paused;
        }

        let result = self.snake.advance(self.direction, self.grid, &self.food);

        match result {
            AdvanceResult::OutOfBounds | AdvanceResult::SelfCollision => {
                info!(
                    ?result,
                    score = self.score,
                    length = self.snake.len(),
                    "Game over, starting a new game"
                );
                self.reset();
            }
            AdvanceResult::Moved { ate: true } => {
                self.score += 1;
                let head = self.snake.head();
                let spawned = self.food.replace(head, self.snake.segments(), &mut self.rng);
                debug!(
                    %head,
                    score = self.score,
                    length = self.snake.len(),
                    ?spawned,
                    "Food eaten"
                );
            }
            AdvanceResult::Moved { ate: false } => {}
        }

        TickOutcome::Advanced(result)
    }

    /// Set the direction used by the following ticks
    ///
    /// Reversing into the body is allowed and dies on the next tick.
    pub fn set_direction(&mut self, direction: Vector) {
        debug!(%direction, "Direction set");
        self.direction = direction;
    }

    /// Flip between running and paused
    pub fn toggle_pause(&mut self) -> SessionState {
        self.state = match self.state {
            SessionState::Running => SessionState::Paused,
            SessionState::Paused => SessionState::Running,
        };
        info!(state = ?self.state, "Pause toggled");
        self.state
    }

    /// Start a fresh, running game on the same grid
    pub fn reset(&mut self) {
        self.snake.reset(self.grid);
        self.food
            .initialize(self.config.food_count, self.snake.segments(), &mut self.rng);
        self.score = 0;
        self.direction = Vector::ZERO;
        self.state = SessionState::Running;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            snake: self.snake.segments().to_vec(),
            food: self.food.positions().clone(),
            score: self.score,
            running: self.is_running(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn food(&self) -> &FoodSet {
        &self.food
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
