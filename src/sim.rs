//! The per-tick state machine.
//!
//! The first tick seeds the snake. Every later tick recovers its shape (from
//! the ordered [`Snake`], or from a grid scan in compatibility mode), moves the
//! head one cell, and vacates one body cell. The grid always mirrors the snake,
//! and the score is the number of body cells on it.

use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::{SimConfig, TailRule, Tracking, WallRule};
use crate::error::SnakeError;
use crate::grid::{Cell, Grid};
use crate::snake::{advance, farthest_from, is_interior, translate, Direction, Snake};
use crate::Coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Seeded,
    Moved { old_head: Coords, new_head: Coords, vacated: Option<Coords> },
    /// The wall rule refused to move the head out of the interior
    Blocked,
}

pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    snake: Option<Snake>,
    direction: Direction,
    frame: u64,
    score: usize,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, SnakeError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: SimConfig, rng: StdRng) -> Result<Self, SnakeError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;

        Ok(Simulation {
            config,
            grid,
            snake: None,
            direction: config.direction,
            frame: 0,
            score: config.initial_score,
            rng,
        })
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn step(&mut self) -> Result<StepOutcome, SnakeError> {
        self.frame += 1;

        let outcome = if self.frame == 1 {
            self.seed()
        } else {
            self.move_snake()?
        };

        let (head, body) = self.shape()?;
        self.score = body.len();

        info!(
            "Frame: {}, Score: {}, Direction: {:?}, Snake Head: {:?}, Snake body: {:?}",
            self.frame, self.score, self.direction, head, body
        );

        Ok(outcome)
    }

    /// Current head and body cells. Body order is tail first when the snake is
    /// tracked, row-major when it is scanned off the grid.
    pub fn shape(&self) -> Result<(Coords, Vec<Coords>), SnakeError> {
        match (self.config.tracking, &self.snake) {
            (Tracking::Sequence, Some(snake)) => Ok((snake.head(), snake.body().to_vec())),
            (Tracking::Sequence, None) => Err(SnakeError::MissingHead),
            (Tracking::GridScan, _) => {
                let located = self.grid.locate();
                let head = located.head.ok_or(SnakeError::MissingHead)?;
                Ok((head, located.body))
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn seed(&mut self) -> StepOutcome {
        let (width, height) = (self.grid.width(), self.grid.height());
        let snake = Snake::seed(&mut self.rng, self.config.initial_score, self.direction, width, height);

        for pos in snake.body() {
            self.grid.set(*pos, Cell::Body);
        }
        self.grid.set(snake.head(), Cell::Head);

        if self.config.tracking == Tracking::Sequence {
            self.snake = Some(snake);
        }

        StepOutcome::Seeded
    }

    fn move_snake(&mut self) -> Result<StepOutcome, SnakeError> {
        let (head, body) = self.shape()?;
        let (width, height) = (self.grid.width(), self.grid.height());

        if self.config.walls == WallRule::Stop && !is_interior(translate(head, self.direction), width, height) {
            info!("Blocked at {:?} heading {:?}", head, self.direction);
            return Ok(StepOutcome::Blocked);
        }

        let next = advance(head, self.direction, width, height);
        let vacated = match self.config.tail {
            TailRule::Farthest => farthest_from(next, &body),
            TailRule::Last => body.first().copied(),
        };

        match vacated {
            Some(cell) => {
                self.grid.set(cell, Cell::Empty);
                self.grid.set(head, Cell::Body);
            }
            None => self.grid.set(head, Cell::Empty),
        }
        self.grid.set(next, Cell::Head);

        if let Some(snake) = self.snake.as_mut() {
            snake.move_to(next, vacated);
        }

        Ok(StepOutcome::Moved { old_head: head, new_head: next, vacated })
    }
}
