//! Hard-coded configuration and the rule set a [`crate::sim::Simulation`] runs with.

use crate::error::SnakeError;
use crate::snake::Direction;
use crate::GridInt;

pub const WORLD_WIDTH: GridInt = 20;
pub const WORLD_HEIGHT: GridInt = 15;

/// Body length the snake is seeded with
pub const INITIAL_SCORE: usize = 2;
pub const INITIAL_DIRECTION: Direction = Direction::Up;

/// The loop wakes this often to drain key events
pub const TICK_INTERVAL_MS: u64 = 10;
/// Wakes per simulation step (25 * 10ms = one step every 250ms)
pub const TICKS_UNTIL_UPDATE: u64 = 25;

pub const LOG_FILE: &str = "snake.log";

/// Where the snake's shape is read from at the start of every tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tracking {
    /// The ordered segment list is the source of truth; the grid only mirrors it.
    Sequence,
    /// Rebuild head and body from a full grid scan every tick.
    GridScan,
}

/// Which body cell is cleared when the snake moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TailRule {
    /// The body cell farthest from the new head. Ties go to the first cell in row-major order.
    Farthest,
    /// The structurally last segment, as in a conventional snake.
    Last,
}

/// What happens when the head is steered into a wall.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WallRule {
    /// Pin the offending axis to the innermost interior cell and keep moving.
    Clamp,
    /// Refuse the move and report the tick as blocked.
    Stop,
}

#[derive(Copy, Clone, Debug)]
pub struct SimConfig {
    pub width: GridInt,
    pub height: GridInt,
    pub initial_score: usize,
    pub direction: Direction,
    pub tracking: Tracking,
    pub tail: TailRule,
    pub walls: WallRule,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            initial_score: INITIAL_SCORE,
            direction: INITIAL_DIRECTION,
            tracking: Tracking::Sequence,
            tail: TailRule::Farthest,
            walls: WallRule::Clamp,
        }
    }
}

impl SimConfig {
    /// Reads the snake back from the grid every tick.
    pub fn scanning() -> Self {
        SimConfig { tracking: Tracking::GridScan, ..Self::default() }
    }

    /// Vacates the true tail and stops at walls instead of sliding along them.
    pub fn conventional() -> Self {
        SimConfig { tail: TailRule::Last, walls: WallRule::Stop, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), SnakeError> {
        if self.width < 3 || self.height < 3 {
            return Err(SnakeError::InvalidDimensions { width: self.width, height: self.height });
        }

        if self.tracking == Tracking::GridScan && self.tail == TailRule::Last {
            return Err(SnakeError::UnorderedTailRule);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig::scanning().validate().is_ok());
        assert!(SimConfig::conventional().validate().is_ok());
    }

    #[test]
    fn default_matches_reference_world() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height), (20, 15));
        assert_eq!(config.initial_score, 2);
        assert_eq!(config.direction, Direction::Up);
    }

    #[test]
    fn rejects_grid_without_interior() {
        for (width, height) in [(0, 15), (20, -1), (2, 15), (20, 2)].iter() {
            let config = SimConfig { width: *width, height: *height, ..SimConfig::default() };
            assert!(matches!(config.validate(), Err(SnakeError::InvalidDimensions { .. })));
        }
    }

    #[test]
    fn rejects_last_segment_rule_when_scanning() {
        let config = SimConfig { tail: TailRule::Last, ..SimConfig::scanning() };
        assert!(matches!(config.validate(), Err(SnakeError::UnorderedTailRule)));
    }
}
