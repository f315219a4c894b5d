use thiserror::Error;

use crate::GridInt;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("grid of {width}x{height} has no playable interior (minimum is 3x3)")]
    InvalidDimensions { width: GridInt, height: GridInt },
    #[error("the last-segment tail rule needs an ordered snake, not a grid scan")]
    UnorderedTailRule,
    #[error("no snake head found on the grid")]
    MissingHead,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
