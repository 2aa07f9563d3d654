//! Error types for board operations.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 1-14)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be a-n)
    FileOutOfBounds { file: usize },
    /// Square lies in one of the four removed corners
    CornerSquare { notation: String },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 1-14)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File index {file} out of bounds (must be a-n)")
            }
            SquareError::CornerSquare { notation } => {
                write!(f, "Square '{notation}' is in a removed corner")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string could not be split into two squares
    InvalidFormat { notation: String },
    /// Invalid square notation in move
    InvalidSquare { notation: String, source: SquareError },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { notation } => {
                write!(f, "Cannot parse move '{notation}'")
            }
            MoveParseError::InvalidSquare { notation, source } => {
                write!(f, "Invalid square in '{notation}': {source}")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::InvalidSquare { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error type for invalid positions produced by `BoardBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A color that is still in the game has no king
    MissingKing { color: String },
    /// A color has more than one king
    MultipleKings { color: String },
    /// The side to move has been eliminated
    SideToMoveEliminated { color: String },
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::MissingKing { color } => {
                write!(f, "{color} is not eliminated but has no king")
            }
            BuilderError::MultipleKings { color } => {
                write!(f, "{color} has more than one king")
            }
            BuilderError::SideToMoveEliminated { color } => {
                write!(f, "Side to move {color} is eliminated")
            }
        }
    }
}

impl std::error::Error for BuilderError {}
