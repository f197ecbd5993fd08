use std::fmt;
use std::io;

use thiserror::Error;

/// Which of the two generated scripts an output failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TerravaletError {
    #[error("reading the terraform plan: {0}")]
    Input(#[source] io::Error),

    #[error("line {line:?}, unexpected action {action:?}")]
    Parse { line: String, action: String },

    #[error("writing the {direction} script: {source}")]
    Output {
        direction: Direction,
        #[source]
        source: io::Error,
    },
}
