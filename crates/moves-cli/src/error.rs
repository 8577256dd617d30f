use crate::config::ConfigError;
use moves_core::{OffBoard, StepError};
use thiserror::Error;

/// Errors that end a run before or while output is produced.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("wrong number of step arguments: expected 0 or 5, got {0}")]
    WrongArgumentCount(usize),

    #[error("invalid {name} step count: {source}")]
    InvalidStep {
        name: &'static str,
        source: StepError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{piece} sequence {source}")]
    OffBoard {
        piece: &'static str,
        source: OffBoard,
    },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("generator thread panicked")]
    GeneratorPanicked,
}

impl CliError {
    /// Every failure maps to exit status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// True for argument errors, which are followed by the usage text.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            CliError::WrongArgumentCount(_) | CliError::InvalidStep { .. }
        )
    }
}
