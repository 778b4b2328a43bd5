use thiserror::Error;

use crate::GameState;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must hold tiles 1 to 8 and exactly one blank")]
    InvariantViolation,
    #[error("Cannot {action} while {state:?}")]
    WrongState {
        action: &'static str,
        state: GameState,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
