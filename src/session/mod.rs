//! Interactive session: user commands and the controller that applies them

pub mod command;
pub mod controller;

pub use command::Command;
pub use controller::{Outcome, Session};

use thiserror::Error;

/// Rejected user input. The simulator itself never fails; bad input is
/// stopped here.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("empty command")]
    EmptyCommand,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing {0} coordinate")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("invalid pointer position ({x}, {y})")]
    InvalidPointer { x: f32, y: f32 },

    #[error("cell ({column}, {row}) is outside the {columns}x{rows} board")]
    OutsideBoard {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },
}
