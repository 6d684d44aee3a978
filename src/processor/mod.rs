use thiserror::Error;

use crate::{
    bundle::CashError,
    command::{Command, CommandError},
    register::Register,
};

pub mod in_memory_processor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandProcessError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    CashErr(#[from] CashError),
}

pub trait CommandProcessor {
    /// Applies one command to the session's register. `Show` and `Quit`
    /// leave it untouched.
    fn process_command(&mut self, command: &Command) -> Result<(), CommandProcessError>;

    fn register(&self) -> &Register;
}
