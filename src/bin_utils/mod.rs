//! This module could be a separate crate on its own, to drive [`cash_register`] from a
//! terminal, but it is kept here so the integration tests can run whole sessions.

use std::io::{Read, Write};

use crate::{
    command::Command,
    processor::{
        CommandProcessError, CommandProcessor, in_memory_processor::InMemoryRegisterProcessor,
    },
};
use anyhow::{Context, Result};
use command_parser::CommandParser;
pub mod command_parser;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, CommandProcessError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    /// Runs commands against an empty register until `quit` or end of input,
    /// writing the register after every successful command.
    pub fn run(self) -> Result<()> {
        self.run_with(InMemoryRegisterProcessor::default())
    }

    pub fn run_with<P>(mut self, mut processor: P) -> Result<()>
    where
        P: CommandProcessor,
    {
        writeln!(self.output, "ready").context("Failed to write to output")?;
        self.output.flush().context("Failed to flush output")?;

        let mut processed = 0_usize;
        for item in CommandParser::new(self.input) {
            let (line, parsed) = item.context("Failed to read commands")?;
            let command = match parsed {
                Ok(command) => command,
                Err(err) => {
                    tracing::debug!(line, %err, "rejected command");
                    (self.error_printer)(line, err.into());
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }

            tracing::debug!(line, ?command, "processing command");
            if let Err(err) = processor.process_command(&command) {
                tracing::debug!(line, %err, "command failed");
                (self.error_printer)(line, err);
                continue;
            }
            processed += 1;
            writeln!(self.output, "{}", processor.register())
                .context("Failed to write to output")?;
            self.output.flush().context("Failed to flush output")?;
        }

        tracing::info!(
            processed,
            register = %processor.register(),
            "session finished"
        );
        Ok(())
    }
}
