use crate::{command::Command, register::Register};

use super::{CommandProcessError, CommandProcessor};

#[derive(Default)]
pub struct InMemoryRegisterProcessor {
    register: Register,
}

impl InMemoryRegisterProcessor {
    pub fn new(register: Register) -> Self {
        Self { register }
    }
}

impl CommandProcessor for InMemoryRegisterProcessor {
    fn process_command(&mut self, command: &Command) -> Result<(), CommandProcessError> {
        match command {
            Command::Show | Command::Quit => {}
            Command::Put(bills) => self.register.put(bills)?,
            Command::Take(bills) => self.register.take(bills)?,
            Command::Change(amount) => {
                let change = self.register.change(*amount)?;
                tracing::debug!(amount, change = %change, "withdrawing change");
                self.register.take(&change)?;
            }
        };
        Ok(())
    }

    fn register(&self) -> &Register {
        &self.register
    }
}
