use std::str::FromStr;

use serde::{
    Deserialize,
    de::{IntoDeserializer, value::StrDeserializer},
};
use thiserror::Error;

use crate::register::Register;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Show,
    Put,
    Take,
    Change,
    Quit,
}

impl FromStr for CommandKind {
    type Err = serde::de::value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: StrDeserializer<'_, Self::Err> = s.into_deserializer();
        Self::deserialize(token)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Sorry - Invalid Command")]
    InvalidCommand { token: String },
    /// The line is not valid UTF-8 text.
    #[error("Sorry - Invalid Command")]
    UnreadableLine { line: u64 },
    #[error("Sorry - Invalid Amount")]
    InvalidAmount { kind: CommandKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Put(Register),
    Take(Register),
    /// Make change for the amount and withdraw it.
    Change(i64),
    Quit,
}

impl Command {
    /// Builds a command from its leading token and the operand tokens after it.
    pub fn parse_command(token: &str, operands: &[&str]) -> Result<Self, CommandError> {
        let kind = CommandKind::from_str(token).map_err(|_| CommandError::InvalidCommand {
            token: token.to_owned(),
        })?;
        match kind {
            CommandKind::Show | CommandKind::Quit if !operands.is_empty() => {
                Err(CommandError::InvalidCommand {
                    token: token.to_owned(),
                })
            }
            CommandKind::Show => Ok(Self::Show),
            CommandKind::Quit => Ok(Self::Quit),
            CommandKind::Put => Ok(Self::Put(Self::parse_register(kind, operands)?)),
            CommandKind::Take => Ok(Self::Take(Self::parse_register(kind, operands)?)),
            CommandKind::Change => {
                let [amount] = Self::parse_amounts::<1>(kind, operands)?;
                Ok(Self::Change(amount))
            }
        }
    }

    fn parse_register(kind: CommandKind, operands: &[&str]) -> Result<Register, CommandError> {
        Self::parse_amounts(kind, operands).map(Register::from_counts)
    }

    /// Every operand must be present and numeric; negative values are left
    /// for the register to reject.
    fn parse_amounts<const N: usize>(
        kind: CommandKind,
        operands: &[&str],
    ) -> Result<[i64; N], CommandError> {
        let Ok(operands) = <&[&str; N]>::try_from(operands) else {
            return Err(CommandError::InvalidAmount { kind });
        };
        let mut amounts = [0; N];
        for (amount, operand) in amounts.iter_mut().zip(operands) {
            *amount = operand
                .parse()
                .map_err(|_| CommandError::InvalidAmount { kind })?;
        }
        Ok(amounts)
    }
}
