use std::io::Read;

use csv::{StringRecordsIntoIter, Trim};

use crate::command::{Command, CommandError};

/// Reads one command per line, tokens separated by spaces.
/// Lines starting with `#` are skipped.
pub struct CommandParser<R> {
    iter: StringRecordsIntoIter<R>,
}

impl<R> CommandParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(source);

        Self {
            iter: reader.into_records(),
        }
    }
}

impl<R> Iterator for CommandParser<R>
where
    R: Read,
{
    /// Line number with the parsed command. Only I/O failures surface as the
    /// outer error; a line that is not valid text is an invalid command.
    type Item = csv::Result<(u64, Result<Command, CommandError>)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.iter.next()? {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Some(Err(err)),
                Err(err) => {
                    let line = err.position().map_or(0, |pos| pos.line());
                    return Some(Ok((line, Err(CommandError::UnreadableLine { line }))));
                }
            };
            let line = record.position().map_or(0, |pos| pos.line());
            // repeated spaces leave empty fields behind
            let tokens: Vec<&str> = record.iter().filter(|field| !field.is_empty()).collect();
            let Some((token, operands)) = tokens.split_first() else {
                continue;
            };
            return Some(Ok((line, Command::parse_command(token, operands))));
        }
    }
}
