use std::{fs::File, io::Read};

use anyhow::{Context, Result};
use cash_register::bin_utils::Service;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let input: Box<dyn Read> = match std::env::args().nth(1) {
        Some(filename) => Box::new(
            File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?,
        ),
        None => Box::new(std::io::stdin()),
    };

    let service = Service {
        input,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|_line, err| {
            // the register's fixed messages are meant for the person at the till
            println!("{err}")
        }),
    };
    service.run()
}
