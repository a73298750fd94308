use crate::args::{Command, ShellLine};
use crate::writer::{self, OutputFormat};

use bcc::transport::Transport;
use bcc::{AccountConsoleClient, Result};

use std::io::{self, Write};

use clap::Parser;

use thiserror::Error;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unbalanced quotes in command: {0}")]
    Quoting(String),

    #[error("{0}")]
    Usage(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum ShellInput {
    Blank,
    Exit,
    Command(Command),
}

pub fn parse_line(line: &str) -> std::result::Result<ShellInput, ShellError> {
    let words = shlex::split(line).ok_or_else(|| ShellError::Quoting(line.trim().to_string()))?;

    if words.is_empty() {
        return Ok(ShellInput::Blank);
    }

    if words[0] == "exit" || words[0] == "quit" {
        return Ok(ShellInput::Exit);
    }

    return ShellLine::try_parse_from(words)
        .map(|parsed| ShellInput::Command(parsed.command))
        .map_err(|e| ShellError::Usage(e.render().to_string()));
}

/// Loads the account list, then runs one command per stdin line until `exit` or EOF
pub async fn run<T: Transport>(client: &AccountConsoleClient<T>, format: OutputFormat) -> Result {
    let input = BufReader::new(tokio::io::stdin());

    return run_with(client, input, &mut io::stdout(), &mut io::stderr(), format).await;
}

/// The prompt goes to `prompt` so `out` carries only outcomes.
async fn run_with<T, R, O, P>(
    client: &AccountConsoleClient<T>,
    input: R,
    out: &mut O,
    prompt: &mut P,
    format: OutputFormat,
) -> Result
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    O: Write,
    P: Write,
{
    let outcome = client.load_accounts().await;
    writer::write_outcome(out, &outcome, format)?;

    let mut lines = input.lines();

    loop {
        write!(prompt, "> ")?;
        prompt.flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        log::debug!("Shell input: {line:?}");

        match parse_line(&line) {
            Ok(ShellInput::Blank) => continue,
            Ok(ShellInput::Exit) => break,
            Ok(ShellInput::Command(command)) => {
                let outcome = crate::dispatch(client, command).await;
                writer::write_outcome(out, &outcome, format)?;
            }
            Err(e) => writeln!(out, "{}", e.to_string().trim_end())?,
        }
    }

    writeln!(prompt)?;

    return Ok(());
}
