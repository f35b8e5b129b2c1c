//! REPL Module
//!
//! Reads commands line by line and dispatches them to a [`Session`].

mod commands;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::Result;

pub use commands::{Command, Flow, Session};

/// Prompt printed before each line of input
pub const PROMPT: &str = "Pokedex > ";

/// Trims, lowercases and splits a line into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Runs the prompt loop until `exit` or end of input.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        if session.handle_line(&line, out).await? == Flow::Exit {
            break;
        }
    }

    Ok(())
}
