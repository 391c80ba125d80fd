use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::core::style;

/// Resolve the token from the command line, or prompt for one line of input.
///
/// Surrounding whitespace is trimmed from either source, so unlike a plain
/// `argv[1]` lookup a whitespace-only argument counts as no token. Returns
/// `None` when the result is empty, including when input ends before a line
/// is read.
pub async fn acquire<R, W>(arg: Option<String>, input: &mut R, out: &mut W) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let raw = match arg {
        Some(token) => token,
        None => {
            writeln!(out, "Please enter your GitHub Personal Access Token:")?;
            writeln!(out, "{}", style::hint("(or press Ctrl+C to cancel)"))?;
            out.flush()?;

            let mut line = String::new();
            input
                .read_line(&mut line)
                .await
                .context("Failed to read token from stdin")?;
            line
        }
    };

    let token = raw.trim();
    Ok((!token.is_empty()).then(|| token.to_string()))
}
