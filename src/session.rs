//! The interactive command loop.
//!
//! Reads one line at a time, hands it to the [`Assistant`] and writes the
//! reply. Commands are processed strictly one after another.

use crate::commands::{Assistant, GREETING, PROMPT};
use anyhow::Result;
use std::borrow::Cow;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Run the assistant over arbitrary async I/O until `close`/`exit` or end of input.
///
/// # Arguments
/// * `assistant` - The dispatcher holding the directory
/// * `input` - Source of command lines
/// * `output` - Destination for the greeting, prompts and replies
pub async fn run_session<R, W>(
    assistant: &mut Assistant,
    mut input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(output, GREETING).await?;

    let mut buf = Vec::new();
    let mut handled = 0usize;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = read_line(&mut input, &mut buf).await? else {
            tracing::info!(handled, "Input closed");
            break;
        };

        let reply = assistant.handle_line(&line);
        handled += 1;

        if let Some(text) = reply.text() {
            write_line(output, text).await?;
        }
        if reply.is_exit() {
            tracing::info!(handled, "Exit requested");
            break;
        }
    }

    output.flush().await?;
    Ok(())
}

/// Run the assistant on the process's stdin and stdout.
pub async fn run_stdio(assistant: &mut Assistant) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_session(assistant, stdin, &mut stdout).await
}

/// Read one line, decoding invalid UTF-8 lossily so a bad byte never ends the session.
async fn read_line<R>(input: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }

    let text = String::from_utf8_lossy(buf);
    if matches!(text, Cow::Owned(_)) {
        tracing::debug!(bytes = buf.len(), "Input line was not valid UTF-8");
    }
    let line = text.trim_end_matches(['\n', '\r']).to_string();
    Ok(Some(line))
}

async fn write_line<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}
