//! Line-pipe bridge: JSON requests over stdin, responses over stdout

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::bridge::RequestHandler;

/// Serve requests from `reader` until it closes, one JSON value per line
///
/// Each response is written as a single line and flushed immediately so the
/// peer can pipeline requests. A line that does not parse as JSON aborts the
/// loop with an error.
pub fn serve<R, W, H>(mut reader: R, mut writer: W, handler: &H) -> Result<()>
where
  R: BufRead,
  W: Write,
  H: RequestHandler + ?Sized,
{
  let mut line = String::new();
  loop {
    line.clear();
    let read = reader
      .read_line(&mut line)
      .context("failed to read request line")?;
    if read == 0 {
      return Ok(());
    }

    let request: Value = serde_json::from_str(&line)
      .with_context(|| format!("request is not valid JSON: {}", line.trim_end()))?;
    let response = handler.handle(request);

    serde_json::to_writer(&mut writer, &response).context("failed to write response")?;
    writeln!(writer)?;
    writer.flush().context("failed to flush response")?;
  }
}

/// Serve over the process's own standard streams
pub fn serve_stdin<H>(handler: &H) -> Result<()>
where
  H: RequestHandler + ?Sized,
{
  let stdin = io::stdin();
  let stdout = io::stdout();
  serve(stdin.lock(), stdout.lock(), handler)
}
