//! JSON-lines request loop
//!
//! One request object per input line, one response object per output line.
//! Blank lines and lines starting with `#` are skipped.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::service::Service;

/// Counters for one run of [`serve`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeSummary {
    /// Requests answered
    pub handled: usize,
    /// Responses with `success == false`
    pub failed:  usize,
    /// Blank and comment lines skipped
    pub skipped: usize,
}

/// Answer every request read from `reader`, writing responses to `writer`
pub fn serve<R, W>(service: &mut Service, reader: R, mut writer: W) -> Result<ServeSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ServeSummary::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read request line {}", number + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            summary.skipped += 1;
            continue;
        }

        debug!(line = number + 1, "handling request");
        let response = service.handle_line(trimmed);
        summary.handled += 1;
        if !response.success {
            summary.failed += 1;
        }

        serde_json::to_writer(&mut writer, &response).context("Failed to encode response")?;
        writer.write_all(b"\n").context("Failed to write response")?;
    }

    writer.flush().context("Failed to flush responses")?;
    info!(handled = summary.handled, failed = summary.failed, "request stream finished");
    Ok(summary)
}
