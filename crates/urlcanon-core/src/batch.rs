//! JSON Lines batch processing.
//!
//! Each input line is one `{"url": ..., "operation": ...}` request; each
//! produces exactly one output line, either `{"processed_url": ...}` or
//! `{"error": ...}`. A bad line never aborts the batch; only I/O failures do.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::processor::{ErrorResponse, UrlProcessor, UrlRequest};

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }
}

/// Processes every request line from `reader`, writing one response line per request.
pub fn process_json_lines<R, W>(
    reader: R,
    mut writer: W,
    processor: &UrlProcessor,
) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("read request line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match serde_json::from_str::<UrlRequest>(&line) {
            Ok(request) => processor
                .process_request(&request)
                .map_err(|e| ErrorResponse::from(&e)),
            Err(e) => {
                tracing::warn!("line {}: invalid request payload: {}", line_no, e);
                Err(ErrorResponse {
                    error: format!("invalid request payload: {e}"),
                })
            }
        };

        match outcome {
            Ok(response) => {
                summary.processed += 1;
                serde_json::to_writer(&mut writer, &response)?;
            }
            Err(error) => {
                summary.failed += 1;
                serde_json::to_writer(&mut writer, &error)?;
            }
        }
        writer
            .write_all(b"\n")
            .with_context(|| format!("write response for line {line_no}"))?;
    }

    writer.flush().context("flush batch output")?;
    tracing::info!(
        "batch finished: processed={} failed={}",
        summary.processed,
        summary.failed
    );
    Ok(summary)
}
