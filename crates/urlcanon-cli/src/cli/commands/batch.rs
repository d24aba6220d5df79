//! `urlcanon batch [path]` – process JSON Lines requests from a file or stdin.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use urlcanon_core::batch::process_json_lines;
use urlcanon_core::config::UrlcanonConfig;

pub fn run_batch(cfg: &UrlcanonConfig, path: &str) -> Result<()> {
    let processor = cfg.processor();
    let stdout = io::stdout().lock();

    let summary = if path == "-" {
        process_json_lines(io::stdin().lock(), stdout, &processor)?
    } else {
        let file = File::open(path).with_context(|| format!("open batch input: {path}"))?;
        process_json_lines(BufReader::new(file), stdout, &processor)?
    };

    eprintln!(
        "processed {} request(s): {} ok, {} failed",
        summary.total(),
        summary.processed,
        summary.failed
    );
    Ok(())
}
