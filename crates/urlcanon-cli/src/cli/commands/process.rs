//! `urlcanon process <url> --operation <op>` – process one URL.

use anyhow::Result;
use urlcanon_core::config::UrlcanonConfig;
use urlcanon_core::processor::{ErrorResponse, UrlRequest};

pub fn run_process(cfg: &UrlcanonConfig, url: &str, operation: &str, json: bool) -> Result<()> {
    let processor = cfg.processor();
    let request = UrlRequest::new(url, operation);

    match processor.process_request(&request) {
        Ok(response) if json => println!("{}", serde_json::to_string(&response)?),
        Ok(response) => println!("{}", response.processed_url),
        Err(err) => {
            if json {
                println!("{}", serde_json::to_string(&ErrorResponse::from(&err))?);
            }
            return Err(err.into());
        }
    }
    Ok(())
}
