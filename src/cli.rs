use std::io::{self, Write};

use serde_json::json;
use tracing::{debug, warn};

use crate::cards::Hand;
use crate::config::{Config, OutputFormat};

/// Classify each input line and write one result per hand to `out`.
///
/// Rejected hands and unreadable lines are logged and counted; processing
/// carries on with the next line. A read error other than invalid data ends
/// the input. Returns the number of failures.
pub fn run<I, W>(inputs: I, config: &Config, out: &mut W) -> io::Result<usize>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut failures = 0usize;
    for input in inputs {
        let input = match input {
            Ok(input) => input,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("Skipping unreadable line: {}", e);
                failures += 1;
                continue;
            }
            Err(e) => {
                warn!("Stopped reading input: {}", e);
                failures += 1;
                break;
            }
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match Hand::from_string(input) {
            Ok(hand) => {
                let kind = hand.kind_with(config.rules);
                debug!(%hand, %kind, "Classified hand");
                match config.output {
                    OutputFormat::Text => writeln!(out, "{}: {}", hand, kind)?,
                    OutputFormat::Json => {
                        writeln!(out, "{}", json!({ "hand": hand, "kind": kind }))?
                    }
                }
            }
            Err(e) => {
                warn!(input, "Rejected hand: {}", e);
                failures += 1;
            }
        }
    }

    Ok(failures)
}
