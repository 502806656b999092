//! Terminal rendering of engine output.

use std::io::{self, Write};

use colored::Colorize;
use tracing::warn;
use wf_engine::{Output, OutputStyle};

/// Writes engine output to stdout, colored by style.
pub struct Console;

impl Console {
    /// Print a question and leave the cursor on the same line.
    pub fn ask(&mut self, question: &str) {
        let question = if question.is_empty() {
            "What is your name?"
        } else {
            question
        };
        print!("{} ", question.cyan());
        flush(io::stdout());
    }
}

impl Output for Console {
    fn emit(&mut self, style: OutputStyle, text: &str) {
        let styled = match style {
            OutputStyle::Text => text.normal(),
            OutputStyle::Title => text.bold(),
            OutputStyle::Listing => text.cyan(),
            OutputStyle::Notice => text.green().bold(),
            OutputStyle::Error => text.yellow(),
            OutputStyle::System => text.dimmed(),
        };
        println!("{styled}");
    }

    fn prompt(&mut self) {
        print!("\n> ");
        flush(io::stdout());
    }
}

/// Flush a prompt so it shows before input is read. Failures are logged.
fn flush(mut out: impl Write) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(error) => {
            warn!(%error, "stdout_flush_failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn flush_reports_failure() {
        assert!(flush(Vec::new()));
        assert!(!flush(Closed));
    }
}
