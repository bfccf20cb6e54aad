//! Test helpers: logging setup and a scripted terminal

use std::collections::VecDeque;
use std::io;
use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::Terminal;

static TEST_SETUP: Once = Once::new();

/// Install a test-writer subscriber once per process; `RUST_LOG` overrides the level.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bikeshare=debug"));
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_filter(filter),
            )
            .try_init();
        if let Err(e) = installed {
            eprintln!("test logging not installed: {}", e);
        }
        debug!("test logging ready");
    });
}

/// Terminal double: answers prompts from a script and records everything.
///
/// Running out of answers behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    /// Prompts in the order they were shown
    pub prompts: Vec<String>,
    /// Lines written, in order
    pub lines: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Number of written lines containing `needle`.
    pub fn lines_containing(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn given_script_when_reading_then_answers_in_order_then_eof() {
        let mut terminal = ScriptedTerminal::new(["a", "b"]);

        assert_eq!(terminal.read_line("first").unwrap(), "a");
        assert_eq!(terminal.read_line("second").unwrap(), "b");
        let err = terminal.read_line("third").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(terminal.prompts, vec!["first", "second", "third"]);
        assert_eq!(terminal.remaining(), 0);
    }
}
