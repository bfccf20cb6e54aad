//! CLI layer: argument parsing, prompting and rendering

pub mod args;
pub mod error;
pub mod output;
pub mod render;
pub mod selector;
pub mod session;

pub use args::Cli;
pub use error::{CliError, CliResult};
pub use session::Session;
