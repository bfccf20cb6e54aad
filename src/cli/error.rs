//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(e) => match e {
                InfraError::InputClosed { .. } | InfraError::Terminal { .. } => {
                    crate::exitcode::IOERR
                }
                InfraError::Application(e) => match e {
                    ApplicationError::Data { .. } => crate::exitcode::DATAERR,
                    ApplicationError::MalformedCsv { .. } => crate::exitcode::DATAERR,
                    ApplicationError::SourceNotFound(_)
                    | ApplicationError::SourceUnreadable { .. } => crate::exitcode::NOINPUT,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                },
            },
        }
    }
}
