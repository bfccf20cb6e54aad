//! Infrastructure-level errors: application failures plus terminal I/O

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Stdin reached end of input while a prompt was waiting.
    #[error("input closed while {action}")]
    InputClosed { action: String },

    #[error("terminal error while {action}: {source}")]
    Terminal {
        action: String,
        #[source]
        source: io::Error,
    },
}

impl InfraError {
    /// Classify a terminal failure; end of input gets its own variant.
    pub fn terminal(action: impl Into<String>, source: io::Error) -> Self {
        let action = action.into();
        if source.kind() == io::ErrorKind::UnexpectedEof {
            Self::InputClosed { action }
        } else {
            Self::Terminal { action, source }
        }
    }
}

pub type InfraResult<T> = Result<T, InfraError>;
