use std::io;
use std::path::PathBuf;

use labex_lib::{DocumentError, RegistryError, RuntimeError};

/// Errors that end a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(&'static str),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid document: {0}")]
    DocumentJson(#[source] serde_json::Error),

    #[error("invalid document: {0}")]
    DocumentSchema(String),

    #[error("invalid document: {0}")]
    Registry(#[from] RegistryError),

    #[error("invalid document: {0}")]
    Document(#[from] DocumentError),

    /// Rendered compiler diagnostics.
    #[error("{0}")]
    Diagnostics(String),

    #[error(transparent)]
    Compile(labex_lib::Error),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("JSON serialization failed: {0}")]
    Output(#[source] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for runtime failures, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Runtime(_) => 2,
            _ => 1,
        }
    }

    /// Reports the error on stderr.
    pub fn report(&self) {
        match self {
            CliError::Diagnostics(rendered) => eprint!("{rendered}"),
            err => eprintln!("error: {err}"),
        }
    }
}
