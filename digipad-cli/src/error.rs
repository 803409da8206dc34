use digipad_core::PadError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can make a CLI command fail.
#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error(transparent)]
    Pad(#[from] PadError),

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read the message from standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("invalid config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("pad file {path:?} has no pad with id {id}")]
    PadNotFound { path: PathBuf, id: String },
}

impl CliError {
    pub(crate) fn io(path: &std::path::Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
