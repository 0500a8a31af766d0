use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PwgenError {
    #[error("invalid arguments: {0}")]
    Argument(String),

    #[error("{0}")]
    Configuration(String),

    #[error("cannot read seed file {}: {source}", path.display())]
    SeedFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write passwords: {0}")]
    Write(#[source] io::Error),

    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] getrandom::Error),
}

impl PwgenError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Argument(_) => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, PwgenError>;
