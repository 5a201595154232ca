//! Error types shared by the assembler and the VM translator.
//!
//! Both tools only ever fail for the same handful of reasons: the input couldn't be read, a line
//! doesn't parse, or a resolved value doesn't fit where it's meant to go. One enum covers all of it
//! so both binaries report errors the same way.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HackError>;

#[derive(Error, Debug)]
pub enum HackError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: invalid instruction: {text:?}")]
    InvalidInstruction {
        path: String,
        line: usize,
        text: String,
    },

    #[error("{path}:{line}: invalid VM command {tokens:?}")]
    InvalidCommand {
        path: String,
        line: usize,
        tokens: Vec<String>,
    },

    #[error("malformed C-instruction field {field:?} in {text:?}")]
    BadField { field: &'static str, text: String },
}

impl HackError {
    #[must_use]
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
