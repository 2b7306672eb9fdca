use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("duplicate edge: {id}")]
    DuplicateEdge { id: String },

    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("invalid rule: {0}")]
    InvalidRule(String),

    #[error("flow backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, Error>;
