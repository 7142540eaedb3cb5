use thiserror::Error;

/// Conversion failures when mapping the raw controller feed into typed nodes.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("Unknown node kind: {0}")]
    UnknownNodeKind(String),
    #[error("Unknown link kind: {0}")]
    UnknownLinkKind(String),
}
