use thiserror::Error;

/// Failure of the JS bridge behind a document-level listener.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListenerError {
    /// The eval channel stopped delivering messages.
    #[error("listener channel closed: {0}")]
    Channel(String),
}
