use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommitError>;

#[derive(Error, Debug)]
pub enum CommitError {
    #[error("no cached context for transaction {0}")]
    ContextNotFound(String),
    #[error("incomplete transaction: {0}")]
    IncompleteTransaction(String),
    #[error("routing violation: {0}")]
    RoutingViolation(String),
    #[error("switch transport error: {0}")]
    Transport(String),
    #[error("direct delivery error: {0}")]
    Delegation(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("context store error: {0}")]
    Store(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
