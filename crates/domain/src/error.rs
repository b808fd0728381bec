#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("catalog index {index} is out of range for {len} events")]
    OutOfRange { index: usize, len: usize },
    #[error("cannot open event {index}: catalog holds {len} events")]
    InvalidIndex { index: usize, len: usize },
    #[error("event at position {position} has an empty title")]
    EmptyTitle { position: usize },
    #[error("event title {0:?} appears more than once")]
    DuplicateTitle(String),
}
