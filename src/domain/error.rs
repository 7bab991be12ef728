use thiserror::Error;

use super::todo::TodoId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("todo {0} not found")]
    NotFound(TodoId),
    #[error("rejected: {0}")]
    ValidationRejected(String),
}

pub type TodoResult<T> = Result<T, TodoError>;
