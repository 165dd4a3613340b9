use thiserror::Error;

use crate::content::ContentKind;
use crate::id::UserId;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Expected {expected} content, got {actual}")]
    VariantMismatch {
        expected: ContentKind,
        actual: ContentKind,
    },
    #[error("No account state assigned to user {0}")]
    StateUnset(UserId),
    #[error("User {0} is not registered in the chat")]
    NotRegistered(UserId),
    #[error("There is some collision: {0}")]
    Collision(String),
    #[error("Parsing error")]
    Parse,
    #[error("Storage error: {0} {1}")]
    Storage(String, String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for ContentError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}
