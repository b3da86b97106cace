use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("collection is full ({limit} cards)")]
    CapacityExceeded { limit: usize },

    #[error("caption must not be empty")]
    InvalidCaption,

    #[error("no card at position {index} (collection has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("need at least 3 cards to build a question, have {have}")]
    InsufficientCards { have: usize },

    #[error("answer {index} is not one of the {options} options")]
    InvalidSelection { index: usize, options: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;
