use thiserror::Error;

#[derive(Error, Debug)]
pub enum XieziError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Deck contains no usable entries: {0}")]
    EmptyDeck(String),

    #[error("XieziError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for XieziError {
    fn from(error: std::io::Error) -> Self {
        XieziError::Io(Box::new(error))
    }
}

impl From<csv::Error> for XieziError {
    fn from(error: csv::Error) -> Self {
        XieziError::Csv(Box::new(error))
    }
}
