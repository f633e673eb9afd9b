use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Cannot read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed score table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bad configuration: {0}")]
    Config(String),

    /// A key string that is not a permutation of the alphabet.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

pub type CipherResult<T> = Result<T, CipherError>;
