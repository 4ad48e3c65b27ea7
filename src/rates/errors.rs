use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateSourceError {
    #[error("Rate source error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Rate source error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Rate source error: Fetch task failed: {0}")]
    Task(String),
    #[error("Rate source error: {0}")]
    Unavailable(String)
}
