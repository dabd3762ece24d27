/// A `Result` alias where the `Err` case is `deck::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the tour layer. The container itself never fails: empty access is `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidValue(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
