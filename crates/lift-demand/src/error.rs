use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error("demand configuration error: {0}")]
    Config(String),
}

pub type DemandResult<T> = Result<T, DemandError>;
