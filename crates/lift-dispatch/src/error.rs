use lift_core::LiftError;
use lift_demand::DemandError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] LiftError),

    #[error(transparent)]
    Demand(#[from] DemandError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
