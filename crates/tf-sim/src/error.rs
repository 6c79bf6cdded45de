use tf_core::TfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] TfError),

    #[error("simulation lock poisoned by a panicked holder")]
    Poisoned,
}

pub type SimResult<T> = Result<T, SimError>;
