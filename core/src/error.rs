use thiserror::Error;

#[derive(Error, Debug)]
pub enum RnError {
    /// Chi-square needs a positive shape parameter.
    #[error("Invalid degrees of freedom: {df} (must be > 0)")]
    InvalidDegreesOfFreedom { df: i32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RnResult<T> = Result<T, RnError>;
