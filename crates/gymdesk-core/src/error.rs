use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid national id: {0:?}")]
    InvalidNationalId(String),
}
