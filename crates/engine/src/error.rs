//! Engine error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),
}
