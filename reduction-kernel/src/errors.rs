use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ReductionError {
    #[error("output buffer must hold {expected} element(s), got {found}")]
    OutputShape { expected: usize, found: usize },
}
