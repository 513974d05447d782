use std::io;
use std::path::PathBuf;

use reduction_kernel::{ReductionError, Real};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("array `{0}` has no elements")]
    EmptyArray(String),
    #[error("array `{name}` has {found} element(s), expected {expected}")]
    ShapeMismatch { name: String, expected: usize, found: usize },
    #[error("array `{name}`[{index}] = {found:?}, expected {expected:?}")]
    Verification {
        name: String,
        index: usize,
        expected: Real,
        found: Real,
    },
    #[error(transparent)]
    Kernel(#[from] ReductionError),
    #[error("cannot write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}
