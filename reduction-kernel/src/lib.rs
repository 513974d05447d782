#![cfg_attr(not(test), no_std)]

pub mod errors;
pub mod real;
pub mod reduction;

pub use errors::ReductionError;
pub use real::{Idx, PbSize, Real};
pub use reduction::{kernel, reduction, reduction_into, OUTPUT_LEN};
