#[cfg(test)]
mod tests;

use crate::errors::ReductionError;
use crate::real::{Idx, PbSize, Real};

/// Length of the buffer [`reduction`] writes into.
pub const OUTPUT_LEN: usize = 1;

/// Sums `0..n` into a [`Real`], one term at a time in increasing order.
///
/// The order is part of the contract: floating-point addition does not
/// associate, so once partial sums leave the exactly representable range a
/// reordered or tree-shaped reduction rounds differently.
#[inline(never)]
pub fn kernel(n: PbSize) -> Real {
    let n: Idx = n;
    let mut sum: Real = 0.0;
    for i in 0..n {
        sum += i as Real;
    }
    sum
}

/// Writes `kernel(n)` into `sum[0]`, overwriting whatever was there.
#[inline]
pub fn reduction(n: PbSize, sum: &mut [Real; OUTPUT_LEN]) {
    sum[0] = kernel(n);
}

/// Like [`reduction`], for buffers whose length is only known at runtime.
///
/// A slice that is not exactly [`OUTPUT_LEN`] long is left untouched.
pub fn reduction_into(n: PbSize, sum: &mut [Real]) -> Result<(), ReductionError> {
    let found = sum.len();
    let slot: &mut [Real; OUTPUT_LEN] = sum
        .try_into()
        .map_err(|_| ReductionError::OutputShape { expected: OUTPUT_LEN, found })?;
    reduction(n, slot);
    Ok(())
}
