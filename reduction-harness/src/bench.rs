use std::hint::black_box;

use reduction_kernel::{reduction_into, PbSize, ReductionError, OUTPUT_LEN};

use crate::errors::HarnessError;
use crate::state::State;

pub const SUM_ARRAY: &str = "sum";

/// Allocates the one-element `sum` output and writes the reduction of `0..n`
/// into it on every measured iteration.
pub fn run(state: &mut State, n: PbSize) -> Result<(), HarnessError> {
    let mut sum = state.allocate_array(&[OUTPUT_LEN], false, true, SUM_ARRAY)?;

    let stats = state.measure(|| {
        // Keep n opaque so the loop is not folded into a constant
        reduction_into(black_box(n), &mut sum)?;
        black_box(sum[0]);
        Ok::<(), ReductionError>(())
    })?;

    log::debug!("{}[0] = {:?} after {} iterations", SUM_ARRAY, sum[0], stats.iterations);
    state.retire(sum);
    Ok(())
}
