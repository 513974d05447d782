use super::*;
use crate::real::EXACT_INTEGER_LIMIT;
mod values;

// Poisoned so a missing write shows up as NaN.
fn setup_buffer() -> [Real; OUTPUT_LEN] {
    [Real::NAN; OUTPUT_LEN]
}

fn closed_form(n: PbSize) -> Real {
    let n = n as u128;
    (n * n.saturating_sub(1) / 2) as Real
}

// Same order as the kernel, written out as a fold.
fn sequential_fold(n: PbSize) -> Real {
    (0..n).fold(0.0, |acc: Real, i| acc + i as Real)
}
