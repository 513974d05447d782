use super::*;

#[test]
fn test_empty_range() {
    assert_eq!(kernel(0), 0.0);
}

#[test]
fn test_single_term() {
    assert_eq!(kernel(1), 0.0);
}

#[test]
fn test_small_sums() {
    assert_eq!(kernel(2), 1.0);
    assert_eq!(kernel(5), 10.0);
    assert_eq!(kernel(100), 4950.0);
}

#[test]
fn test_reduction_writes_slot() {
    let mut sum = setup_buffer();
    reduction(5, &mut sum);
    assert_eq!(sum[0], 10.0);

    let mut sum = setup_buffer();
    reduction(0, &mut sum);
    assert_eq!(sum[0], 0.0);
}

#[test]
fn test_exact_range() {
    // 4096 * 4095 / 2 stays below 2^24, exact in both widths
    let n = 4096;
    assert!(closed_form(n) < EXACT_INTEGER_LIMIT as Real);
    assert_eq!(kernel(n), closed_form(n));
    assert_eq!(kernel(n), 8_386_560.0);
}
