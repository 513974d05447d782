// f64 = 53 mantissa bits, partial sums exact up to n = 134_217_728
// f32 = 24 mantissa bits, partial sums exact up to n = 5_793

#[cfg(not(feature = "real-f32"))]
pub type Real = f64;
#[cfg(feature = "real-f32")]
pub type Real = f32;

/// Problem size, the number of terms summed.
pub type PbSize = u64;
/// Loop counter. Shares the range of [`PbSize`]; nothing past it is handled.
pub type Idx = PbSize;

pub const MANTISSA_BITS: u32 = Real::MANTISSA_DIGITS;

/// Every integer up to this value has an exact [`Real`] representation.
pub const EXACT_INTEGER_LIMIT: u64 = 1 << MANTISSA_BITS;
