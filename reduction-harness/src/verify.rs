use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use reduction_kernel::real::EXACT_INTEGER_LIMIT;
use reduction_kernel::{PbSize, Real, OUTPUT_LEN};

use crate::array::Array;
use crate::errors::HarnessError;
use crate::state::State;

/// `n * (n - 1) / 2`, computed in integers and rounded once.
pub fn expected_sum(n: PbSize) -> Real {
    let n = n as u128;
    (n * n.saturating_sub(1) / 2) as Real
}

/// Whether every partial sum of `0..n` is an exactly representable integer,
/// in which case the kernel result carries no rounding at all.
pub fn exact_accumulation(n: PbSize) -> bool {
    let n = n as u128;
    n * n.saturating_sub(1) / 2 <= EXACT_INTEGER_LIMIT as u128
}

/// Worst-case rounding error of summing `n` terms in order.
pub fn tolerance(n: PbSize, expected: Real) -> Real {
    let scale = if expected == 0.0 { 1.0 } else { expected.abs() };
    n.max(1) as Real * Real::EPSILON * scale
}

pub fn check_sum(array: &Array, n: PbSize) -> Result<(), HarnessError> {
    if array.len() != OUTPUT_LEN {
        return Err(HarnessError::ShapeMismatch {
            name: array.name().to_owned(),
            expected: OUTPUT_LEN,
            found: array.len(),
        });
    }

    let expected = expected_sum(n);
    let found = array[0];
    // NaN fails this comparison too
    if !((found - expected).abs() <= tolerance(n, expected)) {
        return Err(HarnessError::Verification {
            name: array.name().to_owned(),
            index: 0,
            expected,
            found,
        });
    }
    Ok(())
}

/// Checks every verified array of a finished run and writes them to `dump`
/// if one was opened. Returns the number of arrays checked.
pub fn verify_run(
    state: &State,
    n: PbSize,
    dump_file: Option<DumpFile>,
) -> Result<usize, HarnessError> {
    let arrays = state.verified_arrays();
    for array in arrays {
        check_sum(array, n)?;
        log::info!("verified `{}` = {:?}", array.name(), &array[..]);
    }

    if let Some(dump_file) = dump_file {
        dump_file.write(arrays)?;
    }
    Ok(arrays.len())
}

/// One block per array: `array <name> <dims...>`, then one value per line.
pub fn dump<W: Write>(arrays: &[Array], out: &mut W) -> io::Result<()> {
    for array in arrays {
        write!(out, "array {}", array.name())?;
        for dim in array.dims() {
            write!(out, " {}", dim)?;
        }
        writeln!(out)?;
        for value in array.iter() {
            writeln!(out, "{:?}", value)?;
        }
    }
    Ok(())
}

/// Output file for [`dump`], created before the benchmark runs so a bad
/// path fails early.
pub struct DumpFile {
    path: PathBuf,
    out: BufWriter<File>,
}

impl DumpFile {
    pub fn create(path: &Path) -> Result<DumpFile, HarnessError> {
        let file = File::create(path).map_err(|source| HarnessError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(DumpFile {
            path: path.to_owned(),
            out: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(mut self, arrays: &[Array]) -> Result<(), HarnessError> {
        dump(arrays, &mut self.out)
            .and_then(|()| self.out.flush())
            .map_err(|source| HarnessError::Io {
                path: self.path.clone(),
                source,
            })?;
        log::info!("wrote {} array(s) to {}", arrays.len(), self.path.display());
        Ok(())
    }
}
