use std::ops::{Deref, DerefMut};

use reduction_kernel::Real;

use crate::errors::HarnessError;

/// Harness-owned, row-major array handed to a benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    name: String,
    dims: Vec<usize>,
    fakedata: bool,
    verify: bool,
    data: Box<[Real]>,
}

impl Array {
    pub(crate) fn new(
        name: &str,
        dims: &[usize],
        fakedata: bool,
        verify: bool,
    ) -> Result<Array, HarnessError> {
        let len = dims.iter().product::<usize>();
        if dims.is_empty() || len == 0 {
            return Err(HarnessError::EmptyArray(name.to_owned()));
        }

        let mut data = vec![0.0; len].into_boxed_slice();
        if fakedata {
            fill_fakedata(&mut data);
        }

        Ok(Array {
            name: name.to_owned(),
            dims: dims.to_vec(),
            fakedata,
            verify,
            data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn has_fakedata(&self) -> bool {
        self.fakedata
    }

    pub fn is_verified(&self) -> bool {
        self.verify
    }
}

impl Deref for Array {
    type Target = [Real];

    fn deref(&self) -> &[Real] {
        &self.data
    }
}

impl DerefMut for Array {
    fn deref_mut(&mut self) -> &mut [Real] {
        &mut self.data
    }
}

// Half-integers, so an integer-valued kernel result never collides with them.
fn fill_fakedata(data: &mut [Real]) {
    for (i, value) in data.iter_mut().enumerate() {
        *value = ((i * 7 + 3) % 11) as Real + 0.5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_allocation() {
        let array = Array::new("a", &[2, 3], false, true).unwrap();
        assert_eq!(array.len(), 6);
        assert_eq!(array.dims(), &[2, 3]);
        assert!(array.iter().all(|&v| v == 0.0));
        assert!(array.is_verified());
        assert!(!array.has_fakedata());
    }

    #[test]
    fn test_fakedata_pattern() {
        let array = Array::new("b", &[4], true, false).unwrap();
        assert_eq!(&array[..], &[3.5, 10.5, 6.5, 2.5]);
        assert!(array.iter().all(|v| v.fract() == 0.5));
    }

    #[test]
    fn test_empty_shapes_rejected() {
        assert!(matches!(Array::new("e", &[], false, false), Err(HarnessError::EmptyArray(n)) if n == "e"));
        assert!(matches!(Array::new("z", &[3, 0], false, false), Err(HarnessError::EmptyArray(_))));
    }

    #[test]
    fn test_write_through_deref() {
        let mut array = Array::new("sum", &[1], true, true).unwrap();
        array[0] = 42.0;
        assert_eq!(array[0], 42.0);
    }
}
