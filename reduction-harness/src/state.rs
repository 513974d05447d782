use std::time::{Duration, Instant};

use reduction_kernel::PbSize;

use crate::array::Array;
use crate::config::RunConfig;
use crate::errors::HarnessError;
use crate::stats::IterationStats;

/// Drives one benchmark run: hands out arrays, times iterations and keeps
/// the arrays flagged for verification once the benchmark is done with them.
pub struct State {
    config: RunConfig,
    verified: Vec<Array>,
    stats: Option<IterationStats>,
}

impl State {
    pub fn new(config: RunConfig) -> State {
        State {
            config,
            verified: Vec::new(),
            stats: None,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn problem_size(&self) -> PbSize {
        self.config.problem_size
    }

    pub fn allocate_array(
        &self,
        dims: &[usize],
        fakedata: bool,
        verify: bool,
        name: &str,
    ) -> Result<Array, HarnessError> {
        let array = Array::new(name, dims, fakedata, verify)?;
        log::debug!(
            "allocated `{}` {:?} ({} elements, fakedata={}, verify={})",
            name,
            dims,
            array.len(),
            array.has_fakedata(),
            array.is_verified()
        );
        Ok(array)
    }

    /// Runs `body` for the configured warmup iterations, then times it for
    /// the configured repeats. Stops at the first error.
    pub fn measure<F, E>(&mut self, mut body: F) -> Result<IterationStats, E>
    where
        F: FnMut() -> Result<(), E>,
    {
        for _ in 0..self.config.warmup {
            body()?;
        }

        let mut samples: Vec<Duration> = Vec::with_capacity(self.config.repeats);
        for _ in 0..self.config.repeats {
            let start = Instant::now();
            body()?;
            samples.push(start.elapsed());
        }

        let stats = IterationStats::from_durations(&samples);
        log::info!("measured {}", stats);
        self.stats = Some(stats);
        Ok(stats)
    }

    /// Takes an array back from the benchmark. Only arrays allocated with
    /// `verify` are kept.
    pub fn retire(&mut self, array: Array) {
        if array.is_verified() {
            self.verified.push(array);
        } else {
            log::debug!("dropping unverified array `{}`", array.name());
        }
    }

    pub fn verified_arrays(&self) -> &[Array] {
        &self.verified
    }

    pub fn stats(&self) -> Option<&IterationStats> {
        self.stats.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_state(repeats: usize, warmup: usize) -> State {
        State::new(RunConfig {
            repeats,
            warmup,
            ..RunConfig::default()
        })
    }

    #[test]
    fn test_measure_counts_iterations() {
        let mut state = setup_state(4, 2);
        let mut calls = 0;
        let stats = state
            .measure(|| {
                calls += 1;
                Ok::<(), HarnessError>(())
            })
            .unwrap();

        assert_eq!(calls, 6);
        assert_eq!(stats.iterations, 4);
        assert_eq!(state.stats(), Some(&stats));
    }

    #[test]
    fn test_measure_stops_on_error() {
        let mut state = setup_state(5, 0);
        let mut calls = 0;
        let result = state.measure(|| {
            calls += 1;
            if calls == 3 {
                Err("boom")
            } else {
                Ok(())
            }
        });

        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 3);
        assert!(state.stats().is_none());
    }

    #[test]
    fn test_retire_keeps_verified_only() {
        let mut state = setup_state(1, 0);
        let kept = state.allocate_array(&[1], false, true, "kept").unwrap();
        let scratch = state.allocate_array(&[8], true, false, "scratch").unwrap();
        state.retire(kept);
        state.retire(scratch);

        let names: Vec<&str> = state.verified_arrays().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["kept"]);
    }
}
