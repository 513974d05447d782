use std::fmt;
use std::time::Duration;

/// Summary of the measured iteration durations of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IterationStats {
    pub iterations: usize,
    pub total: Duration,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
    pub stddev: Duration,
}

impl IterationStats {
    pub fn from_durations(samples: &[Duration]) -> IterationStats {
        if samples.is_empty() {
            return IterationStats::default();
        }

        let count = samples.len() as f64;
        let total: Duration = samples.iter().sum();
        let mean = total.div_f64(count);
        let mean_secs = mean.as_secs_f64();
        let variance = samples
            .iter()
            .map(|s| (s.as_secs_f64() - mean_secs).powi(2))
            .sum::<f64>()
            / count;

        IterationStats {
            iterations: samples.len(),
            total,
            mean,
            min: samples.iter().copied().min().unwrap_or_default(),
            max: samples.iter().copied().max().unwrap_or_default(),
            stddev: Duration::from_secs_f64(variance.sqrt()),
        }
    }
}

impl fmt::Display for IterationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} iterations, mean {:?}, min {:?}, max {:?}, stddev {:?}",
            self.iterations, self.mean, self.min, self.max, self.stddev
        )
    }
}
