/// Smoothing factor of the pace filter.
pub const SES_ALPHA: f64 = 0.2;

/// Causal simple exponential smoothing: the first sample seeds the value,
/// then `alpha * x + (1 - alpha) * previous`. Full precision is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ses {
    value: Option<f64>,
}

impl Ses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, sample: f64) -> f64 {
        let next = match self.value {
            None => sample,
            Some(prev) => SES_ALPHA * sample + (1.0 - SES_ALPHA) * prev,
        };
        self.value = Some(next);
        next
    }

    /// `None` until the first sample.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Smooth a whole series, returning every intermediate value.
pub fn smooth_series(samples: &[f64]) -> Vec<f64> {
    let mut ses = Ses::new();
    samples.iter().map(|x| ses.update(*x)).collect()
}
