/// Peak amplitude and RMS level of one frame of samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameLevels {
    pub peak: f64,
    pub rms: f64,
}
impl FrameLevels {
    pub fn measure(signal: &[f64]) -> FrameLevels {
        if signal.is_empty() {
            return FrameLevels::default();
        }
        let mut peak: f64 = 0.;
        let mut sum_squared = 0.0;
        for sample in signal {
            peak = peak.max(sample.abs());
            sum_squared += sample * sample;
        }
        FrameLevels {
            peak,
            rms: (sum_squared / signal.len() as f64).sqrt(),
        }
    }
    /// Peak to RMS ratio, zero for a silent frame.
    pub fn crest_factor(&self) -> f64 {
        if self.rms > 0. {
            self.peak / self.rms
        } else {
            0.
        }
    }
}
