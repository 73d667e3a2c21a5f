#[cfg(feature = "log")]
use log::{debug, warn};

use crate::{stability, BiquadStage, CoefficientSet, FilterError};

/// Named cascade of biquad stages, applied in declaration order.
///
/// Every stage is checked for finiteness and pole stability before the chain
/// is built, so a chain never runs with coefficients that could diverge.
/// An empty chain passes its input through unchanged.
#[derive(Clone, Debug)]
pub struct FilterChain {
    name: String,
    stages: Vec<BiquadStage>,
}
impl FilterChain {
    pub fn new(name: &str, coeffs: &[CoefficientSet]) -> Result<Self, FilterError> {
        let mut stages = Vec::with_capacity(coeffs.len());
        for (index, stage_coeffs) in coeffs.iter().enumerate() {
            let stage = BiquadStage::new(*stage_coeffs).map_err(|err| {
                #[cfg(feature = "log")]
                warn!("Rejecting stage {} of chain \"{}\": {}", index, name, err);
                err
            })?;
            let verdict = stability::check(stage_coeffs);
            if !verdict.stable {
                #[cfg(feature = "log")]
                warn!(
                    "Rejecting stage {} of chain \"{}\": poles {:?}",
                    index, name, verdict.poles
                );
                return Err(FilterError::UnstableCoefficients {
                    stage: index,
                    magnitudes: verdict.magnitudes,
                });
            }
            stages.push(stage);
        }
        #[cfg(feature = "log")]
        debug!("Built chain \"{}\" with {} stage(s)", name, stages.len());
        Ok(Self {
            name: name.to_string(),
            stages,
        })
    }
    /// Chain without stages.
    pub fn identity(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stages: Vec::new(),
        }
    }
    #[inline]
    pub fn apply(&mut self, x: f64) -> f64 {
        self.stages.iter_mut().fold(x, |sample, stage| stage.apply(sample))
    }
    pub fn process(&mut self, signal: &mut [f64]) {
        for sample in signal.iter_mut() {
            *sample = self.apply(*sample);
        }
    }
    pub fn reset(&mut self) {
        for stage in self.stages.iter_mut() {
            stage.reset();
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stages(&self) -> &[BiquadStage] {
        &self.stages
    }
    pub fn len(&self) -> usize {
        self.stages.len()
    }
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
