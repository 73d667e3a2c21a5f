use crate::{CoefficientSet, FilterError};

/// One second-order IIR section in transposed direct form II.
///
/// Coefficients are only checked for finiteness here. A stage built from
/// unstable coefficients diverges to `inf`/`NaN`; use [`crate::FilterChain`]
/// to have them rejected up front.
#[derive(Clone, Debug)]
pub struct BiquadStage {
    // options
    coeffs: CoefficientSet,
    // state
    z1: f64,
    z2: f64,
}
impl BiquadStage {
    pub fn new(coeffs: CoefficientSet) -> Result<Self, FilterError> {
        coeffs.validate()?;
        Ok(Self {
            coeffs,
            z1: 0.,
            z2: 0.,
        })
    }
    #[inline]
    pub fn apply(&mut self, x: f64) -> f64 {
        let CoefficientSet { b0, b1, b2, a1, a2 } = self.coeffs;
        let y = b0 * x + self.z1;
        (self.z1, self.z2) = (b1 * x + self.z2 - a1 * y, b2 * x - a2 * y);
        y
    }
    pub fn process(&mut self, signal: &mut [f64]) {
        for sample in signal.iter_mut() {
            *sample = self.apply(*sample);
        }
    }
    pub fn reset(&mut self) {
        self.z1 = 0.;
        self.z2 = 0.;
    }
    pub fn coefficients(&self) -> &CoefficientSet {
        &self.coeffs
    }
}
