use crate::FilterError;

/// Normalized coefficients of one second-order section (`a0` is 1).
///
/// Transfer function:
///
/// ```text
///         b0 + b1 z^-1 + b2 z^-2
/// H(z) = ------------------------
///          1 + a1 z^-1 + a2 z^-2
/// ```
#[derive(Savefile, Clone, Copy, Debug, PartialEq)]
pub struct CoefficientSet {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}
impl CoefficientSet {
    /// Creates a coefficient set, rejecting non-finite values.
    pub fn new(b0: f64, b1: f64, b2: f64, a1: f64, a2: f64) -> Result<Self, FilterError> {
        let coeffs = Self { b0, b1, b2, a1, a2 };
        coeffs.validate()?;
        Ok(coeffs)
    }
    /// Creates a coefficient set from one second-order-section row
    /// `[b0, b1, b2, a0, a1, a2]`, dividing every value by `a0`.
    pub fn from_sos(row: [f64; 6]) -> Result<Self, FilterError> {
        let [b0, b1, b2, a0, a1, a2] = row;
        if !a0.is_finite() || a0 == 0. {
            return Err(FilterError::InvalidCoefficients {
                field: "a0",
                value: a0,
            });
        }
        Self::new(b0 / a0, b1 / a0, b2 / a0, a1 / a0, a2 / a0)
    }
    /// Returns the section as an SOS row with `a0 = 1`.
    pub fn to_sos(&self) -> [f64; 6] {
        [self.b0, self.b1, self.b2, 1., self.a1, self.a2]
    }
    /// Checks that every coefficient is finite.
    pub fn validate(&self) -> Result<(), FilterError> {
        let fields = [
            ("b0", self.b0),
            ("b1", self.b1),
            ("b2", self.b2),
            ("a1", self.a1),
            ("a2", self.a2),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(field, value)) => Err(FilterError::InvalidCoefficients { field, value }),
            None => Ok(()),
        }
    }
    /// Gain at 0 Hz.
    pub fn dc_gain(&self) -> f64 {
        (self.b0 + self.b1 + self.b2) / (1. + self.a1 + self.a2)
    }
    /// Gain at half the sample rate.
    pub fn nyquist_gain(&self) -> f64 {
        (self.b0 - self.b1 + self.b2) / (1. - self.a1 + self.a2)
    }
}
