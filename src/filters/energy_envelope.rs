use crate::{BankError, EnvelopeConfig};

/// Exponential moving average of the squared signal, with separate
/// smoothing for rising and falling energy.
#[derive(Clone, Debug)]
pub struct EnergyEnvelope {
    // options
    attack_alpha: f64,
    release_alpha: f64,
    // state
    energy: f64,
}
impl EnergyEnvelope {
    pub fn new(attack_alpha: f64, release_alpha: f64) -> Result<Self, BankError> {
        let in_range = |alpha: f64| alpha > 0. && alpha <= 1.;
        if !in_range(attack_alpha) || !in_range(release_alpha) {
            return Err(BankError::InvalidEnvelope {
                attack: attack_alpha,
                release: release_alpha,
            });
        }
        Ok(Self {
            attack_alpha,
            release_alpha,
            energy: 0.,
        })
    }
    #[inline]
    pub fn update(&mut self, sample: f64) -> f64 {
        let sample_energy = sample * sample;
        let alpha = if sample_energy > self.energy {
            self.attack_alpha
        } else {
            self.release_alpha
        };
        self.energy = alpha * sample_energy + (1. - alpha) * self.energy;
        self.energy
    }
    pub fn energy(&self) -> f64 {
        self.energy
    }
    pub fn reset(&mut self) {
        self.energy = 0.;
    }
}
impl TryFrom<&EnvelopeConfig> for EnergyEnvelope {
    type Error = BankError;
    fn try_from(config: &EnvelopeConfig) -> Result<Self, Self::Error> {
        EnergyEnvelope::new(config.attack_alpha, config.release_alpha)
    }
}
