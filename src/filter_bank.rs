#[cfg(feature = "log")]
use log::debug;

use crate::{BankError, CoefficientTable, EnergyEnvelope, FilterBankConfig, FilterChain};

/// Runs several filter chains side by side over one input stream and
/// follows the energy of each chain output.
///
/// Each configured chain name appears once, so lookups by name are unambiguous.
#[derive(Clone, Debug)]
pub struct FilterBank {
    bands: Vec<Band>,
}
#[derive(Clone, Debug)]
struct Band {
    chain: FilterChain,
    envelope: EnergyEnvelope,
    last_output: f64,
}
impl FilterBank {
    pub fn new(table: &CoefficientTable, config: &FilterBankConfig) -> Result<Self, BankError> {
        if table.sample_rate != config.sample_rate {
            return Err(BankError::SampleRateMismatch {
                expected: config.sample_rate,
                found: table.sample_rate,
            });
        }
        for (index, name) in config.chains.iter().enumerate() {
            if config.chains[..index].contains(name) {
                return Err(BankError::DuplicateChain(name.clone()));
            }
        }
        let envelope = EnergyEnvelope::try_from(&config.envelope)?;
        let bands = config
            .chains
            .iter()
            .map(|name| -> Result<Band, BankError> {
                Ok(Band {
                    chain: table.build_chain(name)?,
                    envelope: envelope.clone(),
                    last_output: 0.,
                })
            })
            .collect::<Result<Vec<_>, BankError>>()?;
        #[cfg(feature = "log")]
        debug!(
            "Built filter bank at {} Hz with chains {:?}",
            config.sample_rate, config.chains
        );
        Ok(FilterBank { bands })
    }
    pub fn process_sample(&mut self, sample: f64) {
        for band in self.bands.iter_mut() {
            band.last_output = band.chain.apply(sample);
            band.envelope.update(band.last_output);
        }
    }
    pub fn process(&mut self, signal: &[f64]) {
        for sample in signal {
            self.process_sample(*sample);
        }
    }
    /// Current envelope energy of the named chain.
    pub fn energy(&self, name: &str) -> Option<f64> {
        self.band(name).map(|band| band.envelope.energy())
    }
    /// Most recent output sample of the named chain.
    pub fn output(&self, name: &str) -> Option<f64> {
        self.band(name).map(|band| band.last_output)
    }
    pub fn energies(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bands
            .iter()
            .map(|band| (band.chain.name(), band.envelope.energy()))
    }
    pub fn chains(&self) -> impl Iterator<Item = &FilterChain> {
        self.bands.iter().map(|band| &band.chain)
    }
    pub fn reset(&mut self) {
        for band in self.bands.iter_mut() {
            band.chain.reset();
            band.envelope.reset();
            band.last_output = 0.;
        }
    }
    fn band(&self, name: &str) -> Option<&Band> {
        self.bands.iter().find(|band| band.chain.name() == name)
    }
}
