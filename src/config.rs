use crate::constants::{
    ENVELOPE_DEFAULT_ATTACK_ALPHA, ENVELOPE_DEFAULT_RELEASE_ALPHA, REFERENCE_SAMPLE_RATE,
    SNAP_NAME, TRANSIENT_NAME,
};
/// Configures the energy envelope tracked for each filter chain.
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone)]
pub struct EnvelopeConfig {
    /// Smoothing factor applied while the energy rises. Range (0, 1].
    pub attack_alpha: f64,
    /// Smoothing factor applied while the energy falls. Range (0, 1].
    pub release_alpha: f64,
}
impl Default for EnvelopeConfig {
    fn default() -> EnvelopeConfig {
        EnvelopeConfig {
            attack_alpha: ENVELOPE_DEFAULT_ATTACK_ALPHA,
            release_alpha: ENVELOPE_DEFAULT_RELEASE_ALPHA,
        }
    }
}
/// Configures a filter bank.
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone)]
pub struct FilterBankConfig {
    /// Sample rate of the input stream, must match the coefficient table.
    pub sample_rate: u32,
    /// Names of the table chains run in parallel, in output order. Each name once.
    pub chains: Vec<String>,
    /// Configures the per-chain energy envelope.
    pub envelope: EnvelopeConfig,
}
impl Default for FilterBankConfig {
    fn default() -> FilterBankConfig {
        FilterBankConfig {
            sample_rate: REFERENCE_SAMPLE_RATE,
            chains: vec![SNAP_NAME.to_string(), TRANSIENT_NAME.to_string()],
            envelope: EnvelopeConfig::default(),
        }
    }
}
