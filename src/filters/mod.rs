mod biquad_stage;
mod energy_envelope;
mod filter_chain;
pub use biquad_stage::BiquadStage;
pub use energy_envelope::EnergyEnvelope;
pub use filter_chain::FilterChain;
