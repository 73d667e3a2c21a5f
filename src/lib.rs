extern crate savefile;
#[macro_use]
extern crate savefile_derive;

mod coefficient_table;
mod coefficients;
mod config;
mod constants;
mod error;
mod filter_bank;
mod filters;
mod frame_levels;
pub mod stability;
pub use coefficient_table::ChainSpec;
pub use coefficient_table::CoefficientTable;
pub use coefficients::CoefficientSet;
pub use config::EnvelopeConfig;
pub use config::FilterBankConfig;
pub use constants::{
    REFERENCE_SAMPLE_RATE, SNAP_HP, SNAP_HP_CUTOFF_HZ, SNAP_HP_NAME, SNAP_LP, SNAP_LP_CUTOFF_HZ,
    SNAP_LP_NAME, SNAP_NAME, TRANSIENT, TRANSIENT_CUTOFF_HZ, TRANSIENT_NAME,
};
pub use error::{BankError, FilterError};
pub use filter_bank::FilterBank;
pub use filters::BiquadStage;
pub use filters::EnergyEnvelope;
pub use filters::FilterChain;
pub use frame_levels::FrameLevels;
pub use stability::{Pole, StabilityVerdict};
