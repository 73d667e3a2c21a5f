use crate::CoefficientSet;

/// Sample rate the reference coefficients were designed for.
pub const REFERENCE_SAMPLE_RATE: u32 = 16000;

pub const SNAP_HP_NAME: &str = "SNAP_HP";
pub const SNAP_LP_NAME: &str = "SNAP_LP";
pub const TRANSIENT_NAME: &str = "TRANSIENT";
/// Band-pass composite, SNAP_HP followed by SNAP_LP.
pub const SNAP_NAME: &str = "SNAP";

pub const SNAP_HP_CUTOFF_HZ: f64 = 1500.;
pub const SNAP_LP_CUTOFF_HZ: f64 = 3500.;
pub const TRANSIENT_CUTOFF_HZ: f64 = 3000.;

// 2nd-order Butterworth sections, bilinear transform with pre-warping, fs = 16000 Hz.

/// High-pass @ 1500 Hz.
pub const SNAP_HP: CoefficientSet = CoefficientSet {
    b0: 0.65745519149122955,
    b1: -1.3149103829824591,
    b2: 0.65745519149122955,
    a1: -1.193913367720578,
    a2: 0.43590739824434022,
};
/// Low-pass @ 3500 Hz.
pub const SNAP_LP: CoefficientSet = CoefficientSet {
    b0: 0.23764399438510744,
    b1: 0.47528798877021489,
    b2: 0.23764399438510744,
    a1: -0.23039625268721683,
    a2: 0.18097223022764664,
};
/// High-pass @ 3000 Hz.
pub const TRANSIENT: CoefficientSet = CoefficientSet {
    b0: 0.41816334576189884,
    b1: -0.83632669152379768,
    b2: 0.41816334576189884,
    a1: -0.46293802529104094,
    a2: 0.20971535775655464,
};

/// Envelope smoothing used while the energy rises.
pub const ENVELOPE_DEFAULT_ATTACK_ALPHA: f64 = 0.3;
/// Envelope smoothing used while the energy falls.
pub const ENVELOPE_DEFAULT_RELEASE_ALPHA: f64 = 0.1;

/// Version passed to savefile when writing or reading coefficient tables.
pub const TABLE_PAYLOAD_VERSION: u32 = 0;
