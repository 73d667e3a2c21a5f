use thiserror::Error;

/// Rejections raised while installing coefficients into a stage or chain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("invalid coefficient {field}: {value} is not allowed")]
    InvalidCoefficients { field: &'static str, value: f64 },

    #[error("unstable coefficients at stage {stage}: pole magnitudes {magnitudes:?}")]
    UnstableCoefficients { stage: usize, magnitudes: [f64; 2] },
}

/// Errors from coefficient tables and filter banks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    #[error("unable to load coefficient table: {0}")]
    Load(String),

    #[error("unable to save coefficient table: {0}")]
    Save(String),

    #[error("unknown filter chain \"{0}\"")]
    UnknownChain(String),

    #[error("filter chain \"{0}\" is listed more than once")]
    DuplicateChain(String),

    #[error("sample rate mismatch: expected {expected} Hz, found {found} Hz")]
    SampleRateMismatch { expected: u32, found: u32 },

    #[error("invalid envelope alphas: attack {attack}, release {release}")]
    InvalidEnvelope { attack: f64, release: f64 },

    #[error("chain \"{chain}\": {source}")]
    Filter {
        chain: String,
        #[source]
        source: FilterError,
    },
}
