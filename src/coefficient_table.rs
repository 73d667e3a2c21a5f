#[cfg(feature = "log")]
use log::debug;
use savefile::{load_file, load_from_mem, save_file, save_to_mem};

use crate::{
    constants::{
        REFERENCE_SAMPLE_RATE, SNAP_HP, SNAP_HP_NAME, SNAP_LP, SNAP_LP_NAME, SNAP_NAME,
        TABLE_PAYLOAD_VERSION, TRANSIENT, TRANSIENT_NAME,
    },
    BankError, CoefficientSet, FilterChain,
};

/// Ordered coefficient sets of one named filter chain.
#[derive(Savefile, Clone, Debug, PartialEq)]
pub struct ChainSpec {
    pub name: String,
    pub stages: Vec<CoefficientSet>,
}
impl ChainSpec {
    pub fn new(name: &str, stages: Vec<CoefficientSet>) -> Self {
        ChainSpec {
            name: name.to_string(),
            stages,
        }
    }
}

/// Named coefficient sets designed for one sample rate.
///
/// Tables loaded from a payload are checked for unique chain names and
/// finite, stable stages before they are returned.
#[derive(Savefile, Clone, Debug, PartialEq)]
pub struct CoefficientTable {
    pub sample_rate: u32,
    pub chains: Vec<ChainSpec>,
}
impl CoefficientTable {
    pub fn new(sample_rate: u32, chains: Vec<ChainSpec>) -> Self {
        CoefficientTable {
            sample_rate,
            chains,
        }
    }
    /// Snap and transient filters designed for 16 kHz input.
    pub fn reference() -> Self {
        CoefficientTable::new(
            REFERENCE_SAMPLE_RATE,
            vec![
                ChainSpec::new(SNAP_HP_NAME, vec![SNAP_HP]),
                ChainSpec::new(SNAP_LP_NAME, vec![SNAP_LP]),
                ChainSpec::new(TRANSIENT_NAME, vec![TRANSIENT]),
                ChainSpec::new(SNAP_NAME, vec![SNAP_HP, SNAP_LP]),
            ],
        )
    }
    pub fn get(&self, name: &str) -> Option<&ChainSpec> {
        self.chains.iter().find(|chain| chain.name == name)
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.chains.iter().map(|chain| chain.name.as_str())
    }
    pub fn build_chain(&self, name: &str) -> Result<FilterChain, BankError> {
        let spec = self
            .get(name)
            .ok_or_else(|| BankError::UnknownChain(name.to_string()))?;
        FilterChain::new(&spec.name, &spec.stages).map_err(|source| BankError::Filter {
            chain: spec.name.clone(),
            source,
        })
    }
    /// Checks that chain names are unique and every chain can be built.
    pub fn validate(&self) -> Result<(), BankError> {
        for (index, chain) in self.chains.iter().enumerate() {
            if self.chains[..index].iter().any(|other| other.name == chain.name) {
                return Err(BankError::DuplicateChain(chain.name.clone()));
            }
            FilterChain::new(&chain.name, &chain.stages).map_err(|source| BankError::Filter {
                chain: chain.name.clone(),
                source,
            })?;
        }
        Ok(())
    }
    pub fn save_to_buffer(&self) -> Result<Vec<u8>, BankError> {
        save_to_mem(TABLE_PAYLOAD_VERSION, self).map_err(|err| BankError::Save(format!("{:?}", err)))
    }
    pub fn save_to_file(&self, path: &str) -> Result<(), BankError> {
        save_file(path, TABLE_PAYLOAD_VERSION, self)
            .map_err(|err| BankError::Save(path.to_owned() + ": " + &format!("{:?}", err)))
    }
    /// Decodes and validates a table payload.
    ///
    /// The payload must come from a trusted source: length prefixes are used
    /// to allocate before the data is read, so a corrupt prefix can abort the
    /// process instead of returning [`BankError::Load`].
    pub fn load_from_buffer(buffer: &[u8]) -> Result<Self, BankError> {
        let table: CoefficientTable = load_from_mem(buffer, TABLE_PAYLOAD_VERSION)
            .map_err(|err| BankError::Load(format!("{:?}", err)))?;
        table.validate()?;
        #[cfg(feature = "log")]
        debug!(
            "Loaded coefficient table at {} Hz with {} chain(s)",
            table.sample_rate,
            table.chains.len()
        );
        Ok(table)
    }
    /// Reads and validates a table file. Same trust requirement as
    /// [`CoefficientTable::load_from_buffer`].
    pub fn load_from_file(path: &str) -> Result<Self, BankError> {
        let table: CoefficientTable = load_file(path, TABLE_PAYLOAD_VERSION)
            .map_err(|err| BankError::Load(path.to_owned() + ": " + &format!("{:?}", err)))?;
        table.validate()?;
        #[cfg(feature = "log")]
        debug!("Loaded coefficient table from {}", path);
        Ok(table)
    }
}
impl Default for CoefficientTable {
    fn default() -> Self {
        CoefficientTable::reference()
    }
}
