use snapfilter::{
    BankError, ChainSpec, CoefficientSet, CoefficientTable, FilterBank, FilterBankConfig,
    FrameLevels, SNAP_HP, SNAP_LP, SNAP_NAME, TRANSIENT_NAME,
};

fn init_logger() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .ok();
}

fn tone(frequency: f64, amplitude: f64, length: usize) -> Vec<f64> {
    let sample_rate = snapfilter::REFERENCE_SAMPLE_RATE as f64;
    (0..length)
        .map(|n| amplitude * (std::f64::consts::TAU * frequency * n as f64 / sample_rate).sin())
        .collect()
}

/// Mean envelope energy of each chain over the second half of the signal.
fn settled_energies(bank: &mut FilterBank, signal: &[f64]) -> (f64, f64) {
    bank.reset();
    let (warmup, measured) = signal.split_at(signal.len() / 2);
    bank.process(warmup);
    let mut snap = 0.;
    let mut transient = 0.;
    for sample in measured {
        bank.process_sample(*sample);
        snap += bank.energy(SNAP_NAME).unwrap();
        transient += bank.energy(TRANSIENT_NAME).unwrap();
    }
    let count = measured.len() as f64;
    (snap / count, transient / count)
}

#[test]
fn it_separates_snap_band_from_low_tones() {
    init_logger();
    let mut bank =
        FilterBank::new(&CoefficientTable::reference(), &FilterBankConfig::default()).unwrap();
    let (low_snap, _) = settled_energies(&mut bank, &tone(200., 0.5, 3200));
    let (mid_snap, _) = settled_energies(&mut bank, &tone(2500., 0.5, 3200));
    assert!(mid_snap > 100. * low_snap, "{} vs {}", mid_snap, low_snap);
}

#[test]
fn it_favors_transient_band_for_high_tones() {
    init_logger();
    let mut bank =
        FilterBank::new(&CoefficientTable::reference(), &FilterBankConfig::default()).unwrap();
    let (snap, transient) = settled_energies(&mut bank, &tone(6000., 0.5, 3200));
    assert!(transient > 10. * snap, "{} vs {}", transient, snap);
}

#[test]
fn it_keeps_zero_energy_on_silence() {
    init_logger();
    let mut bank =
        FilterBank::new(&CoefficientTable::reference(), &FilterBankConfig::default()).unwrap();
    bank.process(&vec![0.; 4096]);
    for (name, energy) in bank.energies() {
        assert_eq!(energy, 0., "{}", name);
    }
}

#[test]
fn it_follows_a_click_and_decays() {
    init_logger();
    let mut bank =
        FilterBank::new(&CoefficientTable::reference(), &FilterBankConfig::default()).unwrap();
    let mut click = vec![0.; 800];
    click[0] = 1.;
    click[1] = -1.;
    bank.process(&click[..8]);
    let peak = bank.energy(TRANSIENT_NAME).unwrap();
    assert!(peak > 0.);
    bank.process(&click[8..]);
    assert!(bank.energy(TRANSIENT_NAME).unwrap() < peak * 1e-6);
}

#[test]
fn it_builds_banks_from_custom_chains() {
    init_logger();
    let table = CoefficientTable::new(
        16000,
        vec![
            ChainSpec::new("BAND", vec![SNAP_HP, SNAP_LP]),
            ChainSpec::new("BYPASS", vec![]),
        ],
    );
    let config = FilterBankConfig {
        chains: vec!["BYPASS".to_string(), "BAND".to_string()],
        ..FilterBankConfig::default()
    };
    let mut bank = FilterBank::new(&table, &config).unwrap();
    bank.process_sample(0.5);
    assert_eq!(bank.output("BYPASS"), Some(0.5));
    assert_eq!(bank.energies().map(|(name, _)| name).collect::<Vec<_>>(), vec!["BYPASS", "BAND"]);
    let missing = FilterBankConfig {
        chains: vec!["TRANSIENT".to_string()],
        ..FilterBankConfig::default()
    };
    assert_eq!(
        FilterBank::new(&table, &missing).unwrap_err(),
        BankError::UnknownChain("TRANSIENT".to_string())
    );
}

#[test]
fn it_loads_tables_from_file() {
    init_logger();
    let dir = std::env::temp_dir();
    let path = dir.join(format!("snapfilter-table-{}.bin", std::process::id()));
    let path = path.to_str().unwrap();
    let mut table = CoefficientTable::reference();
    table.chains.push(ChainSpec::new(
        "SNAP_LP_X2",
        vec![SNAP_LP, CoefficientSet::from_sos(SNAP_LP.to_sos()).unwrap()],
    ));
    table.save_to_file(path).unwrap();
    let loaded = CoefficientTable::load_from_file(path).unwrap();
    std::fs::remove_file(path).ok();
    assert_eq!(loaded, table);
    assert_eq!(loaded.build_chain("SNAP_LP_X2").unwrap().len(), 2);
    assert!(matches!(
        CoefficientTable::load_from_file(path),
        Err(BankError::Load(_))
    ));
}

#[test]
fn it_measures_frame_levels() {
    let frame = tone(1000., 0.5, 1600);
    let levels = FrameLevels::measure(&frame);
    assert!((levels.peak - 0.5).abs() < 1e-9);
    assert!((levels.rms - 0.5 / std::f64::consts::SQRT_2).abs() < 1e-9);
    assert!((levels.crest_factor() - std::f64::consts::SQRT_2).abs() < 1e-9);
}

#[test]
fn it_rejects_tables_with_repeated_chain_names() {
    init_logger();
    let dir = std::env::temp_dir();
    let path = dir.join(format!("snapfilter-duplicate-{}.bin", std::process::id()));
    let path = path.to_str().unwrap();
    let mut table = CoefficientTable::reference();
    table.chains.push(ChainSpec::new(
        "SNAP_LP",
        vec![SNAP_LP, CoefficientSet::new(0.9, -1.8, 0.9, -2.1, 1.1).unwrap()],
    ));
    table.save_to_file(path).unwrap();
    let loaded = CoefficientTable::load_from_file(path);
    std::fs::remove_file(path).ok();
    assert_eq!(
        loaded.unwrap_err(),
        BankError::DuplicateChain("SNAP_LP".to_string())
    );
}
