//! Fluid systems built from the bundled input files.

use std::path::PathBuf;

use bo_core::{Tolerances, linear_points, nearly_equal};
use bo_fluidsystem::{
    BlackOilFluidState, BlackOilFluidSystem, FluidStateConfig, FluidSystemBuilder,
    FluidSystemError, Phase,
};
use bo_pvt::{ConsistencyCheck, GasPvtApproach, OilPvtApproach};

fn load(name: &str) -> BlackOilFluidSystem {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name);
    let input = bo_input::load_yaml(&path).unwrap();
    FluidSystemBuilder::from_input(&input)
        .unwrap()
        .build()
        .unwrap()
}

fn saturated_state(fs: &BlackOilFluidSystem, region: usize, p: f64) -> BlackOilFluidState<'_> {
    let mut state = BlackOilFluidState::new(fs, FluidStateConfig::default());
    state.set_pvt_region_index(region);
    for phase in fs.phase_indices().active_phases() {
        state.set_pressure(phase, p);
        state.set_saturation(phase, 1.0 / fs.num_active_phases() as f64);
    }
    let rs = fs.saturated_dissolution_factor(&state, Phase::Oil, region);
    let rv = if fs.enable_vaporized_oil() {
        fs.saturated_dissolution_factor(&state, Phase::Gas, region)
    } else {
        0.0
    };
    state.set_rs(rs);
    state.set_rv(rv);
    fs.update_state(&mut state);
    state
}

#[test]
fn spe1_builds_three_phase_system() {
    let fs = load("spe1.yaml");
    assert_eq!(fs.num_active_phases(), 3);
    assert_eq!(fs.num_regions(), 1);
    assert_eq!(fs.oil_pvt().unwrap().approach(), OilPvtApproach::Live);
    assert_eq!(fs.gas_pvt().unwrap().approach(), GasPvtApproach::Dry);
    assert!(fs.enable_dissolved_gas());
    assert!(!fs.enable_vaporized_oil());
    assert_eq!(fs.reservoir_temperature(0), BlackOilFluidSystem::SURFACE_TEMPERATURE);
    // 49.1 lb/ft³
    assert!((fs.reference_density(Phase::Oil, 0) - 786.5).abs() < 0.1);
}

#[test]
fn spe1_saturated_oil_density_includes_dissolved_gas() {
    let fs = load("spe1.yaml");
    let tol = Tolerances::saturated_line();
    for p in linear_points(10e5, 610e5, 50) {
        let state = saturated_state(&fs, 0, p);
        let b = state.inv_b(Phase::Oil);
        let b_sat = fs.saturated_inverse_formation_volume_factor(&state, Phase::Oil, 0);
        assert!(nearly_equal(b, b_sat, tol), "p = {p}");

        let expected = b
            * (fs.reference_density(Phase::Oil, 0)
                + state.rs() * fs.reference_density(Phase::Gas, 0));
        assert!((state.density(Phase::Oil) - expected).abs() < 1e-9);

        let p_bub = fs.saturation_pressure(&state, Phase::Oil, 0);
        assert!((p_bub - p).abs() < 1e-6 * p, "p = {p}, p_bub = {p_bub}");
    }
}

#[test]
fn parallel_update_matches_serial() {
    let fs = load("two_region_wet_gas.yaml");
    let mut states: Vec<_> = linear_points(60e5, 300e5, 64)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let mut s = saturated_state(&fs, i % 2, p);
            s.set_rs(0.8 * s.rs());
            s
        })
        .collect();
    let serial: Vec<_> = states
        .iter()
        .map(|s| {
            let mut s = s.clone();
            fs.update_state(&mut s);
            s
        })
        .collect();

    fs.update_states(&mut states);
    for (a, b) in states.iter().zip(&serial) {
        for phase in [Phase::Water, Phase::Oil, Phase::Gas] {
            assert_eq!(a.inv_b(phase), b.inv_b(phase));
            assert_eq!(a.density(phase), b.density(phase));
        }
    }
}

#[test]
fn two_region_system_uses_region_temperatures() {
    let fs = load("two_region_wet_gas.yaml");
    assert_eq!(fs.num_regions(), 2);
    assert!(fs.enable_vaporized_oil());
    assert!((fs.reservoir_temperature(0) - 353.15).abs() < 1e-9);
    assert!((fs.reservoir_temperature(1) - 363.15).abs() < 1e-9);

    let state = saturated_state(&fs, 1, 200e5);
    assert!((state.temperature(Phase::Gas) - 363.15).abs() < 1e-9);
    let rv = state.rv();
    assert!(rv > 0.0);
    let expected = state.inv_b(Phase::Gas)
        * (fs.reference_density(Phase::Gas, 1) + rv * fs.reference_density(Phase::Oil, 1));
    assert!((state.density(Phase::Gas) - expected).abs() < 1e-9);
}

#[test]
fn lean_oil_has_lower_bubble_point_and_higher_b() {
    let fs = load("two_region_wet_gas.yaml");
    let saturated = saturated_state(&fs, 0, 250e5);
    let mut lean = saturated.clone();
    lean.set_rs(0.5 * saturated.rs());
    fs.update_state(&mut lean);
    assert!(lean.inv_b(Phase::Oil) > saturated.inv_b(Phase::Oil));
    assert!(fs.saturation_pressure(&lean, Phase::Oil, 0) < 250e5);
    assert!(lean.viscosity(Phase::Oil) > 0.0);
}

#[test]
fn invalid_input_is_reported_not_built() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/spe1.yaml");
    let mut input = bo_input::load_yaml(&path).unwrap();
    input.density.push(input.density[0]);
    let err = FluidSystemBuilder::from_input(&input).unwrap_err();
    assert!(matches!(err, FluidSystemError::Input(_)));
}

#[test]
fn verification_can_be_tuned_or_skipped() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/spe1.yaml");
    let input = bo_input::load_yaml(&path).unwrap();
    let dense = ConsistencyCheck {
        samples: 500,
        pressure_range: Some((1.0e5, 6.0e7)),
        ..ConsistencyCheck::default()
    };
    FluidSystemBuilder::from_input(&input)
        .unwrap()
        .with_consistency_check(dense)
        .build()
        .unwrap();
    FluidSystemBuilder::from_input(&input)
        .unwrap()
        .without_consistency_check()
        .build()
        .unwrap();
}
