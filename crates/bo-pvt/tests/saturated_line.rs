//! Saturated-line behavior of laws built from the bundled input files.

use std::path::PathBuf;
use std::sync::OnceLock;

use bo_core::{Tolerances, is_non_decreasing, linear_points, nearly_equal};
use bo_pvt::{
    ConsistencyCheck, GasPvt, GasPvtApproach, GasPvtLaw, OilPvt, OilPvtApproach, OilPvtLaw,
    verify_gas, verify_oil,
};
use proptest::prelude::*;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

fn spe1_oil() -> &'static OilPvt {
    static OIL: OnceLock<OilPvt> = OnceLock::new();
    OIL.get_or_init(|| {
        let input = bo_input::load_yaml(&data("spe1.yaml")).unwrap().to_si();
        OilPvt::from_input(input.oil.as_ref().unwrap()).unwrap()
    })
}

fn two_region_gas() -> &'static GasPvt {
    static GAS: OnceLock<GasPvt> = OnceLock::new();
    GAS.get_or_init(|| {
        let input = bo_input::load_yaml(&data("two_region_wet_gas.yaml"))
            .unwrap()
            .to_si();
        GasPvt::from_input(input.gas.as_ref().unwrap()).unwrap()
    })
}

#[test]
fn spe1_live_oil_is_consistent_between_10_and_610_bar() {
    let oil = spe1_oil();
    assert_eq!(oil.approach(), OilPvtApproach::Live);

    let temperature = 273.0;
    let pressures = linear_points(10e5, 610e5, 50);
    let rs_sat: Vec<f64> = pressures
        .iter()
        .map(|&p| oil.saturated_gas_dissolution_factor(0, temperature, p))
        .collect();
    assert!(is_non_decreasing(&rs_sat));

    let tol = Tolerances::saturated_line();
    for (&p, &rs) in pressures.iter().zip(&rs_sat) {
        let b = oil.inverse_formation_volume_factor(0, temperature, p, rs);
        let b_sat = oil.saturated_inverse_formation_volume_factor(0, temperature, p);
        assert!(nearly_equal(b, b_sat, tol), "p = {p}: b = {b}, b_sat = {b_sat}");

        let mu = oil.viscosity(0, temperature, p, rs);
        let mu_sat = oil.saturated_viscosity(0, temperature, p);
        assert!(nearly_equal(mu, mu_sat, tol), "p = {p}: mu = {mu}, mu_sat = {mu_sat}");
    }
}

#[test]
fn spe1_oil_passes_verification() {
    let oil = spe1_oil();
    let report = verify_oil(oil, &ConsistencyCheck::default()).unwrap();
    assert_eq!(report.regions, 1);

    let wide = ConsistencyCheck {
        pressure_range: Some((10e5, 610e5)),
        ..ConsistencyCheck::default()
    };
    verify_oil(oil, &wide).unwrap();
}

#[test]
fn spe1_bubble_point_matches_table() {
    let oil = spe1_oil();
    let psi = 6_894.757_293_168_361;
    let rs_1270 = 1.27 * 1000.0 * 0.028_316_846_592 / 0.158_987_294_928;
    let p_bub = oil.saturation_pressure(0, 300.0, rs_1270);
    assert!((p_bub - 4014.7 * psi).abs() < 1e-3);
}

#[test]
fn wet_gas_regions_pass_verification() {
    let gas = two_region_gas();
    assert_eq!(gas.approach(), GasPvtApproach::Wet);
    assert_eq!(gas.num_regions(), 2);
    let report = verify_gas(gas, &ConsistencyCheck::default()).unwrap();
    assert_eq!(report.regions, 2);
}

#[test]
fn wet_gas_is_lighter_when_dry() {
    let gas = two_region_gas();
    let p = 200e5;
    let rv_sat = gas.saturated_oil_vaporization_factor(1, 350.0, p);
    assert!(rv_sat > 0.0);
    let b_sat = gas.inverse_formation_volume_factor(1, 350.0, p, rv_sat);
    let b_dry = gas.inverse_formation_volume_factor(1, 350.0, p, 0.0);
    assert!(b_dry < b_sat);
}

proptest! {
    #[test]
    fn saturated_rs_never_decreases(p1 in 1.0e5_f64..6.0e7, dp in 0.0_f64..1.0e7) {
        let oil = spe1_oil();
        let lo = oil.saturated_gas_dissolution_factor(0, 300.0, p1);
        let hi = oil.saturated_gas_dissolution_factor(0, 300.0, p1 + dp);
        prop_assert!(hi >= lo);
    }

    #[test]
    fn saturated_rv_never_decreases(region in 0usize..2, p1 in 1.0e6_f64..4.0e7, dp in 0.0_f64..1.0e7) {
        let gas = two_region_gas();
        let lo = gas.saturated_oil_vaporization_factor(region, 350.0, p1);
        let hi = gas.saturated_oil_vaporization_factor(region, 350.0, p1 + dp);
        prop_assert!(hi >= lo);
    }

    #[test]
    fn general_path_meets_saturated_path(p in 2.0e5_f64..6.0e7) {
        let oil = spe1_oil();
        let rs = oil.saturated_gas_dissolution_factor(0, 300.0, p);
        let b = oil.inverse_formation_volume_factor(0, 300.0, p, rs);
        let b_sat = oil.saturated_inverse_formation_volume_factor(0, 300.0, p);
        prop_assert!(nearly_equal(b, b_sat, Tolerances::saturated_line()));
    }
}
