use std::path::PathBuf;

use bo_input::schema::*;
use bo_input::{
    InputError, UnitSystem, ValidationError, load, load_yaml, save_json, save_yaml,
    validate_input,
};
use proptest::prelude::*;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

fn dead_oil_input() -> PvtInput {
    PvtInput {
        version: 2,
        name: "dead oil and water".to_string(),
        units: Some(UnitSystem::Metric),
        density: vec![DensityDef {
            oil: 850.0,
            water: 1025.0,
            gas: 0.9,
        }],
        reservoir_temperature: vec![75.0],
        oil: Some(OilPvtDef::Dead {
            regions: vec![PressureTableDef {
                rows: vec![
                    PvtRowDef { p: 10.0, b: 1.12, mu: 1.1 },
                    PvtRowDef { p: 200.0, b: 1.08, mu: 1.3 },
                ],
            }],
        }),
        gas: None,
        water: Some(WaterPvtDef::ConstantCompressibility {
            regions: vec![ConstantCompressibilityDef {
                reference_pressure: 250.0,
                formation_volume_factor: 1.02,
                compressibility: 4.5e-5,
                viscosity: 0.45,
                viscosibility: 0.0,
            }],
        }),
    }
}

#[test]
fn roundtrip_yaml_dead_oil() {
    let input = dead_oil_input();
    validate_input(&input).unwrap();

    let path = std::env::temp_dir().join("bo_input_roundtrip_dead_oil.yaml");
    save_yaml(&path, &input).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(input, loaded);
}

#[test]
fn roundtrip_json_dead_oil() {
    let input = dead_oil_input();
    let path = std::env::temp_dir().join("bo_input_roundtrip_dead_oil.json");
    save_json(&path, &input).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(input, loaded);
}

#[test]
fn save_refuses_invalid_input() {
    let mut input = dead_oil_input();
    input.density[0].oil = -1.0;
    let path = std::env::temp_dir().join("bo_input_invalid.yaml");
    let err = save_yaml(&path, &input).unwrap_err();
    assert!(matches!(err, InputError::Validation(_)));
}

#[test]
fn bundled_files_load() {
    let spe1 = load_yaml(&data("spe1.yaml")).unwrap();
    assert_eq!(spe1.unit_system(), UnitSystem::Field);
    assert_eq!(spe1.num_regions(), 1);
    assert!(matches!(spe1.oil, Some(OilPvtDef::Live { .. })));
    assert!(matches!(spe1.gas, Some(GasPvtDef::Dry { .. })));

    let two = load(&data("two_region_wet_gas.yaml")).unwrap();
    assert_eq!(two.num_regions(), 2);
    assert_eq!(two.oil.as_ref().unwrap().kind(), "live");
    assert_eq!(two.gas.as_ref().unwrap().kind(), "wet");
    assert_eq!(two.water.as_ref().unwrap().num_regions(), 2);
}

#[test]
fn spe1_converts_to_si() {
    let si = load_yaml(&data("spe1.yaml")).unwrap().to_si();
    assert_eq!(si.unit_system(), UnitSystem::Si);

    let Some(OilPvtDef::Live { regions }) = &si.oil else {
        panic!("expected live oil");
    };
    let first = &regions[0].records[0];
    // 14.7 psia
    assert!((first.rows[0].p - 101_352.93).abs() < 0.01);
    // 1.04 cP
    assert!((first.rows[0].mu - 1.04e-3).abs() < 1e-15);
    // 0.001 Mscf/stb
    assert!((first.rs - 0.178_107_6).abs() < 1e-6);

    let Some(GasPvtDef::Dry { regions }) = &si.gas else {
        panic!("expected dry gas");
    };
    // 166.666 rb/Mscf
    assert!((regions[0].rows[0].b - 0.935_760).abs() < 1e-5);

    let Some(WaterPvtDef::ConstantCompressibility { regions }) = &si.water else {
        panic!("expected water");
    };
    // 3.13e-6 1/psi
    assert!((regions[0].compressibility - 4.539_68e-10).abs() < 1e-14);
}

#[test]
fn version_one_documents_migrate_to_metric() {
    let yaml = r#"
version: 1
name: legacy
density:
  - { oil: 850.0, water: 1025.0, gas: 0.9 }
oil:
  type: dead
  regions:
    - rows:
        - { p: 10.0, b: 1.12, mu: 1.1 }
        - { p: 200.0, b: 1.08, mu: 1.3 }
"#;
    let input = bo_input::from_yaml_str(yaml).unwrap();
    assert_eq!(input.version, bo_input::LATEST_VERSION);
    assert_eq!(input.unit_system(), UnitSystem::Metric);
}

#[test]
fn wrong_region_count_is_rejected() {
    let mut input = dead_oil_input();
    input.density.push(input.density[0]);
    let err = validate_input(&input).unwrap_err();
    assert!(matches!(err, ValidationError::RegionCount { .. }));
}

proptest! {
    #[test]
    fn metric_pressure_is_bar(p in 0.0_f64..1.0e4) {
        let si = UnitSystem::Metric.pressure(p);
        prop_assert!((si - p * 1.0e5).abs() <= 1e-9 * si.abs().max(1.0));
    }

    #[test]
    fn field_ratios_are_reciprocal(r in 1.0e-6_f64..10.0) {
        let rs = UnitSystem::Field.gas_oil_ratio(r);
        let back = rs * UnitSystem::Field.oil_gas_ratio(1.0);
        prop_assert!((back - r).abs() <= 1e-12 * r);
    }
}
