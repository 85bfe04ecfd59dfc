use bo_core::Real;
use bo_fluidsystem::{
    BlackOilFluidState, BlackOilFluidSystem, FluidStateConfig, FluidSystemBuilder,
    FluidSystemError, Phase,
};
use bo_input::{InputError, PvtInput};
use bo_pvt::{
    ConsistencyCheck, ConsistencyError, ConsistencyReport, GasPvt, GasPvtLaw, OilPvt, OilPvtLaw,
    PvtError, WaterPvtLaw, verify_gas, verify_oil,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bo")]
#[command(about = "Black-oil PVT tables: verification and point evaluation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify that saturated and undersaturated branches meet on the saturation line
    Check {
        /// Path to the PVT input file (YAML or JSON)
        input_path: PathBuf,
        /// Pressures sampled per region
        #[arg(long, default_value_t = 50)]
        samples: usize,
        /// Lower end of the sampled pressure span in Pa
        #[arg(long, requires = "p_max")]
        p_min: Option<Real>,
        /// Upper end of the sampled pressure span in Pa
        #[arg(long, requires = "p_min")]
        p_max: Option<Real>,
    },
    /// List active phases, PVT approaches and regions
    Inspect {
        /// Path to the PVT input file (YAML or JSON)
        input_path: PathBuf,
    },
    /// Evaluate every active phase at one pressure
    Sample {
        /// Path to the PVT input file (YAML or JSON)
        input_path: PathBuf,
        /// PVT region index (zero based)
        #[arg(long, default_value_t = 0)]
        region: usize,
        /// Pressure in Pa
        #[arg(long)]
        p: Real,
        /// Dissolved gas-oil ratio in sm³/sm³; saturated when omitted
        #[arg(long)]
        rs: Option<Real>,
        /// Vaporized oil-gas ratio in sm³/sm³; saturated when omitted
        #[arg(long)]
        rv: Option<Real>,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Pvt(#[from] PvtError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    #[error(transparent)]
    FluidSystem(#[from] FluidSystemError),

    #[error("PVT region {region} out of range ({count} regions)")]
    Region { region: usize, count: usize },

    #[error("Invalid pressure span: {p_min} Pa to {p_max} Pa")]
    PressureSpan { p_min: Real, p_max: Real },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            input_path,
            samples,
            p_min,
            p_max,
        } => cmd_check(&input_path, samples, p_min.zip(p_max)),
        Commands::Inspect { input_path } => cmd_inspect(&input_path),
        Commands::Sample {
            input_path,
            region,
            p,
            rs,
            rv,
        } => cmd_sample(&input_path, region, p, rs, rv),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ {err}");
            ExitCode::FAILURE
        }
    }
}

/// Load, migrate and validate a document, then convert it to SI.
fn load_si(input_path: &Path) -> CliResult<PvtInput> {
    let input = bo_input::load(input_path)?;
    tracing::debug!(path = %input_path.display(), units = ?input.unit_system(), "input loaded");
    Ok(input.to_si())
}

fn cmd_check(
    input_path: &Path,
    samples: usize,
    span: Option<(Real, Real)>,
) -> CliResult<()> {
    if let Some((p_min, p_max)) = span {
        if !(p_min.is_finite() && p_max.is_finite() && p_min < p_max) {
            return Err(CliError::PressureSpan { p_min, p_max });
        }
    }

    println!("Checking saturated lines: {}", input_path.display());
    let input = load_si(input_path)?;
    let check = ConsistencyCheck {
        samples,
        pressure_range: span,
        ..ConsistencyCheck::default()
    };

    let mut checked = 0;
    if let Some(def) = &input.oil {
        let oil = OilPvt::from_input(def)?;
        print_report(&verify_oil(&oil, &check)?, &oil.approach().to_string());
        checked += 1;
    }
    if let Some(def) = &input.gas {
        let gas = GasPvt::from_input(def)?;
        print_report(&verify_gas(&gas, &check)?, &gas.approach().to_string());
        checked += 1;
    }

    if checked == 0 {
        println!("No oil or gas tables to check");
    } else {
        println!("✓ Saturated lines are consistent");
    }
    Ok(())
}

fn print_report(report: &ConsistencyReport, approach: &str) {
    println!(
        "  {} ({}): {} regions x {} samples, max deviation {:.3e}",
        report.fluid, approach, report.regions, report.samples, report.max_deviation
    );
}

fn cmd_inspect(input_path: &Path) -> CliResult<()> {
    let input = bo_input::load(input_path)?;
    let system = FluidSystemBuilder::from_input(&input)?
        .without_consistency_check()
        .build()?;

    println!("Input: {} ({})", input.name, input_path.display());
    println!("Units: {:?}", input.unit_system());
    println!("Regions: {}", system.num_regions());

    println!("\nPhases:");
    for phase in system.phase_indices().active_phases() {
        let approach = match phase {
            Phase::Oil => system.oil_pvt().map(|l| l.approach().to_string()),
            Phase::Gas => system.gas_pvt().map(|l| l.approach().to_string()),
            Phase::Water => system.water_pvt().map(|l| l.approach().to_string()),
        };
        println!(
            "  {} [slot {}]: {}",
            phase,
            system.phase_indices().canonical_to_active(phase),
            approach.unwrap_or_default()
        );
    }
    println!("  dissolved gas:  {}", system.enable_dissolved_gas());
    println!("  vaporized oil:  {}", system.enable_vaporized_oil());

    println!("\nRegions:");
    for region in 0..system.num_regions() {
        println!(
            "  {}: T = {:.2} K, surface densities oil {:.3} / water {:.3} / gas {:.5} kg/m³",
            region,
            system.reservoir_temperature(region),
            system.reference_density(Phase::Oil, region),
            system.reference_density(Phase::Water, region),
            system.reference_density(Phase::Gas, region),
        );
        let spans = [
            ("oil", system.oil_pvt().map(|l| l.pressure_range(region))),
            ("gas", system.gas_pvt().map(|l| l.pressure_range(region))),
            ("water", system.water_pvt().map(|l| l.pressure_range(region))),
        ];
        for (fluid, span) in spans {
            if let Some((lo, hi)) = span {
                println!("     {fluid:<5} tables span {lo:.4e} .. {hi:.4e} Pa");
            }
        }
    }
    Ok(())
}

fn cmd_sample(
    input_path: &Path,
    region: usize,
    pressure: Real,
    rs: Option<Real>,
    rv: Option<Real>,
) -> CliResult<()> {
    let input = bo_input::load(input_path)?;
    let system = FluidSystemBuilder::from_input(&input)?.build()?;
    if region >= system.num_regions() {
        return Err(CliError::Region {
            region,
            count: system.num_regions(),
        });
    }

    let state = sample_state(&system, region, pressure, rs, rv);

    println!(
        "Region {}, p = {:.6e} Pa, T = {:.2} K",
        region,
        pressure,
        system.reservoir_temperature(region)
    );
    println!(
        "  {:<6} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "phase", "b [-]", "mu [Pa.s]", "rho [kg/m3]", "R_sat", "p_sat [Pa]"
    );
    for phase in system.phase_indices().active_phases() {
        println!(
            "  {:<6} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
            phase.name(),
            state.inv_b(phase),
            state.viscosity(phase),
            state.density(phase),
            system.saturated_dissolution_factor(&state, phase, region),
            system.saturation_pressure(&state, phase, region),
        );
    }
    if state.config().enable_dissolution {
        println!("  Rs = {:.6e}, Rv = {:.6e}", state.rs(), state.rv());
    }
    Ok(())
}

/// A fully populated state at one pressure with equal phase saturations.
fn sample_state<'a>(
    system: &'a BlackOilFluidSystem,
    region: usize,
    pressure: Real,
    rs: Option<Real>,
    rv: Option<Real>,
) -> BlackOilFluidState<'a> {
    let mut state = BlackOilFluidState::new(system, FluidStateConfig::default());
    state.set_pvt_region_index(region);

    let phases: Vec<Phase> = system.phase_indices().active_phases().collect();
    let saturation = 1.0 / phases.len() as Real;
    for &phase in &phases {
        state.set_pressure(phase, pressure);
        state.set_saturation(phase, saturation);
    }

    let rs = match rs {
        Some(rs) => rs,
        None if system.enable_dissolved_gas() => {
            system.saturated_dissolution_factor(&state, Phase::Oil, region)
        }
        None => 0.0,
    };
    let rv = match rv {
        Some(rv) => rv,
        None if system.enable_vaporized_oil() => {
            system.saturated_dissolution_factor(&state, Phase::Gas, region)
        }
        None => 0.0,
    };
    state.set_rs(rs);
    state.set_rv(rv);

    system.update_state(&mut state);
    state
}
