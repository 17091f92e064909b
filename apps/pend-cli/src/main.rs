use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use pend_core::{m, mps2, rad, radps};
use pend_sim::{
    FrameProjector, PendulumParams, PendulumState, SessionOptions, SimulationSession,
};

mod config;

use config::RunConfig;

#[derive(Parser)]
#[command(name = "pend-cli")]
#[command(about = "Pendsim CLI - gravity pendulum simulation runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a run configuration and print derived quantities
    Inspect {
        /// Path to the run config YAML file (defaults to the demo run)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Integrate one or more windows and export the sampled trajectory
    Simulate {
        /// Path to the run config YAML file (defaults to the demo run)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of consecutive windows to integrate
        #[arg(long, default_value_t = 1)]
        windows: u32,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { config } => cmd_inspect(config.as_deref()),
        Commands::Simulate {
            config,
            windows,
            output,
        } => cmd_simulate(config.as_deref(), windows, output.as_deref()),
    }
}

fn resolve_config(path: Option<&Path>) -> Result<RunConfig, Box<dyn Error>> {
    match path {
        Some(p) => config::load(p).map_err(Into::into),
        None => Ok(RunConfig::default()),
    }
}

fn build_session(cfg: &RunConfig) -> Result<SimulationSession, Box<dyn Error>> {
    let params = PendulumParams::new(m(cfg.length_m), mps2(cfg.gravity_mps2))?;
    let initial = PendulumState::new(rad(cfg.theta0_rad), radps(cfg.omega0_rad_s));
    let options = SessionOptions {
        samples_per_window: cfg.samples_per_window,
        integrator: cfg.integrator.into(),
    };
    Ok(SimulationSession::start(params, initial, options)?)
}

fn cmd_inspect(config: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let cfg = resolve_config(config)?;
    let session = build_session(&cfg)?;
    let params = session.params();
    let grid = session.grid();

    println!("Pendulum run configuration:");
    println!("  L  = {} m", params.length_m());
    println!("  g  = {} m/s²", params.gravity_mps2());
    println!("  θ0 = {} rad", cfg.theta0_rad);
    println!("  ω0 = {} rad/s", cfg.omega0_rad_s);
    println!("Derived:");
    println!("  natural period = {:.6} s", params.natural_period_s());
    println!(
        "  window: {} samples, dt = {:.6} s, integrator = {:?}",
        grid.len(),
        grid.span_s() / (grid.len() - 1) as f64,
        session.options().integrator
    );
    println!(
        "  initial specific energy = {:.6}",
        session.dynamics().specific_energy(&session.trajectory()[0])
    );
    println!("✓ Configuration is valid");
    Ok(())
}

fn cmd_simulate(
    config: Option<&Path>,
    windows: u32,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    if windows == 0 {
        return Err("at least one window is required".into());
    }

    let cfg = resolve_config(config)?;
    let mut session = build_session(&cfg)?;

    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    write_csv(&mut out, &mut session, windows)?;
    out.flush()?;

    if let Some(path) = output {
        println!("✓ Exported to {}", path.display());
    }
    Ok(())
}

/// Write the trajectory of `windows` consecutive windows as CSV.
///
/// Times are offset per window so the exported series is one continuous
/// timeline; each window's seed sample duplicates the previous window's
/// final sample and is skipped after the first window.
fn write_csv(
    out: &mut dyn Write,
    session: &mut SimulationSession,
    windows: u32,
) -> Result<(), Box<dyn Error>> {
    let projector = FrameProjector::origin_relative(session.params());
    let span = session.grid().span_s();

    writeln!(
        out,
        "# pendsim export {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out, "t_s,theta_rad,omega_rad_s,x_m,y_m,energy")?;

    let mut rows = 0usize;
    for window in 0..windows {
        let offset = f64::from(window) * span;
        let skip = usize::from(window > 0);

        for (i, state) in session.trajectory().iter().enumerate().skip(skip) {
            let t = offset + session.grid().times()[i];
            let [x, y] = projector.project(state.theta_rad);
            let energy = session.dynamics().specific_energy(state);
            writeln!(
                out,
                "{t},{},{},{x},{y},{energy}",
                state.theta_rad, state.omega_rad_s
            )?;
            rows += 1;
        }

        if window + 1 < windows {
            session.rearm()?;
        }
    }

    info!(rows, windows, "export complete");
    Ok(())
}
