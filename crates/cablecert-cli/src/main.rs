use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cablecert_analyze::measure_copper;
use cablecert_core::{Medium, ParameterMap};
use cablecert_runner::{certify, demo_results, load_results, render, render_limits, render_measurements, Config, OutputFormat};

#[derive(Parser)]
#[command(name = "cablecert", version)]
struct Cli {
    /// Config file (default: .cablecert/cablecert.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format override: text | json | yaml
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file
    Init,

    /// Certify a copper (UTP) link from a JSON/YAML results file
    Copper {
        #[arg(long)]
        input: PathBuf,
        /// Also print the per-parameter measurement table
        #[arg(long, default_value_t = false)]
        measurements: bool,
    },

    /// Certify a fiber link (loss budget + optional OTDR trace)
    Fiber {
        #[arg(long)]
        input: PathBuf,
    },

    /// Print the built-in limit tables
    Limits,

    /// Analyze the bundled marginal Cat6 example
    Demo,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let cfg_path = match cli.config {
        Some(p) => p,
        None => Config::config_path(&std::env::current_dir()?),
    };

    let cfg = Config::load_or_default(&cfg_path)?;
    let format = match cli.format.as_deref() {
        Some(f) => f.parse::<OutputFormat>()?,
        None => cfg.output.format,
    };

    let (results, medium): (ParameterMap, Medium) = match cli.cmd {
        Command::Init => {
            Config::default_config().save_to(&cfg_path)?;
            println!("Wrote {}", cfg_path.display());
            return Ok(ExitCode::SUCCESS);
        }
        Command::Limits => {
            print!("{}", render_limits());
            return Ok(ExitCode::SUCCESS);
        }
        Command::Copper { input, measurements } => {
            let results = load_results(&input)?;
            if measurements {
                let (category, tests) = measure_copper(&results);
                print!("{}", render_measurements(category, &tests));
            }
            (results, Medium::Copper)
        }
        Command::Fiber { input } => (load_results(&input)?, Medium::Fiber),
        Command::Demo => (demo_results(), Medium::Copper),
    };

    let report = certify(&results, medium)?;
    println!("{}", render(&report, format, cfg.output.pretty)?);

    if cfg.analysis.fail_on.trips(report.overall_status) {
        tracing::warn!(status = %report.overall_status, "certification did not pass");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
