//! Solar estimator entry point: CLI wiring and config-driven model construction.

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::info;

use solar_estimator::config::EstimatorConfig;
use solar_estimator::input::EstimateForm;
use solar_estimator::io::batch::{estimate_file, export_csv, write_csv};
use solar_estimator::logging;
use solar_estimator::report::SavingsReport;

/// Estimate solar savings from a monthly electricity bill.
#[derive(Parser, Debug)]
#[command(name = "solar-estimator", version, about, long_about = None)]
struct Args {
    /// Monthly electricity bill, parsed like the form field (e.g. "120")
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    bill: Option<String>,

    /// Home size, parsed like the form field (e.g. "1500")
    #[arg(long, value_name = "AREA", allow_hyphen_values = true)]
    home_size: Option<String>,

    /// Location tier: high, medium or low (anything else is neutral)
    #[arg(long, value_name = "TIER")]
    location: Option<String>,

    /// Load model factors and defaults from a TOML file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Estimate every row of a CSV file (monthly_bill,home_size,location)
    #[arg(long, value_name = "PATH", conflicts_with_all = ["bill", "home_size"])]
    inputs: Option<PathBuf>,

    /// Write batch results to this CSV file instead of stdout
    #[arg(long, value_name = "PATH", requires = "inputs")]
    out: Option<PathBuf>,

    /// Start the REST API server
    #[cfg(feature = "api")]
    #[arg(long)]
    serve: bool,

    /// API server port (default from config, else 3000)
    #[cfg(feature = "api")]
    #[arg(long, value_name = "PORT", requires = "serve")]
    port: Option<u16>,
}

impl Args {
    fn wants_single_estimate(&self) -> bool {
        self.bill.is_some() || self.home_size.is_some()
    }

    #[cfg(feature = "api")]
    fn wants_server(&self) -> bool {
        self.serve
    }

    #[cfg(not(feature = "api"))]
    fn wants_server(&self) -> bool {
        false
    }
}

fn load_config(path: Option<&Path>) -> EstimatorConfig {
    let cfg = match path {
        Some(path) => match EstimatorConfig::from_toml_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        None => EstimatorConfig::standard(),
    };

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    cfg
}

fn run_batch(cfg: &EstimatorConfig, inputs: &Path, out: Option<&Path>) {
    let entries = match estimate_file(&cfg.model(), inputs) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("error: failed to read \"{}\": {e}", inputs.display());
            process::exit(1);
        }
    };

    let written = match out {
        Some(path) => export_csv(&entries, path).map(|()| {
            info!(path = %path.display(), "batch results written");
        }),
        None => write_csv(&entries, io::stdout().lock()),
    };
    if let Err(e) = written {
        eprintln!("error: failed to write CSV: {e}");
        process::exit(1);
    }
}

fn run_single(cfg: &EstimatorConfig, args: &Args) {
    let form = EstimateForm::new(
        args.bill.clone().unwrap_or_default(),
        args.home_size.clone().unwrap_or_default(),
        args.location
            .clone()
            .unwrap_or_else(|| cfg.defaults.location.clone()),
    );

    match form.validate() {
        Ok(input) => {
            let result = cfg.model().estimate(&input);
            println!("{}", SavingsReport::new(&result));
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

#[cfg(feature = "api")]
fn run_server(cfg: &EstimatorConfig, port: Option<u16>) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let state = Arc::new(solar_estimator::api::AppState { model: cfg.model() });
    let addr = SocketAddr::from(([0, 0, 0, 0], port.unwrap_or(cfg.defaults.port)));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(solar_estimator::api::serve(state, addr)) {
        eprintln!("error: API server failed on {addr}: {e}");
        process::exit(1);
    }
}

fn main() {
    logging::init();
    let args = Args::parse();

    if !args.wants_single_estimate() && args.inputs.is_none() && !args.wants_server() {
        eprintln!("error: nothing to estimate; pass --bill and --home-size, or --inputs <csv>");
        eprintln!("Run with --help for usage.");
        process::exit(2);
    }

    let cfg = load_config(args.config.as_deref());

    if let Some(ref inputs) = args.inputs {
        run_batch(&cfg, inputs, args.out.as_deref());
    } else if args.wants_single_estimate() {
        run_single(&cfg, &args);
    }

    #[cfg(feature = "api")]
    if args.serve {
        run_server(&cfg, args.port);
    }
}
