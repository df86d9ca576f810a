use clap::Parser;
use qcollapse::core::constants::collapse_constants::{
    DEFAULT_DEPTH, DEFAULT_PROGRESS_INTERVAL, DEFAULT_QUBIT_COUNT, DEFAULT_SAMPLE_COUNT,
};
use qcollapse::{write_csv_file, CollapseError, ExecutionMode, LogProgress, Sampler, SamplerConfig};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(author, version, about = "Collapse sampling: deterministic bitstrings from phase-evolved qubits")]
struct Cli {
    /// Qubits per sample (bitstring length)
    #[arg(long, default_value_t = DEFAULT_QUBIT_COUNT)]
    qubits: usize,

    /// Deterministic evolution rounds applied before collapse
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Number of samples to generate
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Destination CSV file
    #[arg(long, short, default_value = "collapse_rcs_output.csv")]
    output: PathBuf,

    /// Samples between progress reports; 0 disables them
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_every: usize,

    /// Generate samples on all cores (output order is unchanged)
    #[arg(long)]
    parallel: bool,
}

fn init_tracing() {
    let ansi = std::io::stdout().is_terminal();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(ansi);
    Registry::default().with(filter).with(fmt_layer).init();
}

fn run(cli: &Cli) -> Result<(), CollapseError> {
    let config = SamplerConfig::new(cli.qubits, cli.depth, cli.samples)?;
    info!("Collapse Supremacy Simulation | {}", config);

    let mode = if cli.parallel { ExecutionMode::Parallel } else { ExecutionMode::Sequential };
    let sampler = Sampler::new(config)
        .with_mode(mode)
        .with_progress_interval(cli.progress_every);
    let collection = sampler.run_with_progress(&LogProgress);

    write_csv_file(&cli.output, &collection)?;
    info!("Collapse simulation complete. Output saved to {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Collapse simulation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
