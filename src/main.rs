//! Convert trained GAN parameters to Q1.15 hex for RTL testbenches.
//!
//! # Commands
//!
//! - `convert` - Decimal parameter text files to Q1.15 hex files
//! - `extract` - JSON parameter store to text, hex, and sample inputs
//! - `samples` - Generate seeded latent sample inputs
//! - `report` - Per-parameter quantization error table and chart

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use q15_param_converter::config::ConvertConfig;
use q15_param_converter::error::Result;
use q15_param_converter::matrices::Matrix;
use q15_param_converter::params::GanParameters;
use q15_param_converter::samples::SampleConfig;
use q15_param_converter::{io, report, samples};

/// Q1.15 parameter converter for the simple-GAN RTL testbench.
#[derive(Parser)]
#[command(name = "q15-param-converter")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert decimal parameter text files to Q1.15 hex files
    Convert {
        /// Directory containing the parameter .txt files
        #[arg(long, default_value = "parameters")]
        params_dir: PathBuf,

        /// Output directory for hex files (defaults to <params-dir>/hex)
        #[arg(long)]
        hex_dir: Option<PathBuf>,
    },
    /// Extract a JSON parameter store into text, hex, and sample inputs
    Extract {
        /// Path to the parameter store (gan_parameters.json layout)
        #[arg(value_name = "JSON")]
        json: PathBuf,

        /// Output directory
        #[arg(long, default_value = "parameters")]
        out_dir: PathBuf,

        /// Number of latent sample inputs to generate
        #[arg(long, default_value = "10")]
        samples: usize,

        /// Rng seed for sample generation
        #[arg(long, default_value = "42")]
        seed: u64,
    },
    /// Generate seeded latent sample inputs
    Samples {
        #[arg(long, default_value = "10")]
        count: usize,

        #[arg(long, default_value = "2")]
        latent_dim: usize,

        #[arg(long, default_value = "42")]
        seed: u64,

        #[arg(long, default_value = "parameters")]
        out_dir: PathBuf,
    },
    /// Report per-parameter quantization error
    Report {
        /// Path to the parameter store (gan_parameters.json layout)
        #[arg(value_name = "JSON")]
        json: PathBuf,

        /// Output PNG for the MSE chart
        #[arg(long, default_value = "quantization-mse.png")]
        chart: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Commands::Convert {
            params_dir,
            hex_dir,
        } => run_convert(params_dir, hex_dir),
        Commands::Extract {
            json,
            out_dir,
            samples,
            seed,
        } => run_extract(&json, &out_dir, samples, seed),
        Commands::Samples {
            count,
            latent_dim,
            seed,
            out_dir,
        } => {
            fs::create_dir_all(&out_dir)?;
            write_samples(
                &out_dir,
                &SampleConfig {
                    count,
                    latent_dim,
                    seed,
                },
            )
        }
        Commands::Report { json, chart } => run_report(&json, &chart),
    }
}

fn run_convert(params_dir: PathBuf, hex_dir: Option<PathBuf>) -> Result<()> {
    let hex_dir = hex_dir.unwrap_or_else(|| params_dir.join("hex"));
    let config = ConvertConfig::new(params_dir, hex_dir);

    fs::create_dir_all(&config.hex_dir)?;

    let mut converted = 0;
    for file in &config.param_files {
        let input = config.params_dir.join(file);
        let output = config.hex_dir.join(file);

        if !input.exists() {
            tracing::warn!(file = %input.display(), "input not found, skipping");
            continue;
        }

        let count = io::convert_file(&input, &output)?;
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            values = count,
            "converted"
        );
        converted += 1;
    }

    tracing::info!(files = converted, "conversion complete");
    Ok(())
}

fn run_extract(json: &Path, out_dir: &Path, sample_count: usize, seed: u64) -> Result<()> {
    let params = GanParameters::from_json_file(json)?;
    fs::create_dir_all(out_dir)?;

    for (name, matrix) in params.named_matrices()? {
        io::write_decimal(&out_dir.join(format!("{name}.txt")), &matrix)?;
        io::write_hex_lines(
            &out_dir.join(format!("{name}_q15.hex")),
            &matrix.quantize_q15().hex_lines(),
        )?;
        tracing::info!(name, rows = matrix.rows, cols = matrix.cols, "extracted");
    }

    params.to_json_file(&out_dir.join("gan_parameters.json"))?;

    write_samples(
        out_dir,
        &SampleConfig {
            count: sample_count,
            seed,
            ..SampleConfig::default()
        },
    )
}

fn write_samples(out_dir: &Path, config: &SampleConfig) -> Result<()> {
    for (i, sample) in samples::generate(config).into_iter().enumerate() {
        let matrix = Matrix::column(sample);
        io::write_decimal(&out_dir.join(format!("input_sample_{i:02}.txt")), &matrix)?;
        io::write_hex_lines(
            &out_dir.join(format!("input_sample_{i:02}_q15.hex")),
            &matrix.quantize_q15().hex_lines(),
        )?;
    }

    tracing::info!(
        count = config.count,
        latent_dim = config.latent_dim,
        seed = config.seed,
        "sample inputs written"
    );
    Ok(())
}

fn run_report(json: &Path, chart: &Path) -> Result<()> {
    let params = GanParameters::from_json_file(json)?;

    let entries: Vec<(String, f64)> = params
        .named_matrices()?
        .into_iter()
        .map(|(name, matrix)| (name.to_string(), report::quantization_mse(&matrix)))
        .collect();

    for (name, mse) in &entries {
        tracing::info!(name = %name, mse, "quantization error");
    }

    report::plot_mse(&entries, chart)?;
    tracing::info!(chart = %chart.display(), "MSE chart written");
    Ok(())
}
