use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use primes::{parse_bound, render, runner, Algorithm, OutputFormat, RunConfig, DEFAULT_BOUNDS};

#[derive(Parser)]
#[command(author, version, about = "List the primes up to a bound with three classic algorithms")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the primes up to each bound
    List {
        /// Upper bounds, inclusive (defaults to 10 and 100)
        #[arg(value_parser = parse_bound)]
        bounds: Vec<usize>,

        /// Algorithm to run (repeatable; defaults to all three)
        #[arg(short, long = "algorithm", value_parser = parse_algorithm)]
        algorithms: Vec<Algorithm>,

        /// Output format (text or json)
        #[arg(long, default_value_t = OutputFormat::Text, env = "PRIMES_FORMAT")]
        format: OutputFormat,

        /// Print only how many primes each algorithm found
        #[arg(long)]
        count_only: bool,

        /// Check that all algorithms agree before listing
        #[arg(long)]
        verify: bool,
    },
    /// Check that all algorithms produce the same primes
    Verify {
        /// Upper bounds, inclusive (defaults to 10 and 100)
        #[arg(value_parser = parse_bound)]
        bounds: Vec<usize>,
    },
    /// Show the available algorithms
    Algorithms,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    match cli.command {
        Commands::List {
            bounds,
            algorithms,
            format,
            count_only,
            verify,
        } => {
            let config = RunConfig::with_bounds(bounds_or_default(bounds))
                .with_algorithms(&algorithms)
                .with_format(format)
                .with_count_only(count_only)
                .with_verify(verify);
            handle_list(&config)?;
        }
        Commands::Verify { bounds } => {
            handle_verify(&bounds_or_default(bounds))?;
        }
        Commands::Algorithms => {
            for algorithm in Algorithm::ALL {
                println!("{:<8} {}", algorithm, algorithm.complexity());
            }
        }
    }

    info!(elapsed = ?start_time.elapsed(), "done");
    Ok(())
}

fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse()
        .map_err(|_| format!("unknown algorithm '{s}' (expected naive, bounded or sieve)"))
}

fn bounds_or_default(bounds: Vec<usize>) -> Vec<usize> {
    if bounds.is_empty() {
        DEFAULT_BOUNDS.to_vec()
    } else {
        bounds
    }
}

fn handle_list(config: &RunConfig) -> Result<()> {
    info!(
        bounds = ?config.bounds,
        algorithms = ?config.algorithms,
        format = %config.format,
        "listing primes"
    );

    let reports = runner::run_config(config).context("failed to list primes")?;
    print!("{}", render(&reports, config.format, config.count_only)?);
    Ok(())
}

fn handle_verify(bounds: &[usize]) -> Result<()> {
    for &bound in bounds {
        let primes = runner::verify_agreement(bound)
            .with_context(|| format!("verification failed for bound {bound}"))?;
        println!("bound={bound}: all algorithms agree on {} primes", primes.len());
    }
    Ok(())
}
