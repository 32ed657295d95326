//! Headless walk simulator
//!
//! Runs a batch of random-walk trials and prints a text summary or the full
//! JSON result. Thin wiring over the engine; all simulation semantics live in
//! the library.

use clap::Parser;

use drunkwalk::core::error::{Result, WalkError};
use drunkwalk::core::types::Direction;
use drunkwalk::field::BoundaryRule;
use drunkwalk::policy::{CategoricalParams, GaussianParams, PolicyConfig};
use drunkwalk::runner::{run_batch, run_batch_parallel, BatchConfig};

#[derive(Parser, Debug)]
#[command(name = "walk_sim")]
#[command(about = "Run 2D random walk batches and report distance statistics")]
struct Args {
    /// Time steps per trial
    #[arg(long, default_value_t = 500)]
    steps: u32,

    /// Number of independent trials
    #[arg(long, default_value_t = 500)]
    trials: u32,

    /// Movement policy: uniform, cold, axis, categorical, gaussian
    #[arg(long, default_value = "uniform")]
    policy: String,

    /// Field variant: standard, or reset (absorbing y=x / y=-x diagonals)
    #[arg(long, default_value = "standard")]
    field: String,

    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Categorical probability of North
    #[arg(long, default_value_t = 0.2)]
    p_north: f64,

    /// Categorical probability of South
    #[arg(long, default_value_t = 0.4)]
    p_south: f64,

    /// Categorical probability of East
    #[arg(long, default_value_t = 0.2)]
    p_east: f64,

    /// Categorical probability of West
    #[arg(long, default_value_t = 0.2)]
    p_west: f64,

    /// Gaussian policy center direction (n/e/s/w)
    #[arg(long, default_value = "south")]
    center: String,

    /// Gaussian policy band width
    #[arg(long, default_value_t = 1.0)]
    spread: f64,

    /// Gaussian policy standard deviation
    #[arg(long, default_value_t = 1.0)]
    std_dev: f64,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Run trials across threads (per-trial random streams)
    #[arg(long)]
    parallel: bool,
}

fn policy_config(args: &Args) -> Result<PolicyConfig> {
    match args.policy.as_str() {
        "uniform" => Ok(PolicyConfig::Uniform),
        "cold" => Ok(PolicyConfig::ColdBiased),
        "axis" => Ok(PolicyConfig::AxisOnly),
        "categorical" => Ok(PolicyConfig::Categorical(CategoricalParams::new(
            args.p_north,
            args.p_south,
            args.p_east,
            args.p_west,
        ))),
        "gaussian" => {
            let center: Direction = args.center.parse()?;
            Ok(PolicyConfig::Gaussian(GaussianParams::new(
                center,
                args.spread,
                args.std_dev,
            )))
        }
        other => Err(WalkError::MisconfiguredPolicy(format!(
            "unknown policy '{}'",
            other
        ))),
    }
}

fn boundary(args: &Args) -> Result<BoundaryRule> {
    match args.field.as_str() {
        "standard" => Ok(BoundaryRule::Standard),
        "reset" => Ok(BoundaryRule::DiagonalReset),
        other => Err(WalkError::MisconfiguredPolicy(format!(
            "unknown field variant '{}'",
            other
        ))),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drunkwalk=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = BatchConfig {
        steps: args.steps,
        trials: args.trials,
        policy: policy_config(&args)?,
        boundary: boundary(&args)?,
        seed: args.seed,
    };

    let output = if args.parallel {
        run_batch_parallel(&config)?
    } else {
        run_batch(&config)?
    };

    match args.format.as_str() {
        "json" => println!("{}", output.to_json()?),
        _ => {
            println!("{}", output.summary());
            let means = output.mean_distances();
            if let Some(last) = means.last() {
                println!("mean distance at t={}: {:.3}", means.len() - 1, last);
            }
        }
    }
    Ok(())
}
