//! Gait schedule planner. Builds a periodic contact schedule and its
//! reference motions from a gait config file.
//!
//! Usage:
//!   gait-schedule --config gait_config.json [OPTIONS]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use gait_schedule::{
    assemble, GaitReferences, GaitTimeline, Horizon, RecordingSolver, ScheduleConfig,
};

/// Periodic legged-gait contact schedule planner.
#[derive(Parser, Debug)]
#[command(name = "gait-schedule")]
#[command(about = "Build a periodic contact schedule and reference motions for a legged gait")]
struct Args {
    /// Path to the gait configuration JSON file.
    #[arg(long, default_value = "~/gait_config.json")]
    config: PathBuf,

    /// Optimizer discretization step in seconds (overrides the config file).
    #[arg(long)]
    dt: Option<f64>,

    /// Number of gait cycles (overrides the config file).
    #[arg(long)]
    cycles: Option<usize>,

    /// Write the recorded schedule and sampled references as JSON.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Sampling interval for the exported references (defaults to dt).
    #[arg(long)]
    sample_interval: Option<f64>,
}

fn main() -> Result<()> {
    // Initialize structured JSON logging
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config_path = expand_home(&args.config);
    tracing::info!("Config: {}", config_path.display());

    let mut config = ScheduleConfig::load(&config_path).context("Failed to load gait config")?;
    if let Some(dt) = args.dt {
        config.step_size = dt;
    }
    if let Some(cycles) = args.cycles {
        config.gait.cycles = cycles;
    }

    let limbs = config.limb_ids();
    let points = config.contact_points();
    let pattern = config.gait_pattern()?;

    let timeline = GaitTimeline::build(&config.gait, &pattern, &limbs, &points)
        .context("Invalid gait timeline")?;
    let references =
        GaitReferences::periodic(&config.gait, &pattern, &points, config.com_height)
            .context("Invalid reference motions")?;
    let horizon = Horizon::new(&config.gait, config.step_size).context("Invalid horizon")?;

    tracing::info!(
        "Horizon: T = {:.3}s, N = {}, max switches = {}",
        horizon.length,
        horizon.steps,
        horizon.max_num_switches
    );

    let solver_config =
        assemble(&timeline, references, &limbs).context("Failed to assemble schedule")?;

    let mut solver = RecordingSolver::default();
    solver_config.apply(&mut solver);

    for switch in solver_config.switches() {
        let active: Vec<String> = switch
            .mode
            .active_limbs()
            .map(|limb| config.limb_name(limb))
            .collect();
        tracing::info!(
            "t = {:.3}s: {:?} [{}]",
            switch.time,
            switch.phase,
            active.join(", ")
        );
    }

    if let Some(weight) = config.total_weight {
        let force = solver_config.initial_contact_force(weight);
        tracing::info!(
            "Initial contact force guess: [{:.2}, {:.2}, {:.2}] N",
            force.x,
            force.y,
            force.z
        );
    }

    if let Some(output) = args.output {
        let interval = args.sample_interval.unwrap_or(config.step_size);
        let plan = solver
            .plan(interval, horizon.length)
            .context("Failed to sample reference motions")?;
        let json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
        std::fs::write(&output, json)
            .with_context(|| format!("Failed to write plan to {}", output.display()))?;
        tracing::info!(
            "Wrote {} reference samples to {}",
            plan.samples.len(),
            output.display()
        );
    }

    Ok(())
}

/// Expand `~` at the start of a path to the user's home directory.
fn expand_home(path: &PathBuf) -> PathBuf {
    if let Some(s) = path.to_str() {
        if s.starts_with("~/") {
            if let Ok(home) = std::env::var("HOME") {
                return PathBuf::from(format!("{}{}", home, &s[1..]));
            }
        }
    }
    path.clone()
}
