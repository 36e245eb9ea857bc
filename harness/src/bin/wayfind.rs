//! `wayfind`: command-line driver for the search engines.
//!
//! ```text
//! wayfind ucs        lights-out <instance>
//! wayfind best-first lights-out <instance> <g-weight> <h-weight>
//! wayfind inspect    lights-out <instance> [--walk-length N] [--seed N]
//! wayfind hill-climb 8queens [--bounded [MAX_STEPS]] [--runs N] [--seed N] [--size N]
//! ```
//!
//! Usage errors exit with status 2, instance and run errors with status 1.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wayfind_harness::loading::load_lights_out;
use wayfind_harness::report::Report;
use wayfind_harness::runner::{
    inspect, run_trials, solve, DEFAULT_WALK_LENGTH, DEFAULT_WALK_SEED,
};
use wayfind_harness::worlds::queens::{Queens, DEFAULT_SIZE};
use wayfind_search::policy::{BestFirstPolicy, HillClimbingPolicy};

#[derive(Parser)]
#[command(name = "wayfind", about = "Best-first search and hill climbing drivers")]
struct Cli {
    /// Print reports as JSON (with a determinism digest) instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Stop best-first search after this many expansions
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    max_expansions: Option<u64>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Uniform-cost search (g weight 1, h weight 0)
    Ucs {
        space: SpaceName,
        instance: PathBuf,
    },
    /// Weighted best-first search on g * G_WEIGHT + h * H_WEIGHT
    BestFirst {
        space: SpaceName,
        instance: PathBuf,
        g_weight: u64,
        h_weight: u64,
    },
    /// Dump successors of the initial state and take a seeded random walk
    Inspect {
        space: SpaceName,
        instance: PathBuf,
        #[arg(long, default_value_t = DEFAULT_WALK_LENGTH)]
        walk_length: usize,
        #[arg(long, default_value_t = DEFAULT_WALK_SEED)]
        seed: u64,
    },
    /// Repeated hill-climbing trials
    HillClimb {
        problem: ProblemName,
        /// Accept plateau moves, stopping after MAX_STEPS moves
        #[arg(long, num_args = 0..=1, value_name = "MAX_STEPS",
              default_missing_value = "100",
              value_parser = clap::value_parser!(u64).range(1..))]
        bounded: Option<u64>,
        #[arg(long, default_value_t = 1000)]
        runs: u64,
        /// Seed for candidate generation (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Board size
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SpaceName {
    LightsOut,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProblemName {
    #[value(name = "8queens", alias = "queens")]
    EightQueens,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Cmd::Ucs { space, instance } => {
            cmd_solve(cli, *space, instance, BestFirstPolicy::uniform_cost())
        }
        Cmd::BestFirst {
            space,
            instance,
            g_weight,
            h_weight,
        } => cmd_solve(
            cli,
            *space,
            instance,
            BestFirstPolicy::weighted(*g_weight, *h_weight),
        ),
        Cmd::Inspect {
            space: SpaceName::LightsOut,
            instance,
            walk_length,
            seed,
        } => {
            let world = load_lights_out(instance)?;
            let mut rng = StdRng::seed_from_u64(*seed);
            emit(cli, &inspect(&world, *walk_length, &mut rng))
        }
        Cmd::HillClimb {
            problem: ProblemName::EightQueens,
            bounded,
            runs,
            seed,
            size,
        } => {
            let policy = bounded.map_or(HillClimbingPolicy::Unbounded, |max_steps| {
                HillClimbingPolicy::Bounded { max_steps }
            });
            let seed = seed.unwrap_or_else(rand::random);
            info!("hill climbing seed: {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            let summary = run_trials(&Queens::new(*size), policy, *runs, &mut rng)
                .context("hill climbing failed")?;
            emit(cli, &summary)
        }
    }
}

fn cmd_solve(
    cli: &Cli,
    space: SpaceName,
    instance: &Path,
    mut policy: BestFirstPolicy,
) -> Result<()> {
    if let Some(limit) = cli.max_expansions {
        policy = policy.with_max_expansions(limit);
    }
    policy.validate().context("invalid search policy")?;
    match space {
        SpaceName::LightsOut => {
            let world = load_lights_out(instance)?;
            if !cli.json {
                println!("Starting search...");
            }
            let report = solve(&world, &policy).context("search failed")?;
            emit(cli, &report)
        }
    }
}

fn emit<R: Report + std::fmt::Display>(cli: &Cli, report: &R) -> Result<()> {
    if cli.json {
        let mut value = report.to_json();
        if let serde_json::Value::Object(map) = &mut value {
            map.insert("digest".into(), report.digest().into());
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
