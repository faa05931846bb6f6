//! stackgen: command-line front end for the Compound Atlas stack generator
//!
//! Generates a single stack from a JSON catalog export, runs the full
//! goal × tier sweep, prints the goal plan table, or scores a study corpus.
//! All output is JSON on stdout; logs go to stderr.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stack_engine::{
    all_plans, compute_evidence_score, ExperienceTier, GeneratorConfig, GeneratorInput, Goal,
    InMemoryStackRepository, JsonFileCatalog, StackGenerator, StackRepository, StudyInput,
    SweepRunner,
};

#[derive(Parser)]
#[command(name = "stackgen")]
#[command(about = "Deterministic supplement and compound stack generator")]
struct Cli {
    /// Path to a YAML generator configuration
    #[arg(short, long, global = true, env = "STACKGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info", env = "STACKGEN_LOG_LEVEL")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one stack and print it as JSON
    Generate {
        /// JSON catalog export (array of compound records)
        #[arg(long, env = "STACKGEN_CATALOG")]
        catalog: PathBuf,

        /// Goal, e.g. SLEEP or hormone-optimization
        #[arg(long)]
        goal: Goal,

        /// Experience tier: beginner, intermediate or advanced
        #[arg(long, default_value = "beginner")]
        tier: ExperienceTier,

        /// Constraint token (repeatable), e.g. --constraint otc-only
        #[arg(long = "constraint")]
        constraints: Vec<String>,

        /// Maximum number of compounds (defaults to the configured value)
        #[arg(long)]
        max: Option<usize>,

        /// Selection offset for rotating candidate choice
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// Regenerate every goal × tier stack and print the sweep report
    Sweep {
        /// JSON catalog export (array of compound records)
        #[arg(long, env = "STACKGEN_CATALOG")]
        catalog: PathBuf,

        /// Also print the stored stacks after the sweep
        #[arg(long)]
        show_stacks: bool,
    },

    /// Print the goal plan table
    Plans,

    /// Score a study corpus (JSON array of studies)
    ScoreEvidence {
        #[arg(long)]
        studies: PathBuf,

        /// Reference year for recency (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("stack_engine={0},stackgen={0}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Generate {
            catalog,
            goal,
            tier,
            constraints,
            max,
            offset,
        } => {
            let generator = StackGenerator::new(Arc::new(JsonFileCatalog::new(catalog)), config);

            let mut input = GeneratorInput::new(
                goal,
                tier,
                max.unwrap_or(generator.config().default_max_compounds),
            )
            .with_offset(offset);
            input.constraints = constraints;

            let stack = generator
                .generate(&input)
                .await
                .context("Failed to generate stack")?;
            print_json(&stack)?;
        }
        Command::Sweep {
            catalog,
            show_stacks,
        } => {
            let sweep_config = config.sweep.clone();
            let generator = StackGenerator::new(Arc::new(JsonFileCatalog::new(catalog)), config);
            let repository = Arc::new(InMemoryStackRepository::new());

            info!(creator = %sweep_config.creator, "Starting sweep");
            let report = SweepRunner::new(generator, repository.clone(), sweep_config)
                .run()
                .await;
            print_json(&report)?;

            if show_stacks {
                let stacks = repository.list().await.context("Failed to list stacks")?;
                print_json(&stacks)?;
            }
        }
        Command::Plans => {
            print_json(&all_plans())?;
        }
        Command::ScoreEvidence { studies, year } => {
            let raw = std::fs::read_to_string(&studies)
                .with_context(|| format!("Failed to read {}", studies.display()))?;
            let studies: Vec<StudyInput> =
                serde_json::from_str(&raw).context("Invalid study list")?;

            let year = year.unwrap_or_else(|| chrono::Utc::now().year());
            print_json(&compute_evidence_score(&studies, year))?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = GeneratorConfig::from_yaml(&yaml)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
