use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

use cosmicflow::commands::{self, context::ContextArgs, AppContext};
use cosmicflow::models::ContextPreset;
use cosmicflow::utils::config;

/// Conditional astrological context for a conversational assistant
#[derive(Parser)]
#[command(name = "cosmicflow")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Settings file (JSON). Defaults to $COSMICFLOW_SETTINGS.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the context for one turn and print it as JSON
    Context {
        #[arg(long)]
        user: String,
        #[arg(long)]
        utterance: Option<String>,
        /// Repeatable
        #[arg(long = "intention")]
        intentions: Vec<String>,
        /// quick_cosmic, transit_focus, natal_study or deep_analysis
        #[arg(long)]
        preset: Option<ContextPreset>,
        /// JSON list of upcoming transits
        #[arg(long)]
        transits: Option<PathBuf>,
    },
    /// Store a user's birth chart (JSON list of placements) and birthday
    Profile {
        #[arg(long)]
        user: String,
        #[arg(long)]
        chart: PathBuf,
        /// YYYY-MM-DD
        #[arg(long)]
        birthday: Option<NaiveDate>,
    },
    /// Delete expired patterns
    Reap,
    /// Pattern and embedding counts
    Stats,
    /// Embed the knowledge catalog
    Index {
        #[arg(long)]
        category: Option<String>,
    },
    /// Semantic search over the embedded catalog
    Search {
        query: String,
        #[arg(long, default_value_t = 5)]
        limit: usize,
        #[arg(long)]
        category: Option<String>,
    },
    /// Reap expired patterns periodically until interrupted
    Reaper,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let settings = config::load_settings(cli.settings.as_deref())?;
    let app = AppContext::open(settings)?;

    match cli.command {
        Commands::Context {
            user,
            utterance,
            intentions,
            preset,
            transits,
        } => {
            let ctx = commands::context::build_context(
                &app,
                ContextArgs {
                    user_id: &user,
                    utterance: utterance.as_deref(),
                    intentions,
                    preset,
                    transits: transits.as_deref(),
                },
            )
            .await?;
            print_json(&ctx)
        }
        Commands::Profile {
            user,
            chart,
            birthday,
        } => {
            let placements = commands::profile::read_chart_file(&chart)?;
            let saved = commands::profile::save_profile(&app, &user, &placements, birthday).await?;
            println!("Saved {} placements for {}", saved, user);
            Ok(())
        }
        Commands::Reap => {
            let removed = commands::maintenance::reap(&app).await?;
            println!("{}", removed);
            Ok(())
        }
        Commands::Stats => print_json(&commands::maintenance::stats(&app).await?),
        Commands::Index { category } => {
            print_json(&commands::knowledge::index(&app, category.as_deref()).await?)
        }
        Commands::Search {
            query,
            limit,
            category,
        } => print_json(&commands::knowledge::search(&app, &query, limit, category.as_deref()).await?),
        Commands::Reaper => {
            let interval = Duration::from_secs(app.settings.database.reaper_interval_secs);
            let handle = app.store.clone().start_reaper(interval);
            tokio::signal::ctrl_c().await?;
            handle.abort();
            log::info!("[PatternStore] Reaper stopped");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    config::load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
