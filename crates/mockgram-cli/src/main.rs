use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod app;
mod commands;
mod logging;
mod render;
mod repl;

#[derive(Parser)]
#[command(name = "mockgram")]
#[command(about = "Mockgram - a local mockup of a social media profile page", long_about = None)]
struct Cli {
    /// Directory holding stored data and logs
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "mockgram_infrastructure=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Seed for the feed like counters
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    Repl,
    /// Render one route and exit
    Show {
        /// Route to render, e.g. "/", "/config" or "/publications/3"
        #[arg(default_value = "/")]
        path: String,
    },
    /// Print the stored profile JSON
    Export,
    /// Overwrite the stored profile with the default sample
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = app::Options {
        data_dir: cli.data_dir,
        config_file: cli.config,
        log_level: cli.log_level,
        seed: cli.seed,
    };
    let app = app::bootstrap(options)?;
    let _log_guard = logging::init(&app.logs_dir, &app.log_level)?;

    tracing::info!(
        "[Main] Starting with data directory {}",
        app.data_dir.display()
    );

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run(app).await?,
        Commands::Show { path } => commands::show::run(&app, &path)?,
        Commands::Export => commands::export::run(&app)?,
        Commands::Reset => commands::reset::run(&app)?,
    }

    Ok(())
}
