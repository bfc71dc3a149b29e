use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dishpick_client::DEFAULT_BASE_URL;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dishpick")]
#[command(about = "What to eat today: keep a list of dishes and let chance pick one", long_about = None)]
struct Cli {
    /// Base URL of a running dishpick server (shell commands only)
    #[arg(long, global = true, env = "DISHPICK_URL", default_value = DEFAULT_BASE_URL)]
    url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API and web UI
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Keep dishes in process memory instead of PostgreSQL
        #[arg(long)]
        memory: bool,
    },
    /// Create the dishes table and seed sample dishes into an empty one
    InitDb,
    /// Import dish names from a free-text menu file
    Import {
        #[arg(default_value = "menu.txt")]
        file: PathBuf,
        /// Parse and preview only, without touching the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Show which database environment variables are set
    CheckEnv,
    /// Print the stored dishes
    List,
    /// Add one dish
    Add { name: String },
    /// Delete one dish
    Remove { name: String },
    /// Delete every dish
    Clear {
        /// Confirm deleting everything
        #[arg(long)]
        yes: bool,
    },
    /// Add the preset dishes
    Preset,
    /// Pick today's dish
    Pick,
    /// Query the server health endpoint
    Health,
}

fn load_env_files() {
    for file in [".env.local", ".env"] {
        if let Ok(path) = dotenvy::from_filename(file) {
            tracing::debug!(path = %path.display(), "loaded environment file");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();
    load_env_files();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port, host, memory } => commands::serve::run(port, host, memory).await,
        Commands::InitDb => commands::maintenance::init_db().await,
        Commands::Import { file, dry_run } => commands::maintenance::import(&file, dry_run).await,
        Commands::CheckEnv => {
            commands::maintenance::check_env();
            Ok(())
        },
        Commands::List => commands::shell::list(&cli.url).await,
        Commands::Add { name } => commands::shell::add(&cli.url, &name).await,
        Commands::Remove { name } => commands::shell::remove(&cli.url, &name).await,
        Commands::Clear { yes } => commands::shell::clear(&cli.url, yes).await,
        Commands::Preset => commands::shell::preset(&cli.url).await,
        Commands::Pick => commands::shell::pick(&cli.url).await,
        Commands::Health => commands::shell::health(&cli.url).await,
    }
}
