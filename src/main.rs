use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use coinlens::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for coinlens::AppCommand {
    fn from(cmd: Commands) -> coinlens::AppCommand {
        match cmd {
            Commands::List {
                currency,
                query,
                page,
            } => coinlens::AppCommand::List {
                currency,
                query,
                page,
            },
            Commands::Show { id, currency } => coinlens::AppCommand::Show { id, currency },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Browse the ranked market list
    List {
        /// Currency to denominate prices in (e.g. usd, eur, ngn)
        #[arg(long)]
        currency: Option<String>,
        /// Filter assets by name
        #[arg(short, long)]
        query: Option<String>,
        /// Page of the filtered list to show
        #[arg(short, long)]
        page: Option<usize>,
    },
    /// Show extended details for one asset
    Show {
        /// Asset id, e.g. "bitcoin"
        id: String,
        /// Currency to denominate prices in (e.g. usd, eur, ngn)
        #[arg(long)]
        currency: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => coinlens::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = coinlens::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
provider:
  base_url: "https://api.coingecko.com"

list_currency: "inr"
detail_currency: "ngn"
page_size: 10
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
