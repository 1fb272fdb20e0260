pub mod config;
pub mod currency;
pub mod detail;
pub mod format;
pub mod list;
pub mod log;
pub mod market_provider;
pub mod providers;
pub mod query;
pub mod show;
pub mod state;
pub mod ui;

use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    List {
        currency: Option<String>,
        query: Option<String>,
        page: Option<usize>,
    },
    Show {
        id: String,
        currency: Option<String>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("coinlens starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let base_url = config
        .provider
        .as_ref()
        .map_or(providers::coingecko::DEFAULT_BASE_URL, |p| &p.base_url);
    let provider = providers::coingecko::CoinGeckoProvider::new(base_url);

    match command {
        AppCommand::List {
            currency,
            query,
            page,
        } => {
            list::run(
                &provider,
                &config,
                list::ListArgs {
                    currency,
                    query,
                    page,
                },
            )
            .await
        }
        AppCommand::Show { id, currency } => show::run(&provider, &config, &id, currency).await,
    }
}
