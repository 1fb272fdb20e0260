//! The ranked list command: fetch, filter, paginate, render.

use crate::config::AppConfig;
use crate::currency::CurrencyRegistry;
use crate::market_provider::MarketProvider;
use crate::state::{AppState, Event, FETCH_ERROR_MESSAGE};
use crate::ui;
use anyhow::Result;
use comfy_table::Cell;

pub struct ListArgs {
    pub currency: Option<String>,
    pub query: Option<String>,
    pub page: Option<usize>,
}

pub async fn run(
    provider: &(dyn MarketProvider + Send + Sync),
    config: &AppConfig,
    args: ListArgs,
) -> Result<()> {
    let currency = args
        .currency
        .unwrap_or_else(|| config.list_currency.clone());
    let mut state = AppState::new(&currency, config.page_size);
    if let Some(query) = args.query {
        state.apply(Event::QueryChanged(query));
    }
    if let Some(page) = args.page {
        state.apply(Event::PageChanged(page));
    }

    state.apply(Event::RefreshRequested);
    let spinner = ui::new_spinner("Loading cryptocurrency data...");
    let result = provider.fetch_ranked(state.currency()).await;
    spinner.finish_and_clear();
    state.apply(Event::FetchCompleted {
        generation: state.generation(),
        result,
    });

    if state.error().is_some() {
        anyhow::bail!(FETCH_ERROR_MESSAGE);
    }

    println!("{}", render(&state));
    Ok(())
}

fn render(state: &AppState) -> String {
    let registry = CurrencyRegistry::for_list();
    let symbol = registry.symbol_for(state.currency());
    let view = state.current_page();

    if view.filtered_count == 0 {
        return format!("No assets match \"{}\".", state.query().query());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Name"),
        ui::header_cell("Symbol"),
        ui::header_cell(&format!("Price ({symbol})")),
        ui::header_cell(&format!("Market Cap ({symbol})")),
        ui::header_cell("1h Change"),
        ui::header_cell("24h Change"),
        ui::header_cell("7d Change"),
    ]);

    for (i, asset) in view.items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(view.offset + i + 1),
            Cell::new(&asset.name),
            Cell::new(asset.symbol.to_uppercase()),
            ui::amount_cell(symbol, asset.current_price),
            ui::amount_cell(symbol, asset.market_cap),
            ui::change_cell(asset.change_1h),
            ui::change_cell(asset.change_24h),
            ui::change_cell(asset.change_7d),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!(
        "\n\nPage {} of {} ({} assets)",
        view.page, view.total_pages, view.filtered_count
    ));

    if let Some(updated) = state.records().first().and_then(|r| r.last_updated) {
        output.push('\n');
        output.push_str(&ui::style_text(
            &format!("Data as of {}", updated.format("%Y-%m-%d %H:%M UTC")),
            ui::StyleType::Subtle,
        ));
    }

    output
}
