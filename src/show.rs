//! The detail command: fetch one asset and render its extended record.

use crate::config::AppConfig;
use crate::currency::CurrencyRegistry;
use crate::detail;
use crate::market_provider::{ExtendedAssetRecord, MarketProvider};
use crate::ui;
use anyhow::Result;
use comfy_table::Cell;
use std::collections::HashMap;
use tracing::debug;

pub async fn run(
    provider: &(dyn MarketProvider + Send + Sync),
    config: &AppConfig,
    id: &str,
    currency: Option<String>,
) -> Result<()> {
    let currency = currency.unwrap_or_else(|| config.detail_currency.clone());

    let spinner = ui::new_spinner("Loading cryptocurrency details...");
    let result = provider.fetch_by_id(id).await;
    spinner.finish_and_clear();

    let record = match result {
        Ok(record) => record,
        Err(err) => {
            debug!(error = %err, "Detail fetch failed");
            anyhow::bail!("Failed to fetch data. Please try again later.");
        }
    };

    println!("{}", render(&record, &currency));
    Ok(())
}

fn currency_cell(map: &HashMap<String, f64>, currency: &str, symbol: &str) -> Cell {
    match detail::amount_in(map, currency) {
        Some(value) => ui::amount_cell(symbol, value),
        None => ui::na_cell(),
    }
}

fn render(record: &ExtendedAssetRecord, currency: &str) -> String {
    let registry = CurrencyRegistry::for_detail();
    let symbol = registry.symbol_for(currency);

    let mut output = format!("{}\n", ui::style_text(&record.name, ui::StyleType::Title));

    let short = detail::short_description(&record.description);
    if !short.is_empty() {
        output.push_str(&format!("\n{short}.\n"));
    }

    let mut table = ui::new_styled_table();
    table.add_row(vec![
        ui::header_cell("Symbol"),
        Cell::new(record.symbol.to_uppercase()),
    ]);
    table.add_row(vec![
        ui::header_cell("Rank"),
        Cell::new(format!("#{}", record.market_cap_rank)),
    ]);
    table.add_row(vec![
        ui::header_cell("Market Cap"),
        currency_cell(&record.market_cap, currency, symbol),
    ]);
    table.add_row(vec![
        ui::header_cell("Current Price"),
        currency_cell(&record.current_price, currency, symbol),
    ]);
    table.add_row(vec![
        ui::header_cell("Total Supply"),
        Cell::new(record.total_supply_display()),
    ]);
    table.add_row(vec![
        ui::header_cell("Market Cap Change (24h)"),
        ui::change_cell(Some(record.market_cap_change_percentage_24h)),
    ]);
    table.add_row(vec![
        ui::header_cell("High (24h)"),
        currency_cell(&record.high_24h, currency, symbol),
    ]);
    table.add_row(vec![
        ui::header_cell("Low (24h)"),
        currency_cell(&record.low_24h, currency, symbol),
    ]);
    table.add_row(vec![
        ui::header_cell("Total Volume (24h)"),
        currency_cell(&record.total_volume, currency, symbol),
    ]);
    table.add_row(vec![
        ui::header_cell("Circulating Supply"),
        Cell::new(crate::format::format_amount(record.circulating_supply)),
    ]);
    table.add_row(vec![
        ui::header_cell("Homepage"),
        Cell::new(record.canonical_homepage().unwrap_or("N/A")),
    ]);

    output.push('\n');
    output.push_str(&table.to_string());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ExtendedAssetRecord {
        ExtendedAssetRecord {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            image: String::new(),
            description: "Bitcoin is a currency. It is decentralized.".to_string(),
            market_cap_rank: 1,
            circulating_supply: 19500000.0,
            total_supply: None,
            market_cap_change_percentage_24h: -0.85,
            current_price: [("ngn".to_string(), 75000000.0)].into(),
            market_cap: [("ngn".to_string(), 1500000000000.0)].into(),
            high_24h: [("ngn".to_string(), 76000000.0)].into(),
            low_24h: [("ngn".to_string(), 74000000.0)].into(),
            total_volume: [("ngn".to_string(), 42000000000.0)].into(),
            homepage: vec!["https://bitcoin.org".to_string()],
        }
    }

    #[test]
    fn test_render_detail_card() {
        let output = render(&sample_record(), "ngn");
        assert!(output.contains("Bitcoin is a currency."));
        assert!(output.contains("BTC"));
        assert!(output.contains("#1"));
        assert!(output.contains("₦75,000,000"));
        assert!(output.contains("19,500,000"));
        assert!(output.contains("https://bitcoin.org"));
    }

    #[test]
    fn test_render_missing_total_supply_falls_back() {
        let output = render(&sample_record(), "ngn");
        assert!(output.contains("N/A"));
    }

    #[test]
    fn test_render_unsupported_currency_degrades_to_na() {
        let record = sample_record();
        let output = render(&record, "usd");
        // Monetary fields are undefined for codes the record lacks.
        assert!(output.contains("N/A"));
        assert!(!output.contains("75,000,000"));
    }
}
