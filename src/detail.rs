//! Null-safe field resolution for the asset detail view

use crate::format;
use crate::market_provider::ExtendedAssetRecord;
use std::collections::HashMap;

const ABSENT: &str = "N/A";

/// The lead sentence of a description: everything before the first `.`,
/// or the whole text when there is none.
pub fn short_description(text: &str) -> &str {
    match text.find('.') {
        Some(index) => &text[..index],
        None => text,
    }
}

/// Looks up a currency-denominated field in a per-currency sub-mapping.
pub fn amount_in(map: &HashMap<String, f64>, currency: &str) -> Option<f64> {
    map.get(currency).copied()
}

/// Formats an optional supply figure, falling back to "N/A" when absent.
pub fn format_optional_amount(value: Option<f64>) -> String {
    value.map_or_else(|| ABSENT.to_string(), format::format_amount)
}

impl ExtendedAssetRecord {
    pub fn total_supply_display(&self) -> String {
        format_optional_amount(self.total_supply)
    }

    /// The canonical homepage: first non-empty link, if any. The
    /// upstream API pads the homepage list with empty strings.
    pub fn canonical_homepage(&self) -> Option<&str> {
        self.homepage
            .iter()
            .find(|link| !link.is_empty())
            .map(String::as_str)
    }
}
