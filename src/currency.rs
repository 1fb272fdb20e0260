//! Currency code to display symbol mapping

/// Resolves currency codes to display glyphs.
///
/// Lookup is total: unknown codes resolve to the registry's default
/// symbol. The list and detail views carry different defaults, so each
/// constructs its own registry.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyRegistry {
    default_symbol: &'static str,
}

impl CurrencyRegistry {
    /// Registry for the ranked list view; unknown codes fall back to "₹".
    pub fn for_list() -> Self {
        CurrencyRegistry {
            default_symbol: "₹",
        }
    }

    /// Registry for the detail view; unknown codes fall back to "₦".
    pub fn for_detail() -> Self {
        CurrencyRegistry {
            default_symbol: "₦",
        }
    }

    pub fn symbol_for(&self, code: &str) -> &'static str {
        match code {
            "inr" => "₹",
            "usd" => "$",
            "eur" => "€",
            "ngn" => "₦",
            _ => self.default_symbol,
        }
    }
}
