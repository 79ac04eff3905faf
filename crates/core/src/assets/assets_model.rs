use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One configured holding.
///
/// `investment` and `percentage` are the declared amount invested and the
/// declared target allocation. They are set once at configuration time and
/// are never reconciled with live values; valuation uses `purchase_price`
/// and `quantity` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConfig {
    /// Exchange trading pair, e.g. "SUIUSDT"
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Average purchase price per unit
    pub purchase_price: Decimal,
    /// Units held
    pub quantity: Decimal,
    /// Declared amount invested
    pub investment: Decimal,
    /// Declared target allocation (0-100)
    pub percentage: Decimal,
}

impl AssetConfig {
    pub fn new(
        symbol: &str,
        name: &str,
        purchase_price: Decimal,
        quantity: Decimal,
        investment: Decimal,
        percentage: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            purchase_price,
            quantity,
            investment,
            percentage,
        }
    }
}
