use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current worth and profit/loss of one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValuation {
    /// `current_price × quantity`
    pub current_value: Decimal,
    /// `purchase_price × quantity`
    pub purchase_value: Decimal,
    /// `current_value − purchase_value`
    pub pnl: Decimal,
    /// Price move since purchase, in percent
    pub pnl_percentage: Decimal,
}
