use log::debug;
use rust_decimal::Decimal;

use crate::errors::CalculatorError;
use crate::portfolio::summary::{AssetRecord, PortfolioSummary};
use crate::portfolio::valuation::percentage_change;

/// Folds per-asset records into portfolio totals.
///
/// Only the records passed in are counted; holdings that failed to resolve
/// this cycle reduce the totals rather than contributing zeros. The
/// investment total is the sum of live `purchase_value`s, not the declared
/// `investment` of each holding.
///
/// Returns `DivisionByZero` when the total investment is zero, which is
/// always the case for an empty input.
pub fn calculate_portfolio_summary<'a>(
    records: impl IntoIterator<Item = &'a AssetRecord>,
) -> Result<PortfolioSummary, CalculatorError> {
    let mut total_current_value = Decimal::ZERO;
    let mut total_investment = Decimal::ZERO;
    let mut asset_count = 0usize;

    for record in records {
        total_current_value += record.valuation.current_value;
        total_investment += record.valuation.purchase_value;
        asset_count += 1;
    }

    let total_pnl = total_current_value - total_investment;
    let total_pnl_percentage =
        percentage_change(total_pnl, total_investment, "total pnl percentage")?;

    debug!(
        "Portfolio summary over {} assets: value {}, investment {}",
        asset_count, total_current_value, total_investment
    );

    Ok(PortfolioSummary {
        total_current_value,
        total_investment,
        total_pnl,
        total_pnl_percentage,
        asset_count,
    })
}
