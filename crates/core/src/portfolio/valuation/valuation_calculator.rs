use crate::errors::CalculatorError;
use crate::portfolio::valuation::AssetValuation;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Returns `delta / base × 100`.
///
/// Fails with `DivisionByZero` when `base` is zero instead of producing a
/// non-finite value. `context` names the quantity for the error message.
pub fn percentage_change(
    delta: Decimal,
    base: Decimal,
    context: &str,
) -> Result<Decimal, CalculatorError> {
    if base.is_zero() {
        return Err(CalculatorError::division_by_zero(context));
    }
    delta
        .checked_div(base)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or_else(|| CalculatorError::overflow(context))
}

/// Values one holding at `current_price`.
///
/// The percentage is computed from the two prices, not from
/// `pnl / purchase_value`; with a fixed quantity both agree.
///
/// # Arguments
///
/// * `current_price` - Latest traded price
/// * `purchase_price` - Configured purchase price; must be non-zero
/// * `quantity` - Units held
pub fn calculate_asset_pnl(
    current_price: Decimal,
    purchase_price: Decimal,
    quantity: Decimal,
) -> Result<AssetValuation, CalculatorError> {
    let current_value = current_price
        .checked_mul(quantity)
        .ok_or_else(|| CalculatorError::overflow("current value"))?;
    let purchase_value = purchase_price
        .checked_mul(quantity)
        .ok_or_else(|| CalculatorError::overflow("purchase value"))?;
    let pnl = current_value - purchase_value;
    let pnl_percentage =
        percentage_change(current_price - purchase_price, purchase_price, "pnl percentage")?;

    Ok(AssetValuation {
        current_value,
        purchase_value,
        pnl,
        pnl_percentage,
    })
}
