//! Display formatting for amounts, percentages and tickers.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::assets::QUOTE_ASSET_SUFFIX;

fn round(value: Decimal, decimals: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // avoid "-0.00"
        Decimal::ZERO
    } else {
        rounded
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a USD amount, e.g. `1234.5` with 2 decimals → `"$1,234.50"`.
pub fn format_currency(value: Decimal, decimals: u32) -> String {
    let rounded = round(value, decimals);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let fixed = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    match frac_part {
        Some(frac) => format!("{}${}.{}", sign, group_thousands(int_part), frac),
        None => format!("{}${}", sign, group_thousands(int_part)),
    }
}

/// Formats a signed percentage, e.g. `3.456` → `"+3.46%"`.
pub fn format_percentage(value: Decimal, decimals: u32) -> String {
    let rounded = round(value, decimals);
    let sign = if rounded.is_sign_negative() { "" } else { "+" };
    format!("{}{:.*}%", sign, decimals as usize, rounded)
}

/// Ticker shown to users: the trading pair without its quote asset.
pub fn display_ticker(symbol: &str) -> &str {
    symbol.strip_suffix(QUOTE_ASSET_SUFFIX).unwrap_or(symbol)
}
