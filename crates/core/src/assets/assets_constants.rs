use rust_decimal_macros::dec;

use super::AssetConfig;

pub const RENDER_SYMBOL: &str = "RENDERUSDT";
pub const SUI_SYMBOL: &str = "SUIUSDT";
pub const THETA_SYMBOL: &str = "THETAUSDT";
pub const RVN_SYMBOL: &str = "RVNUSDT";

/// Quote suffix stripped for display tickers.
pub const QUOTE_ASSET_SUFFIX: &str = "USDT";

/// The configured holdings, in display order.
pub fn default_holdings() -> Vec<AssetConfig> {
    vec![
        AssetConfig::new(
            RENDER_SYMBOL,
            "Render Token",
            dec!(3.42),
            dec!(92.89),
            dec!(317.70),
            dec!(25.6),
        ),
        AssetConfig::new(
            SUI_SYMBOL,
            "Sui",
            dec!(3.05),
            dec!(101.31),
            dec!(309.01),
            dec!(24.9),
        ),
        AssetConfig::new(
            THETA_SYMBOL,
            "Theta Network",
            dec!(0.71),
            dec!(435.22),
            dec!(309.01),
            dec!(24.9),
        ),
        AssetConfig::new(
            RVN_SYMBOL,
            "Ravencoin",
            dec!(0.019),
            dec!(16002.37),
            dec!(304.05),
            dec!(24.5),
        ),
    ]
}
