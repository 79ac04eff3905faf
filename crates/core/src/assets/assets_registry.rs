use std::collections::{HashMap, HashSet};

use log::debug;
use rust_decimal::Decimal;

use super::{default_holdings, AssetConfig};
use crate::errors::{Result, ValidationError};

/// Read-only table of configured holdings, keyed by symbol.
///
/// Built once at startup and shared behind an `Arc`; there is no way to
/// mutate it afterwards.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    assets: Vec<AssetConfig>,
    index: HashMap<String, usize>,
}

impl AssetRegistry {
    /// Build a registry, rejecting holdings that valuation could not handle.
    pub fn new(assets: Vec<AssetConfig>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(assets.len());
        for asset in &assets {
            validate_asset(asset)?;
            if !seen.insert(asset.symbol.as_str()) {
                return Err(ValidationError::DuplicateSymbol(asset.symbol.clone()).into());
            }
        }

        let index = assets
            .iter()
            .enumerate()
            .map(|(i, asset)| (asset.symbol.clone(), i))
            .collect();

        debug!("Asset registry built with {} holdings", assets.len());
        Ok(Self { assets, index })
    }

    /// The four configured holdings.
    pub fn default_portfolio() -> Self {
        let assets = default_holdings();
        let index = assets
            .iter()
            .enumerate()
            .map(|(i, asset)| (asset.symbol.clone(), i))
            .collect();
        Self { assets, index }
    }

    pub fn get(&self, symbol: &str) -> Option<&AssetConfig> {
        self.index.get(symbol).map(|&i| &self.assets[i])
    }

    /// Symbols in configuration order.
    pub fn symbols(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.symbol.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetConfig> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::default_portfolio()
    }
}

fn validate_asset(asset: &AssetConfig) -> Result<()> {
    if asset.symbol.trim().is_empty() {
        return Err(ValidationError::MissingField("symbol".to_string()).into());
    }
    if asset.purchase_price <= Decimal::ZERO {
        return Err(ValidationError::NotPositive {
            symbol: asset.symbol.clone(),
            field: "purchasePrice",
        }
        .into());
    }
    if asset.quantity <= Decimal::ZERO {
        return Err(ValidationError::NotPositive {
            symbol: asset.symbol.clone(),
            field: "quantity",
        }
        .into());
    }
    Ok(())
}
