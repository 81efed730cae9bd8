use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub type Price = f64;

/// Symbol to current price, rebuilt each polling cycle.
pub type PriceSnapshot = BTreeMap<String, Price>;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub sector: String,
    #[serde(rename = "marketCap", default)]
    pub market_cap: Option<String>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub added_price: Price,
    #[serde(default)]
    pub added_date: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioHolding {
    pub id: u64,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub shares: f64,
    #[serde(default)]
    pub buy_price: Price,
    #[serde(default)]
    pub buy_date: DateTime<Utc>,
    /// shares * buy_price, fixed at creation.
    #[serde(default)]
    pub total_investment: Price,
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum AlertCondition {
    #[default]
    #[display(fmt = "above")]
    Above,
    #[display(fmt = "below")]
    Below,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct AlertRule {
    pub id: u64,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub target_price: Price,
    pub condition: AlertCondition,
    /// Set by the caller once the alert fires; never cleared.
    #[serde(default)]
    pub triggered: bool,
    #[serde(default)]
    pub created_date: DateTime<Utc>,
}
