use serde::Deserialize;

use crate::model::{AlertRule, PortfolioHolding, PriceSnapshot, Stock, WatchlistEntry};

// The backend wraps every list in a single-key envelope, e.g.
// {"stocks": [...]}; an absent key means an empty list.

#[derive(Deserialize)]
struct StocksEnvelope {
    #[serde(default)]
    stocks: Vec<Stock>,
}

#[derive(Deserialize)]
struct PortfolioEnvelope {
    #[serde(default)]
    portfolio: Vec<PortfolioHolding>,
}

#[derive(Deserialize)]
struct WatchlistEnvelope {
    #[serde(default)]
    watchlist: Vec<WatchlistEntry>,
}

#[derive(Deserialize)]
struct AlertsEnvelope {
    #[serde(default)]
    alerts: Vec<AlertRule>,
}

pub fn parse_stocks(body: &str) -> eyre::Result<Vec<Stock>> {
    let envelope: StocksEnvelope = serde_json::from_str(body)?;
    Ok(envelope.stocks)
}

pub fn parse_portfolio(body: &str) -> eyre::Result<Vec<PortfolioHolding>> {
    let envelope: PortfolioEnvelope = serde_json::from_str(body)?;
    Ok(envelope.portfolio)
}

pub fn parse_watchlist(body: &str) -> eyre::Result<Vec<WatchlistEntry>> {
    let envelope: WatchlistEnvelope = serde_json::from_str(body)?;
    Ok(envelope.watchlist)
}

pub fn parse_alerts(body: &str) -> eyre::Result<Vec<AlertRule>> {
    let envelope: AlertsEnvelope = serde_json::from_str(body)?;
    Ok(envelope.alerts)
}

/// Builds the per-cycle symbol-to-price map for one evaluation pass.
pub fn snapshot_from_stocks(stocks: &[Stock]) -> PriceSnapshot {
    stocks
        .iter()
        .map(|stock| (stock.symbol.clone(), stock.price))
        .collect()
}
