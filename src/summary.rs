use itertools::Itertools;
use serde::Serialize;

use crate::{
    alert,
    model::{AlertRule, PortfolioHolding, Price, PriceSnapshot, Stock, WatchlistEntry},
    valuation,
};

#[derive(Default, Debug, Copy, Clone, Serialize)]
pub struct DashboardStats {
    pub portfolio_value: Price,
    pub total_investment: Price,
    pub total_pl: Price,
    pub total_pl_percent: f64,
    pub watchlist_count: usize,
    pub active_alerts: usize,
}

pub fn dashboard_stats(
    portfolio: &[PortfolioHolding],
    watchlist: &[WatchlistEntry],
    alerts: &[AlertRule],
    prices: &PriceSnapshot,
) -> DashboardStats {
    let valuation = valuation::value_portfolio(portfolio, prices);

    DashboardStats {
        portfolio_value: valuation.current_value,
        total_investment: valuation.total_investment,
        total_pl: valuation.profit,
        total_pl_percent: valuation.profit_percent,
        watchlist_count: watchlist.len(),
        active_alerts: alert::active(alerts).len(),
    }
}

#[derive(Default, Debug, Copy, Clone, Serialize)]
pub struct MarketOverview {
    pub total_market_cap_billions: f64,
    pub gainers: usize,
    pub losers: usize,
}

/// Market caps come as scrape strings like "112.5B", "450M" or "N/A";
/// unparseable ones are skipped.
fn market_cap_billions(cap: &str) -> Option<f64> {
    let digits: String = cap.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    let value: f64 = digits.parse().ok()?;

    if cap.contains('B') {
        Some(value)
    } else if cap.contains('M') {
        Some(value / 1000.0)
    } else {
        None
    }
}

pub fn market_overview(stocks: &[Stock]) -> MarketOverview {
    let mut overview = MarketOverview::default();

    for stock in stocks {
        if let Some(billions) = stock.market_cap.as_deref().and_then(market_cap_billions) {
            overview.total_market_cap_billions += billions;
        }

        if stock.change > 0.0 {
            overview.gainers += 1;
        }
        if stock.change < 0.0 {
            overview.losers += 1;
        }
    }

    overview
}

pub fn top_gainers(stocks: &[Stock], n: usize) -> Vec<&Stock> {
    stocks
        .iter()
        .sorted_by(|a, b| b.change.total_cmp(&a.change))
        .take(n)
        .collect()
}

pub fn top_losers(stocks: &[Stock], n: usize) -> Vec<&Stock> {
    stocks
        .iter()
        .sorted_by(|a, b| a.change.total_cmp(&b.change))
        .take(n)
        .collect()
}
