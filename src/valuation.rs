use serde::Serialize;

use crate::{
    model::{PortfolioHolding, Price, PriceSnapshot, WatchlistEntry},
    utils::finite_or_zero,
};

#[derive(Default, Debug, Copy, Clone, Serialize)]
pub struct HoldingValuation {
    pub current_value: Price,
    pub profit: Price,
    pub profit_percent: f64,
}

#[derive(Default, Debug, Copy, Clone, Serialize)]
pub struct PortfolioValuation {
    pub total_investment: Price,
    pub current_value: Price,
    pub profit: Price,
    pub profit_percent: f64,
}

pub fn value_holding(holding: &PortfolioHolding, current_price: Price) -> HoldingValuation {
    let investment = finite_or_zero(holding.total_investment);
    let current_value = finite_or_zero(holding.shares) * finite_or_zero(current_price);
    let profit = current_value - investment;
    let profit_percent = if investment > 0.0 {
        profit / investment * 100.0
    } else {
        0.0
    };

    HoldingValuation {
        current_value,
        profit,
        profit_percent,
    }
}

/// Holdings whose symbol is missing from the snapshot count as worth 0,
/// the same as the dashboard treats an absent current price.
pub fn value_portfolio(holdings: &[PortfolioHolding], prices: &PriceSnapshot) -> PortfolioValuation {
    let mut total_investment = 0.0;
    let mut current_value = 0.0;

    for holding in holdings {
        let price = prices.get(&holding.symbol).copied().unwrap_or_default();
        total_investment += finite_or_zero(holding.total_investment);
        current_value += value_holding(holding, price).current_value;
    }

    let profit = current_value - total_investment;
    let profit_percent = if total_investment > 0.0 {
        profit / total_investment * 100.0
    } else {
        0.0
    };

    PortfolioValuation {
        total_investment,
        current_value,
        profit,
        profit_percent,
    }
}

/// Percent change since the entry was added to the watchlist.
pub fn value_watchlist_entry(entry: &WatchlistEntry, current_price: Price) -> f64 {
    let added = finite_or_zero(entry.added_price);
    if added == 0.0 {
        return 0.0;
    }

    (finite_or_zero(current_price) - added) / added * 100.0
}
