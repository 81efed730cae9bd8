use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{model::Stock, utils::finite_or_zero};

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    #[default]
    Change,
    Name,
    /// Biggest movers by |change|, truncated to 10 when no filter is
    /// active.
    Top10,
}

#[derive(Default, Debug, Clone)]
pub struct StockQuery {
    pub search_term: String,
    pub sector: String,
    pub sort_by: SortKey,
}

fn matches_search(stock: &Stock, term: &str) -> bool {
    stock.name.to_lowercase().contains(term)
        || stock.symbol.to_lowercase().contains(term)
        || stock.sector.to_lowercase().contains(term)
}

pub fn filter_and_sort(stocks: &[Stock], query: &StockQuery) -> Vec<Stock> {
    let search_term = query.search_term.trim().to_lowercase();
    let sector = query.sector.trim().to_lowercase();

    let mut filtered = stocks
        .iter()
        .filter(|stock| search_term.is_empty() || matches_search(stock, &search_term))
        .filter(|stock| sector.is_empty() || stock.sector.to_lowercase() == sector)
        .cloned()
        .collect_vec();

    // Vec::sort_by is stable, so equal keys keep their snapshot order.
    match query.sort_by {
        SortKey::Price => filtered.sort_by(|a, b| {
            finite_or_zero(b.price).total_cmp(&finite_or_zero(a.price))
        }),
        SortKey::Change => filtered.sort_by(|a, b| {
            finite_or_zero(b.change).total_cmp(&finite_or_zero(a.change))
        }),
        SortKey::Name => {
            filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortKey::Top10 => {
            filtered.sort_by(|a, b| {
                finite_or_zero(b.change)
                    .abs()
                    .total_cmp(&finite_or_zero(a.change).abs())
            });

            if search_term.is_empty() && sector.is_empty() {
                filtered.truncate(10);
            }
        }
    }

    filtered
}

/// The search dropdown: same match rule as the grid filter, capped at
/// six entries.
pub fn search_suggestions<'a>(stocks: &'a [Stock], term: &str) -> Vec<&'a Stock> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    stocks
        .iter()
        .filter(|stock| matches_search(stock, &term))
        .take(6)
        .collect()
}

/// Distinct non-empty sectors, sorted, for the sector filter dropdown.
pub fn available_sectors(stocks: &[Stock]) -> Vec<String> {
    stocks
        .iter()
        .map(|stock| stock.sector.clone())
        .filter(|sector| !sector.is_empty())
        .unique()
        .sorted()
        .collect_vec()
}
