use crate::model::{AlertCondition, AlertRule, Price, PriceSnapshot};

/// Boundary is inclusive in both directions: landing exactly on the
/// target fires.
pub fn satisfied_by(alert: &AlertRule, price: Price) -> bool {
    match alert.condition {
        AlertCondition::Above => price >= alert.target_price,
        AlertCondition::Below => price <= alert.target_price,
    }
}

/// Reports the alerts that should transition to triggered for this
/// snapshot. Mutating the `triggered` flag and delivering notifications
/// are the caller's job, so repeated calls over unchanged input return
/// the same set.
///
/// Alerts without a usable price in the snapshot are skipped; a price of
/// 0 means the scrape had no quote for the symbol.
pub fn evaluate<'a>(alerts: &'a [AlertRule], prices: &PriceSnapshot) -> Vec<&'a AlertRule> {
    alerts
        .iter()
        .filter(|alert| !alert.triggered)
        .filter_map(|alert| prices.get(&alert.symbol).map(|price| (alert, *price)))
        .filter(|(_, price)| price.is_finite() && *price != 0.0)
        .filter(|(alert, price)| satisfied_by(alert, *price))
        .map(|(alert, _)| alert)
        .collect()
}

/// The non-triggered subset, as every page lists it.
pub fn active(alerts: &[AlertRule]) -> Vec<&AlertRule> {
    alerts.iter().filter(|alert| !alert.triggered).collect()
}

/// Signed distance of the current price from the target, in percent.
pub fn target_progress(alert: &AlertRule, current_price: Price) -> f64 {
    let target = alert.target_price;
    if !target.is_finite() || target == 0.0 || !current_price.is_finite() {
        return 0.0;
    }

    (current_price - target) / target * 100.0
}
