use crate::model::Price;

pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Stock-card price formatting: zero and non-numeric values render as "N/A".
pub fn format_currency(value: Price) -> String {
    if !value.is_finite() || value == 0.0 {
        return "N/A".to_owned();
    }

    format!("{value:.2} MAD")
}

pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0.00%".to_owned();
    }

    if value > 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}
