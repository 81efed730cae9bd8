use serde::Serialize;

use crate::{
    alert,
    model::{AlertRule, Price, PriceSnapshot},
};

/// Deterministic notification text; delivery belongs to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertNotification {
    pub title: String,
    pub body: String,
    /// Deduplication tag for platform notification APIs.
    pub tag: String,
}

pub fn build_alert_notification(alert: &AlertRule, current_price: Price) -> AlertNotification {
    AlertNotification {
        title: "MaFinance Pro - Price Alert!".to_owned(),
        body: format!(
            "{} ({}) is {} {:.2} MAD. Current: {:.2} MAD",
            alert.name, alert.symbol, alert.condition, alert.target_price, current_price
        ),
        tag: format!("price-alert-{}", alert.id),
    }
}

/// The on-screen toast variant of the same alert.
pub fn toast_message(alert: &AlertRule, current_price: Price) -> String {
    format!(
        "ALERT: {} reached {:.2} MAD (target: {:.2})",
        alert.name, current_price, alert.target_price
    )
}

/// Delivery capability the view layer implements (platform notification,
/// DOM toast, test recorder).
pub trait NotificationSink {
    fn deliver(&mut self, notification: AlertNotification);
}

/// Evaluates the alerts against the snapshot and hands one payload per
/// triggerable alert to the sink.
pub fn dispatch(alerts: &[AlertRule], prices: &PriceSnapshot, sink: &mut impl NotificationSink) {
    for alert in alert::evaluate(alerts, prices) {
        let price = prices[&alert.symbol];
        sink.deliver(build_alert_notification(alert, price));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::model::{AlertCondition, AlertRule};

    use super::{build_alert_notification, dispatch, toast_message, AlertNotification, NotificationSink};

    fn alert() -> AlertRule {
        AlertRule {
            id: 42,
            symbol: "ATW".to_owned(),
            name: "Attijariwafa Bank".to_owned(),
            target_price: 500.0,
            condition: AlertCondition::Above,
            ..Default::default()
        }
    }

    #[test]
    fn unittest_build_alert_notification() {
        let n = build_alert_notification(&alert(), 512.5);

        assert_eq!(n.title, "MaFinance Pro - Price Alert!");
        assert_eq!(
            n.body,
            "Attijariwafa Bank (ATW) is above 500.00 MAD. Current: 512.50 MAD"
        );
        assert_eq!(n.tag, "price-alert-42");
    }

    #[test]
    fn unittest_toast_message() {
        assert_eq!(
            toast_message(&alert(), 512.5),
            "ALERT: Attijariwafa Bank reached 512.50 MAD (target: 500.00)"
        );
    }

    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<AlertNotification>,
    }

    impl NotificationSink for RecordingSink {
        fn deliver(&mut self, notification: AlertNotification) {
            self.delivered.push(notification);
        }
    }

    #[test]
    fn unittest_dispatch_delivers_only_triggerable_alerts() {
        let alerts = vec![
            alert(),
            AlertRule {
                id: 43,
                symbol: "IAM".to_owned(),
                name: "Maroc Telecom".to_owned(),
                target_price: 50.0,
                condition: AlertCondition::Below,
                ..Default::default()
            },
        ];
        let prices = BTreeMap::from([("ATW".to_owned(), 512.5), ("IAM".to_owned(), 60.0)]);

        let mut sink = RecordingSink::default();
        dispatch(&alerts, &prices, &mut sink);

        assert_eq!(sink.delivered.len(), 1);
        assert_eq!(sink.delivered[0].tag, "price-alert-42");
    }
}
