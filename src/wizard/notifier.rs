use rust_decimal::Decimal;
use tracing::info;

use crate::types::SOURCE_CURRENCY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String
}

impl Notification {
    pub fn transfer_initiated(amount_usd: Decimal, recipient_name: &str) -> Self {
        Self {
            title: "Transfer Initiated!".to_string(),
            description: format!(
                "Your transfer of ${:.2} {} to {} has been initiated.",
                amount_usd, SOURCE_CURRENCY, recipient_name
            )
        }
    }
}

/// Receives user-facing notifications raised by the wizard.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        info!(title = %notification.title, "{}", notification.description);
    }
}
