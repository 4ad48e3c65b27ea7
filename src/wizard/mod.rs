mod controller;
mod errors;
mod notifier;
mod review;

pub use controller::{Estimate, WizardController};
pub use errors::WizardError;
pub use notifier::{Notification, Notifier, TracingNotifier};
pub use review::{ReviewSummary, SubmittedTransfer};

/// The ordered steps of the transfer wizard.
///
/// The final step shows the review and, on confirm, sends the wizard back to the first step.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum WizardStep {
    DestinationAmount,
    DeliveryChannel,
    RecipientPayment,
    Review
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::DestinationAmount,
        WizardStep::DeliveryChannel,
        WizardStep::RecipientPayment,
        WizardStep::Review
    ];

    pub fn first() -> Self {
        WizardStep::DestinationAmount
    }

    /// 1-based position, as displayed to the sender.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::DestinationAmount => 1,
            WizardStep::DeliveryChannel => 2,
            WizardStep::RecipientPayment => 3,
            WizardStep::Review => 4
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::DestinationAmount => Some(WizardStep::DeliveryChannel),
            WizardStep::DeliveryChannel => Some(WizardStep::RecipientPayment),
            WizardStep::RecipientPayment => Some(WizardStep::Review),
            WizardStep::Review => None
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::DestinationAmount => None,
            WizardStep::DeliveryChannel => Some(WizardStep::DestinationAmount),
            WizardStep::RecipientPayment => Some(WizardStep::DeliveryChannel),
            WizardStep::Review => Some(WizardStep::RecipientPayment)
        }
    }

    pub fn is_final(&self) -> bool {
        self.next().is_none()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::DestinationAmount => "Where are you sending money?",
            WizardStep::DeliveryChannel => "How should they receive it?",
            WizardStep::RecipientPayment => "Recipient & Payment Details",
            WizardStep::Review => "Review Your Transfer"
        }
    }
}
