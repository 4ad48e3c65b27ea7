use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::WizardConfig;
use crate::fees::{FeeEngine, Quote};
use crate::models::{CountryCatalog, Field, PaymentMethod, RecipientRequirement, TransferRequest};
use crate::rates::RateLookup;
use crate::storage::Storage;
use crate::types::{parse_amount, CurrencyCode};
use crate::validators::{
    validate_bank_account, validate_card_number, validate_cvv, validate_expiry, validate_mobile_number, Clock,
    FieldError, INVALID_AMOUNT, INVALID_BANK_ACCOUNT, INVALID_CARD_NUMBER, INVALID_CVV,
    INVALID_EXPIRY, INVALID_MOBILE_NUMBER
};
use crate::wizard::{Notification, Notifier, ReviewSummary, SubmittedTransfer, WizardError, WizardStep};

/// The live fee figures shown while the sender is still choosing an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    pub target_currency: CurrencyCode,
    pub quote: Quote
}

/// Owns the in-progress transfer and decides which step the sender may move to.
///
/// Step validity is recomputed from the request on every call and never cached, so an
/// edit is reflected immediately in what `advance` allows.
pub struct WizardController<S: Storage> {
    request: TransferRequest,
    step: WizardStep,
    catalog: CountryCatalog,
    fee_engine: FeeEngine,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    storage: Arc<S>
}

impl<S: Storage> WizardController<S> {
    pub fn new(
        catalog: CountryCatalog,
        fee_engine: FeeEngine,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        storage: Arc<S>
    ) -> Self {
        Self {
            request: TransferRequest::default(),
            step: WizardStep::first(),
            catalog,
            fee_engine,
            clock,
            notifier,
            storage
        }
    }

    pub fn from_config(config: &WizardConfig, clock: Arc<dyn Clock>, notifier: Arc<dyn Notifier>, storage: Arc<S>) -> Self {
        Self::new(config.countries.clone(), config.fee_engine(), clock, notifier, storage)
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn request(&self) -> &TransferRequest {
        &self.request
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    pub fn fee_engine(&self) -> &FeeEngine {
        &self.fee_engine
    }

    /// Writes a field as-is; validation happens when a step is evaluated.
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.request.set(field, value);
    }

    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::DestinationAmount => self.is_destination_valid() && self.is_amount_valid(),
            WizardStep::DeliveryChannel => self.request.delivery_channel.is_some(),
            WizardStep::RecipientPayment => {
                !self.request.recipient_name.trim().is_empty() && self.is_payment_valid() && self.is_recipient_valid()
            },
            WizardStep::Review => WizardStep::ALL
                .iter()
                .take_while(|earlier| **earlier != WizardStep::Review)
                .all(|earlier| self.is_step_valid(*earlier))
        }
    }

    /// Moves forward when the current step is valid. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            debug!("Advance refused at final step [{:?}]", self.step);
            return false;
        };

        if !self.is_step_valid(self.step) {
            debug!("Advance refused, step [{:?}] is incomplete", self.step);
            return false;
        }

        debug!("Step [{:?}] -> [{:?}]", self.step, next);
        self.step = next;

        true
    }

    /// Moves back one step; stays put on the first step.
    pub fn retreat(&mut self) {
        if let Some(previous) = self.step.previous() {
            debug!("Step [{:?}] -> [{:?}]", self.step, previous);
            self.step = previous;
        }
    }

    /// Returns to the first step, keeping everything entered so far.
    pub fn edit(&mut self) {
        debug!("Editing transfer from step [{:?}]", self.step);
        self.step = WizardStep::first();
    }

    /// Inline messages for fields of the current step that hold an unacceptable value.
    ///
    /// Empty fields are not reported; they only keep the step from being valid.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let request = &self.request;
        let mut errors = Vec::new();

        match self.step {
            WizardStep::DestinationAmount => {
                if !request.amount_usd.trim().is_empty() {
                    match parse_amount(&request.amount_usd) {
                        Ok(amount) if !self.fee_engine.limits().contains(amount) => {
                            let limits = self.fee_engine.limits();
                            let message = format!("Amount must be between ${} and ${}", limits.min, limits.max);

                            errors.push(FieldError::new(Field::AmountUsd, message));
                        },
                        Ok(_) => {},
                        Err(_) => errors.push(FieldError::new(Field::AmountUsd, INVALID_AMOUNT))
                    }
                }
            },
            WizardStep::RecipientPayment => {
                match request.payment_method {
                    Some(PaymentMethod::CreditCard) => {
                        if !request.card_number.is_empty() && !validate_card_number(&request.card_number) {
                            errors.push(FieldError::new(Field::CardNumber, INVALID_CARD_NUMBER));
                        }

                        if !request.card_expiry.is_empty() && !validate_expiry(&request.card_expiry, self.clock.today()) {
                            errors.push(FieldError::new(Field::CardExpiry, INVALID_EXPIRY));
                        }

                        if !request.card_cvv.is_empty() && !validate_cvv(&request.card_cvv) {
                            errors.push(FieldError::new(Field::CardCvv, INVALID_CVV));
                        }
                    },
                    Some(PaymentMethod::MobileMoney) => {
                        if !request.sender_mobile.is_empty() && !validate_mobile_number(&request.sender_mobile) {
                            errors.push(FieldError::new(Field::SenderMobile, INVALID_MOBILE_NUMBER));
                        }
                    },
                    None => {}
                }

                if !request.recipient_details.is_empty() && !self.is_recipient_valid() {
                    let message = match request.delivery_channel.map(|channel| channel.recipient_requirement()) {
                        Some(RecipientRequirement::BankAccount) => INVALID_BANK_ACCOUNT,
                        _ => INVALID_MOBILE_NUMBER
                    };

                    errors.push(FieldError::new(Field::RecipientDetails, message));
                }
            },
            WizardStep::DeliveryChannel | WizardStep::Review => {}
        }

        errors
    }

    /// Fee and received figures for the current amount and destination.
    ///
    /// `None` until both an amount and a known destination have been entered.
    pub fn estimate<R: RateLookup + ?Sized>(&self, rates: &R) -> Option<Estimate> {
        if self.request.amount_usd.trim().is_empty() {
            return None;
        }

        let country = self.catalog.find(&self.request.destination_country)?;
        let quote = match self.request.amount() {
            Some(amount) => self.fee_engine.quote(amount, &country.currency, rates),
            None => Quote::InvalidAmount
        };

        Some(Estimate {
            target_currency: country.currency.clone(),
            quote
        })
    }

    pub fn review<R: RateLookup + ?Sized>(&self, rates: &R) -> Result<ReviewSummary, WizardError> {
        if !self.step.is_final() {
            return Err(WizardError::NotAtReview(self.step));
        }

        ReviewSummary::assemble(&self.request, &self.catalog, &self.fee_engine, rates)
    }

    /// Submits the transfer under review, notifies the sender and starts a fresh transfer.
    ///
    /// # Errors
    /// Returns `WizardError` and leaves the wizard untouched if:
    /// - The wizard is not at the final step.
    /// - Any step of the request is no longer valid.
    pub fn confirm<R: RateLookup + ?Sized>(&mut self, rates: &R) -> Result<SubmittedTransfer, WizardError> {
        if !self.step.is_final() {
            return Err(WizardError::NotAtReview(self.step));
        }

        if let Some(incomplete) = WizardStep::ALL.iter().find(|step| !step.is_final() && !self.is_step_valid(**step)) {
            return Err(WizardError::IncompleteStep(*incomplete));
        }

        let summary = self.review(rates)?;
        let transfer = SubmittedTransfer {
            transfer_id: self.storage.next_id(),
            request: self.request.snapshot(),
            summary,
            submitted_at: Utc::now()
        };

        self.storage.save(transfer.clone());

        self.notifier.notify(&Notification::transfer_initiated(
            transfer.summary.amount_usd,
            &transfer.summary.recipient_name
        ));

        info!(
            "Transfer [{}] of {} USD to [{}] submitted",
            transfer.transfer_id, transfer.summary.amount_usd, transfer.summary.destination.code
        );

        self.request = TransferRequest::default();
        self.step = WizardStep::first();

        Ok(transfer)
    }

    fn is_destination_valid(&self) -> bool {
        !self.request.destination_country.is_empty() && self.catalog.find(&self.request.destination_country).is_some()
    }

    fn is_amount_valid(&self) -> bool {
        self.request.amount().is_some_and(|amount| self.fee_engine.limits().contains(amount))
    }

    fn is_payment_valid(&self) -> bool {
        let request = &self.request;

        match request.payment_method {
            Some(PaymentMethod::CreditCard) => {
                validate_card_number(&request.card_number)
                    && validate_expiry(&request.card_expiry, self.clock.today())
                    && validate_cvv(&request.card_cvv)
            },
            Some(PaymentMethod::MobileMoney) => validate_mobile_number(&request.sender_mobile),
            None => false
        }
    }

    fn is_recipient_valid(&self) -> bool {
        let details = &self.request.recipient_details;

        match self.request.delivery_channel.map(|channel| channel.recipient_requirement()) {
            Some(RecipientRequirement::BankAccount) => validate_bank_account(details),
            Some(RecipientRequirement::PhoneNumber) => validate_mobile_number(details),
            None => false
        }
    }
}
