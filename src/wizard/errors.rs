use thiserror::Error;

use crate::wizard::WizardStep;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Review is only available at the final step, current step is [{0:?}]")]
    NotAtReview(WizardStep),
    #[error("Step [{0:?}] is incomplete")]
    IncompleteStep(WizardStep),
    #[error("Unknown destination country [{0}]")]
    UnknownCountry(String)
}
