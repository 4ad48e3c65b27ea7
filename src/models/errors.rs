use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unknown field [{0}]")]
    UnknownField(String),
    #[error("Unknown delivery channel [{0}]")]
    UnknownDeliveryChannel(String),
    #[error("Unknown payment method [{0}]")]
    UnknownPaymentMethod(String)
}
