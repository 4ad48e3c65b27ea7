//! A step-gated wizard for configuring an international money transfer: field validation,
//! fee and currency conversion, and a reviewable summary before a simulated submission.

pub mod config;
pub mod fees;
pub mod models;
pub mod rates;
pub mod session;
pub mod storage;
pub mod types;
pub mod validators;
pub mod wizard;
