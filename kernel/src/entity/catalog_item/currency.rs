use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

const CURRENCY_LENGTH: usize = 3;

pub const DEFAULT_CURRENCY: &str = "USD";

/// Three-letter currency code. Checked by shape only and kept in the case
/// it was given in.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct Currency(String);

impl Currency {
    pub fn new(currency: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let currency = currency.into();
        if !Self::is_well_formed(&currency) {
            return Err(Report::new(KernelError::invalid_argument("currency", currency))
                .attach_printable("currency must be exactly 3 letters"));
        }
        Ok(Self(currency))
    }

    pub fn is_well_formed(currency: &str) -> bool {
        currency.chars().count() == CURRENCY_LENGTH && currency.chars().all(char::is_alphabetic)
    }
}
