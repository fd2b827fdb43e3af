use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

/// Number of copies in stock.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct StockAmount(i32);

impl StockAmount {
    pub fn new(amount: impl Into<i32>) -> error_stack::Result<Self, KernelError> {
        let amount = amount.into();
        if amount < 0 {
            return Err(Report::new(KernelError::out_of_range("amount", amount))
                .attach_printable("stock amount must not be negative"));
        }
        Ok(Self(amount))
    }
}
