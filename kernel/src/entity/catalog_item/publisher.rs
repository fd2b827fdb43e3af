use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::entity::common::is_blank;
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct Publisher(String);

impl Publisher {
    pub fn new(publisher: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let publisher = publisher.into();
        if is_blank(&publisher) {
            return Err(Report::new(KernelError::invalid_argument("publisher", publisher))
                .attach_printable("publisher must not be blank"));
        }
        Ok(Self(publisher))
    }
}
