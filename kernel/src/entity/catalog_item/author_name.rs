use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::entity::common::is_blank;
use crate::KernelError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(Report::new(KernelError::invalid_argument("author_name", name))
                .attach_printable("author name must not be blank"));
        }
        Ok(Self(name))
    }
}
