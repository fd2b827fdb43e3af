use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::entity::common::is_blank;
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let title = title.into();
        if is_blank(&title) {
            return Err(Report::new(KernelError::invalid_argument("title", title))
                .attach_printable("title must not be blank"));
        }
        Ok(Self(title))
    }
}
