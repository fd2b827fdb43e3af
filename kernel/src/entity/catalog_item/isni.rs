use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::entity::common::is_digits_or_all_x;
use crate::KernelError;

const ISNI_LENGTH: usize = 16;

/// International Standard Name Identifier of the author.
///
/// Only the shape is checked: sixteen ASCII digits, or sixteen `X`.
/// The ISNI check character is not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct Isni(String);

impl Isni {
    pub fn new(isni: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let isni = isni.into();
        if !Self::is_well_formed(&isni) {
            return Err(Report::new(KernelError::invalid_argument("isni", isni))
                .attach_printable("ISNI must be 16 digits or 16 `X` characters"));
        }
        Ok(Self(isni))
    }

    pub fn is_well_formed(isni: &str) -> bool {
        isni.len() == ISNI_LENGTH && is_digits_or_all_x(isni)
    }

    pub fn uri(&self) -> String {
        format!("https://isni.org/isni/{}", self.0)
    }
}
