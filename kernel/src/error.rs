use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A supplied value failed a shape or content rule.
    InvalidArgument {
        parameter: &'static str,
        value: String,
    },
    /// A numeric value fell below its lower bound.
    OutOfRange {
        parameter: &'static str,
        value: String,
    },
    /// The operation needs data the item does not carry.
    InvalidState { reason: &'static str },
}

impl KernelError {
    pub fn invalid_argument(parameter: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            value: value.into(),
        }
    }

    pub fn out_of_range(parameter: &'static str, value: impl ToString) -> Self {
        Self::OutOfRange {
            parameter,
            value: value.to_string(),
        }
    }

    /// Name of the rejected parameter, if the error concerns one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            KernelError::InvalidArgument { parameter, .. }
            | KernelError::OutOfRange { parameter, .. } => Some(parameter),
            KernelError::InvalidState { .. } => None,
        }
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidArgument { parameter, value } => {
                write!(f, "Invalid argument `{parameter}`: {value:?}")
            }
            KernelError::OutOfRange { parameter, value } => {
                write!(f, "Argument `{parameter}` out of range: {value}")
            }
            KernelError::InvalidState { reason } => write!(f, "Invalid state: {reason}"),
        }
    }
}

impl Context for KernelError {}
