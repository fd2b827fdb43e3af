use error_stack::{Context, Report};
use std::fmt::Display;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub enum CliError {
    Config,
    Io,
    Parse,
    Catalog,
    Output,
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config => write!(f, "Invalid configuration"),
            CliError::Io => write!(f, "Failed to read input"),
            CliError::Parse => write!(f, "Malformed catalog item"),
            CliError::Catalog => write!(f, "Catalog item rejected"),
            CliError::Output => write!(f, "Failed to write output"),
        }
    }
}

impl Context for CliError {}

#[derive(Debug)]
pub struct StackTrace(Report<CliError>);

impl From<Report<CliError>> for StackTrace {
    fn from(e: Report<CliError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}
