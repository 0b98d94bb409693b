//! Failures of the external collaborators the service depends on.

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::time::Duration;

/// An external call (analyzer process, ranking model, parsing service) did not produce a usable answer.
#[derive(Debug)]
pub enum UpstreamError {
    /// The call did not complete within its deadline.
    Timeout { service: &'static str, after: Duration },

    /// The call completed but failed, or its answer could not be used.
    Failed(ohno::AppError),
}

impl UpstreamError {
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

impl Display for UpstreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Timeout { service, after } => write!(f, "{service} timed out after {after:?}"),
            Self::Failed(e) => write!(f, "{e:#}"),
        }
    }
}

impl core::error::Error for UpstreamError {}

impl From<ohno::AppError> for UpstreamError {
    fn from(e: ohno::AppError) -> Self {
        Self::Failed(e)
    }
}
