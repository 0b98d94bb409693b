use crate::upstream::UpstreamError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use core::fmt::{Display, Formatter, Result as FmtResult};

const LOG_TARGET: &str = "    server";

/// Message returned when a text exceeds the word ceiling.
pub const TEXT_TOO_BIG: &str = "Text is too big.";

/// Why a request could not be served.
#[derive(Debug)]
pub enum ServiceError {
    /// The API key in the path is wrong, or no key is configured.
    Forbidden,
    UnknownProfile(String),
    UnknownReturnType(String),
    InvalidSources(String),
    TextTooLarge,
    Upstream(UpstreamError),

    /// Rendering a response failed.
    Internal(ohno::AppError),
}

impl ServiceError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UnknownProfile(_) | Self::UnknownReturnType(_) | Self::InvalidSources(_) => StatusCode::BAD_REQUEST,
            Self::TextTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Forbidden => write!(f, "Forbidden"),
            Self::UnknownProfile(profile) => write!(f, "Unknown metric subset '{profile}'"),
            Self::UnknownReturnType(ret_type) => write!(f, "Unknown return type '{ret_type}'"),
            Self::InvalidSources(reason) => write!(f, "Invalid sources: {reason}"),
            Self::TextTooLarge => write!(f, "{TEXT_TOO_BIG}"),
            Self::Upstream(e) => write!(f, "Error {e}"),
            Self::Internal(e) => write!(f, "Error {e:#}"),
        }
    }
}

impl core::error::Error for ServiceError {}

impl From<UpstreamError> for ServiceError {
    fn from(e: UpstreamError) -> Self {
        Self::Upstream(e)
    }
}

impl From<ohno::AppError> for ServiceError {
    fn from(e: ohno::AppError) -> Self {
        Self::Internal(e)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::warn!(target: LOG_TARGET, "{self}");
        } else {
            log::debug!(target: LOG_TARGET, "Rejected request: {self}");
        }

        (status, self.to_string()).into_response()
    }
}
