use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use serde::Serialize;

use driver::error::DriverError;
use kernel::prelude::availability::InvalidRangeError;
use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl From<garde::Report> for ErrorStatus {
    fn from(report: garde::Report) -> Self {
        ErrorStatus(Report::new(KernelError::Invalid).attach_printable(report.to_string()))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl ErrorStatus {
    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::Unauthorized => StatusCode::UNAUTHORIZED,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Invalid => StatusCode::BAD_REQUEST,
            KernelError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Printable attachments are only exposed for caller mistakes.
    fn details(&self) -> Vec<String> {
        match self.0.current_context() {
            KernelError::Invalid | KernelError::NotFound => self
                .0
                .frames()
                .filter_map(|frame| {
                    if let Some(reason) = frame.downcast_ref::<String>() {
                        return Some(reason.clone());
                    }
                    if let Some(range) = frame.downcast_ref::<InvalidRangeError>() {
                        return Some(range.to_string());
                    }
                    match frame.downcast_ref::<DriverError>() {
                        Some(DriverError::Status { message, .. }) => Some(message.clone()),
                        _ => None,
                    }
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        let body = ErrorBody {
            message: self.0.current_context().to_string(),
            details: self.details(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;

    use kernel::prelude::availability::InvalidRangeError;
    use kernel::KernelError;

    use super::ErrorStatus;

    #[test]
    fn kernel_errors_map_to_statuses() {
        let status = |error| ErrorStatus::from(Report::new(error)).into_response().status();
        assert_eq!(status(KernelError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status(KernelError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status(KernelError::Invalid), StatusCode::BAD_REQUEST);
        assert_eq!(status(KernelError::Timeout), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(status(KernelError::Internal), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_input_keeps_its_reasons() {
        let error = ErrorStatus::from(
            Report::new(KernelError::Invalid).attach_printable("name is required".to_string()),
        );
        assert_eq!(error.details(), vec!["name is required".to_string()]);

        let hidden = ErrorStatus::from(
            Report::new(KernelError::Internal).attach_printable("db password wrong".to_string()),
        );
        assert!(hidden.details().is_empty());
    }

    #[test]
    fn malformed_ranges_explain_themselves() {
        let error = ErrorStatus::from(
            Report::new(InvalidRangeError::MissingEnd).change_context(KernelError::Invalid),
        );
        assert_eq!(error.details(), vec!["End date is required".to_string()]);
    }
}
