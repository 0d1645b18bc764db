use error_stack::Report;
use reqwest::StatusCode;

use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Http(reqwest::Error),
    #[error("backend answered {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    Serde(serde_json::Error),
    #[error("`{key}` has an unusable value `{value}`")]
    Config { key: &'static str, value: String },
}

impl From<reqwest::Error> for DriverError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl DriverError {
    fn kind(&self) -> KernelError {
        match self {
            DriverError::Http(error) if error.is_timeout() => KernelError::Timeout,
            DriverError::Http(error) => error
                .status()
                .map_or(KernelError::Internal, status_kind),
            DriverError::Status { status, .. } => status_kind(*status),
            DriverError::Env(_) | DriverError::Serde(_) | DriverError::Config { .. } => {
                KernelError::Internal
            }
        }
    }
}

fn status_kind(status: StatusCode) -> KernelError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => KernelError::Unauthorized,
        StatusCode::NOT_FOUND => KernelError::NotFound,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            KernelError::Invalid
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => KernelError::Timeout,
        _ => KernelError::Internal,
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let kind = error.kind();
            Report::from(error).change_context(kind)
        })
    }
}
