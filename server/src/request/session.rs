use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use error_stack::Report;

use kernel::prelude::entity::AccessToken;
use kernel::KernelError;

use crate::error::ErrorStatus;

/// Bearer token of the caller. Rejects with 401 when the header is missing.
#[derive(Debug, Clone)]
pub struct Session(AccessToken);

impl Session {
    pub fn token(self) -> AccessToken {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ErrorStatus;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    ErrorStatus::from(
                        Report::new(KernelError::Unauthorized)
                            .attach_printable(rejection.to_string()),
                    )
                })?;
        Ok(Session(AccessToken::new(bearer.token())))
    }
}
