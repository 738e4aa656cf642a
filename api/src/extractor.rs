use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;

/// Header populated by the upstream session layer once it has verified the
/// member's credentials. The engine never checks passwords itself; it only
/// trusts this boundary.
const PRINCIPAL_HEADER: &str = "x-authenticated-email";

/// The authenticated principal on whose behalf a request runs.
pub struct AuthenticatedMember {
    email: String,
}

impl AuthenticatedMember {
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedMember
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(PRINCIPAL_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or(AppError::Unauthenticated)?;

        Ok(Self {
            email: email.to_string(),
        })
    }
}
