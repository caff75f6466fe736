use std::ops::Deref;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{domain::User, routes::ApiError};

use super::AuthSession;

/// Extracts the logged-in [`User`] from the request session.
/// Rejects with 401 Unauthorized if nobody is logged in.
#[derive(Debug, Clone)]
pub struct AuthUser(User);

impl Deref for AuthUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthSession: FromRequestParts<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_session = AuthSession::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::unauthorized("Not authenticated"))?;

        auth_session
            .user
            .map(AuthUser)
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
    }
}
