use std::{fmt, sync::Arc};

use async_trait::async_trait;
use axum_login::{AuthnBackend, UserId as SessionUserId};
use serde::Deserialize;

use crate::domain::User;

use super::credentials::{CredentialChecker, CredentialError};

#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

/// Session backend that authenticates against the static user directory.
#[derive(Clone)]
pub struct AuthBackend {
    checker: Arc<CredentialChecker>,
}

impl AuthBackend {
    pub fn new(checker: CredentialChecker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

#[async_trait]
impl AuthnBackend for AuthBackend {
    type User = User;
    type Credentials = Credentials;
    type Error = BackendError;

    async fn authenticate(
        &self,
        creds: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        let (Some(email), Some(password)) = (creds.email, creds.password) else {
            return Ok(None);
        };

        Ok(self.checker.check(&email, &password)?)
    }

    async fn get_user(
        &self,
        user_id: &SessionUserId<Self>,
    ) -> Result<Option<Self::User>, Self::Error> {
        Ok(self.checker.user_by_id(user_id))
    }
}

pub type AuthSession = axum_login::AuthSession<AuthBackend>;
