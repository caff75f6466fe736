use argon2::{
    password_hash::{self, PasswordHash},
    Argon2, PasswordVerifier as _,
};
use sha2::{Digest, Sha256};

use crate::domain::{models::UserId, User};

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("stored password hash for user {0} is malformed: {1}")]
    MalformedHash(UserId, password_hash::Error),
}

/// Strategy for comparing a submitted password with the stored credential.
pub trait PasswordVerifier: Send + Sync + 'static {
    fn verify(&self, user_id: &UserId, candidate: &str, stored: &str)
        -> Result<bool, CredentialError>;
}

/// Stored credentials are argon2 PHC strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Verifier;

impl PasswordVerifier for Argon2Verifier {
    fn verify(
        &self,
        user_id: &UserId,
        candidate: &str,
        stored: &str,
    ) -> Result<bool, CredentialError> {
        let hash = PasswordHash::new(stored)
            .map_err(|e| CredentialError::MalformedHash(user_id.clone(), e))?;

        Ok(Argon2::default()
            .verify_password(candidate.as_bytes(), &hash)
            .is_ok())
    }
}

/// Stored credentials are the passwords themselves.
///
/// Insecure. Only meant for local demo setups.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl PasswordVerifier for PlaintextVerifier {
    fn verify(
        &self,
        _user_id: &UserId,
        candidate: &str,
        stored: &str,
    ) -> Result<bool, CredentialError> {
        Ok(candidate == stored)
    }
}

/// A user of the static directory together with its stored credential.
#[derive(Clone)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub stored_password: String,
}

impl UserAccount {
    fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            session_auth_hash: Sha256::digest(self.stored_password.as_bytes()).to_vec(),
        }
    }
}

/// Checks email/password pairs against a fixed list of accounts.
pub struct CredentialChecker {
    accounts: Vec<UserAccount>,
    verifier: Box<dyn PasswordVerifier>,
}

impl CredentialChecker {
    pub fn new(accounts: Vec<UserAccount>, verifier: impl PasswordVerifier) -> Self {
        Self {
            accounts,
            verifier: Box::new(verifier),
        }
    }

    /// Returns the matching user without its password, or `None`.
    ///
    /// Email comparison is exact and case-sensitive. Empty input never matches.
    pub fn check(&self, email: &str, password: &str) -> Result<Option<User>, CredentialError> {
        if email.is_empty() || password.is_empty() {
            return Ok(None);
        }

        for account in self.accounts.iter().filter(|a| a.email == email) {
            if self
                .verifier
                .verify(&account.id, password, &account.stored_password)?
            {
                return Ok(Some(account.to_user()));
            }
        }

        Ok(None)
    }

    pub fn user_by_id(&self, id: &UserId) -> Option<User> {
        self.accounts
            .iter()
            .find(|account| &account.id == id)
            .map(UserAccount::to_user)
    }
}
