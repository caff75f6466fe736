mod backend;
mod credentials;
mod extractor;
mod router;

pub use backend::{AuthBackend, AuthSession, Credentials};
pub use credentials::{Argon2Verifier, CredentialChecker, PlaintextVerifier, UserAccount};
pub use extractor::AuthUser;
pub use router::router;
