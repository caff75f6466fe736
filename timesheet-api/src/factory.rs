//! Composition root: builds the concrete store, service and credential
//! checker from configuration.
//!
//! This is the ONLY place that imports concrete outbound adapters.

use std::sync::Arc;

use crate::{
    adapters::outbound::memory::{demo_tasks, demo_weeks, InMemoryTaskStore},
    auth::{Argon2Verifier, CredentialChecker, PlaintextVerifier, UserAccount},
    config::{AuthSettings, TimesheetSettings},
    domain::{models::UserId, ports::inbound::TimesheetService, services::TimesheetServiceImpl},
};

pub fn timesheet_service(settings: &TimesheetSettings) -> Arc<dyn TimesheetService> {
    let store = if settings.seed_demo_entries {
        tracing::debug!("seeding task store with demo entries");
        InMemoryTaskStore::new().with_tasks(demo_tasks())
    } else {
        InMemoryTaskStore::new()
    };

    Arc::new(TimesheetServiceImpl::new(
        Arc::new(store),
        demo_weeks(),
        settings.weekly_target_hours,
    ))
}

pub fn credential_checker(settings: &AuthSettings) -> CredentialChecker {
    let accounts = settings
        .users
        .iter()
        .map(|user| UserAccount {
            id: UserId::new(user.id.clone()),
            name: user.name.clone(),
            email: user.email.clone(),
            stored_password: user.password.clone(),
        })
        .collect();

    if settings.insecure_plaintext_passwords {
        tracing::warn!("plaintext password comparison is enabled; use for local demos only");
        CredentialChecker::new(accounts, PlaintextVerifier)
    } else {
        CredentialChecker::new(accounts, Argon2Verifier)
    }
}
