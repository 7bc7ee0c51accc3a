// src/application/ports/security.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};
use async_trait::async_trait;

/// Verifies bearer tokens minted by the external auth service.
#[async_trait]
pub trait AuthTokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
