use async_trait::async_trait;
use switchboard_core::{Credential, CredentialRequest};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to sign credential: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("credential issuer unavailable: {0}")]
    Unavailable(String),
}

/// Mints short-lived join tokens for the external media service.
///
/// Called once per token request. The relay never inspects what it returns.
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    async fn issue(&self, request: &CredentialRequest) -> Result<Credential, CredentialError>;
}
