//! Bridge to the external identity provider that owns user accounts.

use async_trait::async_trait;
use thiserror::Error;

pub mod firebase;

pub use firebase::{FirebaseIdentity, ServiceAccount};

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider is not configured")]
    NotConfigured,

    #[error("failed to read service account: {0}")]
    Credentials(String),

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("identity provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("identity provider rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Deletes the provider-side account for `uid`.
    async fn delete_account(&self, uid: &str) -> Result<(), IdentityError>;
}

/// Stand-in used when no credentials are configured. Every deletion fails.
pub struct UnconfiguredIdentity;

#[async_trait]
impl IdentityProvider for UnconfiguredIdentity {
    async fn delete_account(&self, uid: &str) -> Result<(), IdentityError> {
        tracing::warn!(uid = %uid, "Identity: account deletion requested but no provider is configured");
        Err(IdentityError::NotConfigured)
    }
}
