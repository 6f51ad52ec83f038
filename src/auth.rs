use async_trait::async_trait;

use crate::error::Result;

/// Supplies the `Authorization` header value attached to user service
/// requests. Injected into the app and client explicitly so views can be
/// exercised without ambient session state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationHeaderProvider: Send + Sync {
    async fn authorization_header(&self) -> Result<String>;
}

/// Static bearer token, usually read from configuration or environment.
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AuthorizationHeaderProvider for BearerToken {
    async fn authorization_header(&self) -> Result<String> {
        Ok(format!("Bearer {}", self.token))
    }
}
