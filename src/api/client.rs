use std::time::Duration;

use serde::Deserialize;

use crate::auth::AuthorizationHeaderProvider;
use crate::error::{ProfileError, Result};
use crate::profile::model::{Achievement, DisplayedProfile, Subscription};

/// Error code returned by the sync operation when the Discord username
/// does not match any member of the community server.
pub const DISCORD_USER_NOT_FOUND_CODE: &str = "discord-role-update/discord-user-not-found";

/// HTTP client for the user service.
#[derive(Clone)]
pub struct UserServiceClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body shape the user service responds with on non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
}

impl UserServiceClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn fetch_profile(
        &self,
        auth: &dyn AuthorizationHeaderProvider,
        user_id: &str,
    ) -> Result<DisplayedProfile> {
        let authorization = auth.authorization_header().await?;
        let response = self
            .http
            .get(self.url(&format!("user/{user_id}")))
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// Current subscription of a user; `None` when the user has none.
    pub async fn fetch_subscription(
        &self,
        auth: &dyn AuthorizationHeaderProvider,
        user_id: &str,
    ) -> Result<Option<Subscription>> {
        let authorization = auth.authorization_header().await?;
        let response = self
            .http
            .get(self.url(&format!("user/{user_id}/subscription")))
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(Self::parse_json(response).await?))
    }

    /// The public achievement table (reward values for unlockables).
    pub async fn fetch_achievements(&self) -> Result<Vec<Achievement>> {
        let response = self.http.get(self.url("achievement")).send().await?;
        Self::parse_json(response).await
    }

    /// Ask the service to verify the profile's Discord username and grant
    /// the subscription role on the community server.
    pub async fn sync_discord_username(
        &self,
        auth: &dyn AuthorizationHeaderProvider,
        user_id: &str,
    ) -> Result<()> {
        let authorization = auth.authorization_header().await?;
        let response = self
            .http
            .post(self.url(&format!("user/{user_id}/action/update-discord-role")))
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(response).await)
        }
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Fold a non-2xx response into `ProfileError::Api`, keeping the
    /// service's error code when the body carries one.
    async fn api_error(response: reqwest::Response) -> ProfileError {
        let status = response.status().as_u16();
        let code = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.code);

        ProfileError::Api { status, code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = UserServiceClient::new("https://api.example.test/", 30).unwrap();
        assert_eq!(
            client.url("user/user-1"),
            "https://api.example.test/user/user-1"
        );
        assert_eq!(
            client.url("/achievement"),
            "https://api.example.test/achievement"
        );
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"code":"discord-role-update/discord-user-not-found"}"#)
                .unwrap();
        assert_eq!(body.code.as_deref(), Some(DISCORD_USER_NOT_FOUND_CODE));

        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert!(body.code.is_none());
    }
}
