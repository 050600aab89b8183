use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};
use crate::provider::IdentityProvider;
use crate::types::UserHandle;

/// Google identity provider (the sign-in popup of the original app)
#[derive(Clone)]
pub struct GoogleProvider {
    client_id: String,
    client_secret: String,
    http_client: reqwest::Client,
}

#[derive(Debug, Serialize, Deserialize)]
struct GoogleUserInfo {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

impl GoogleProvider {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IdentityProvider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    fn required_scopes(&self) -> &'static [&'static str] {
        &["openid", "email", "profile"]
    }

    fn auth_url(&self) -> &str {
        "https://accounts.google.com/o/oauth2/v2/auth"
    }

    fn token_url(&self) -> &str {
        "https://oauth2.googleapis.com/token"
    }

    fn client_id(&self) -> &str {
        &self.client_id
    }

    fn client_secret(&self) -> &str {
        &self.client_secret
    }

    fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    async fn get_user_info(&self, access_token: &str) -> AuthResult<UserHandle> {
        let response = self
            .http_client
            .get("https://openidconnect.googleapis.com/v1/userinfo")
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(format!("Failed to get user info: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthError::Provider(format!(
                "Google API returned error: {}",
                response.status()
            )));
        }

        let user_info: GoogleUserInfo = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(format!("Failed to parse user info: {}", e)))?;

        Ok(UserHandle {
            provider_user_id: user_info.sub,
            email: user_info.email,
            name: user_info.name,
            avatar_url: user_info.picture,
        })
    }
}
