use crate::{ConfigError, FromEnv, env_or_default, env_required};

/// Google sign-in configuration
#[derive(Clone, Debug)]
pub struct GoogleAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Redirect URI the interactive popup returns to
    pub redirect_uri: String,
}

impl GoogleAuthConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }
}

impl FromEnv for GoogleAuthConfig {
    /// Requires GOOGLE_CLIENT_ID and GOOGLE_CLIENT_SECRET;
    /// GOOGLE_REDIRECT_URI defaults to the local dev callback
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: env_required("GOOGLE_CLIENT_ID")?,
            client_secret: env_required("GOOGLE_CLIENT_SECRET")?,
            redirect_uri: env_or_default(
                "GOOGLE_REDIRECT_URI",
                "http://localhost:3000/auth/callback",
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_config_from_env_success() {
        temp_env::with_vars(
            [
                ("GOOGLE_CLIENT_ID", Some("client-id")),
                ("GOOGLE_CLIENT_SECRET", Some("client-secret")),
                ("GOOGLE_REDIRECT_URI", Some("https://example.com/cb")),
            ],
            || {
                let config = GoogleAuthConfig::from_env().unwrap();
                assert_eq!(config.client_id, "client-id");
                assert_eq!(config.client_secret, "client-secret");
                assert_eq!(config.redirect_uri, "https://example.com/cb");
            },
        );
    }

    #[test]
    fn test_google_config_redirect_uri_defaults() {
        temp_env::with_vars(
            [
                ("GOOGLE_CLIENT_ID", Some("client-id")),
                ("GOOGLE_CLIENT_SECRET", Some("client-secret")),
                ("GOOGLE_REDIRECT_URI", None),
            ],
            || {
                let config = GoogleAuthConfig::from_env().unwrap();
                assert_eq!(
                    config.redirect_uri,
                    "http://localhost:3000/auth/callback"
                );
            },
        );
    }

    #[test]
    fn test_google_config_missing_client_id() {
        temp_env::with_vars_unset(["GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"], || {
            let result = GoogleAuthConfig::from_env();
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("GOOGLE_CLIENT_ID"));
        });
    }
}
