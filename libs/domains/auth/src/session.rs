//! Sign-in session state and its subscription contract

use oauth2::{CsrfToken, PkceCodeChallenge};
use tokio::sync::watch;

use crate::error::{AuthError, AuthResult};
use crate::provider::IdentityProvider;
use crate::types::{CallbackParams, UserHandle};

/// A pending interactive sign-in
///
/// Holds the CSRF state and PKCE verifier between opening the popup and
/// receiving the redirect callback. Consumed by value on completion, so a
/// flow can be used exactly once; a replayed callback has nothing left to
/// match against.
#[derive(Debug)]
pub struct SignInFlow {
    /// URL the interactive popup must open
    pub authorize_url: String,
    state: String,
    pkce_verifier: String,
    redirect_uri: String,
}

/// A signed-in / signed-out transition, as seen by subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthChange {
    SignedIn(UserHandle),
    SignedOut,
}

/// Tracks whether a user is currently signed in
///
/// This is the boolean gate controlling whether the inventory surface is
/// shown at all; the inventory engine itself never consults it. Observers
/// register through [`subscribe`](AuthSession::subscribe) and are
/// unregistered deterministically when the returned subscription is
/// dropped.
pub struct AuthSession {
    current: watch::Sender<Option<UserHandle>>,
}

impl AuthSession {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    /// Start an interactive sign-in against a provider
    ///
    /// Generates the CSRF state and PKCE verifier and returns the flow the
    /// caller drives: open [`SignInFlow::authorize_url`] in the popup, then
    /// pass the redirect callback to [`complete_sign_in`](Self::complete_sign_in).
    pub fn begin_sign_in<P: IdentityProvider>(
        &self,
        provider: &P,
        redirect_uri: &str,
    ) -> AuthResult<SignInFlow> {
        let state = CsrfToken::new_random().secret().clone();
        let (_pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();
        let pkce_verifier = pkce_verifier.secret().clone();

        let authorize_url = provider.authorize_url(&state, &pkce_verifier, redirect_uri)?;

        Ok(SignInFlow {
            authorize_url,
            state,
            pkce_verifier,
            redirect_uri: redirect_uri.to_string(),
        })
    }

    /// Complete a pending sign-in from the redirect callback
    ///
    /// Verifies the state parameter, exchanges the code, fetches the user
    /// handle, and flips the session to signed-in.
    pub async fn complete_sign_in<P: IdentityProvider>(
        &self,
        provider: &P,
        flow: SignInFlow,
        params: &CallbackParams,
    ) -> AuthResult<UserHandle> {
        if params.state != flow.state {
            return Err(AuthError::InvalidState);
        }

        let token = provider
            .exchange_code(&params.code, &flow.pkce_verifier, &flow.redirect_uri)
            .await?;
        let user = provider.get_user_info(&token.access_token).await?;

        tracing::info!(provider = provider.name(), user = %user.provider_user_id, "User signed in");
        self.current.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Clear the signed-in user and notify subscribers
    pub fn sign_out(&self) {
        if self.current.send_replace(None).is_some() {
            tracing::info!("User signed out");
        }
    }

    pub fn current_user(&self) -> Option<UserHandle> {
        self.current.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Register an observer for present/absent transitions
    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            receiver: self.current.subscribe(),
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.current.receiver_count()
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer registration on an [`AuthSession`]
///
/// Dropping the subscription unregisters it; there is no explicit
/// teardown call to forget.
pub struct AuthSubscription {
    receiver: watch::Receiver<Option<UserHandle>>,
}

impl AuthSubscription {
    /// Wait for the next transition
    ///
    /// Returns `None` once the session itself has been dropped.
    /// Transitions are coalesced: only the latest state is observed, not
    /// every intermediate one.
    pub async fn changed(&mut self) -> Option<AuthChange> {
        self.receiver.changed().await.ok()?;
        let change = match self.receiver.borrow_and_update().clone() {
            Some(user) => AuthChange::SignedIn(user),
            None => AuthChange::SignedOut,
        };
        Some(change)
    }

    /// The state as of the last observed transition
    pub fn current(&self) -> Option<UserHandle> {
        self.receiver.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeProvider {
        http_client: reqwest::Client,
    }

    impl FakeProvider {
        fn new() -> Self {
            Self {
                http_client: reqwest::Client::new(),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }
        fn required_scopes(&self) -> &'static [&'static str] {
            &["openid"]
        }
        fn auth_url(&self) -> &str {
            "https://auth.example.com/authorize"
        }
        fn token_url(&self) -> &str {
            "https://auth.example.com/token"
        }
        fn client_id(&self) -> &str {
            "client-id"
        }
        fn client_secret(&self) -> &str {
            "client-secret"
        }
        fn http_client(&self) -> &reqwest::Client {
            &self.http_client
        }
        async fn get_user_info(&self, _access_token: &str) -> AuthResult<UserHandle> {
            Ok(UserHandle {
                provider_user_id: "user-1".to_string(),
                email: Some("user@example.com".to_string()),
                name: None,
                avatar_url: None,
            })
        }
    }

    #[test]
    fn test_session_starts_signed_out() {
        let session = AuthSession::new();
        assert!(!session.is_signed_in());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_begin_sign_in_builds_authorize_url() {
        let session = AuthSession::new();
        let provider = FakeProvider::new();

        let flow = session
            .begin_sign_in(&provider, "http://localhost:3000/callback")
            .unwrap();

        assert!(flow.authorize_url.starts_with("https://auth.example.com/authorize"));
        assert!(flow.authorize_url.contains("code_challenge"));
        assert!(flow.authorize_url.contains(&format!("state={}", flow.state)));
    }

    #[tokio::test]
    async fn test_complete_sign_in_rejects_state_mismatch() {
        let session = AuthSession::new();
        let provider = FakeProvider::new();
        let flow = session
            .begin_sign_in(&provider, "http://localhost:3000/callback")
            .unwrap();

        let params = CallbackParams {
            code: "auth-code".to_string(),
            state: "tampered".to_string(),
        };

        let err = session
            .complete_sign_in(&provider, flow, &params)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidState));
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_out_notifies_subscribers() {
        let session = AuthSession::new();
        let mut subscription = session.subscribe();

        // Simulate a completed sign-in without the network leg
        session.current.send_replace(Some(UserHandle {
            provider_user_id: "user-1".to_string(),
            email: None,
            name: None,
            avatar_url: None,
        }));

        let change = subscription.changed().await.unwrap();
        assert!(matches!(change, AuthChange::SignedIn(_)));
        assert!(session.is_signed_in());

        session.sign_out();
        let change = subscription.changed().await.unwrap();
        assert_eq!(change, AuthChange::SignedOut);
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_dropping_subscription_unregisters_it() {
        let session = AuthSession::new();
        let subscription = session.subscribe();
        assert_eq!(session.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(session.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_subscription_outlived_by_nothing_ends_cleanly() {
        let session = AuthSession::new();
        let mut subscription = session.subscribe();

        drop(session);
        assert!(subscription.changed().await.is_none());
    }
}
