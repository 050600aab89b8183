//! Auth Domain
//!
//! Sign-in gate for the inventory UI: an identity-provider contract with a
//! Google implementation, the interactive sign-in flow (PKCE + consume-once
//! CSRF state), and [`AuthSession`] — the "is a user currently signed in"
//! state with an explicit subscription contract.
//!
//! The inventory engine never depends on this crate; the session only
//! gates whether the calling layer shows the inventory surface at all.
//! Authentication protocol internals are delegated to the provider (via
//! `oauth2`); nothing here inspects tokens beyond passing them along.

pub mod error;
pub mod google;
pub mod provider;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{AuthError, AuthResult};
pub use google::GoogleProvider;
pub use provider::IdentityProvider;
pub use session::{AuthChange, AuthSession, AuthSubscription, SignInFlow};
pub use types::{CallbackParams, TokenResponse, UserHandle};
