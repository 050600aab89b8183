use serde::{Deserialize, Serialize};

/// Opaque handle for the currently authenticated user
///
/// Callers only ever need "is a user signed in"; the fields are carried
/// through for display purposes and never interpreted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHandle {
    pub provider_user_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub token_type: String,
}

/// Parameters delivered by the provider redirect after the popup closes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackParams {
    pub code: String,
    pub state: String,
}
