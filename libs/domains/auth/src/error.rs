use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity provider rejected or failed a sign-in step
    #[error("Identity provider error: {0}")]
    Provider(String),

    /// Callback state did not match the pending sign-in (possible replay)
    #[error("Sign-in state mismatch")]
    InvalidState,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
