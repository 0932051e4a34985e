//! Accounts and JWT authentication payloads.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Minimum password length accepted by the account endpoint.
pub const MIN_PASSWORD_LEN: usize = 8;

/// The signed-in account, as returned by `GET /auth/users/me/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Backend identifier.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Given name, possibly empty.
    #[serde(default)]
    pub first_name: String,
    /// Family name, possibly empty.
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Full name when known, otherwise the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// Body of `POST /auth/jwt/create/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

/// Access and refresh tokens issued on login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived token sent with every authenticated request.
    pub access: String,
    /// Long-lived token exchanged for new access tokens.
    pub refresh: String,
}

/// Body of `POST /auth/jwt/verify/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyRequest {
    /// Access token to check.
    pub token: String,
}

/// Body of `POST /auth/jwt/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    /// Current refresh token.
    pub refresh: String,
}

/// Refresh tokens rotate, so the response may carry a new one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    /// New access token.
    pub access: String,
    /// Replacement refresh token, when rotation is enabled.
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Reasons a sign-up form is rejected before it is sent.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SignupError {
    /// The email does not look like an address.
    #[error("enter a valid email address")]
    InvalidEmail,
    /// First or last name is blank.
    #[error("first and last name are required")]
    MissingName,
    /// Shorter than [`MIN_PASSWORD_LEN`].
    #[error("password must be at least 8 characters")]
    PasswordTooShort,
    /// The confirmation differs from the password.
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Body of `POST /auth/users/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// Login email for the new account.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation.
    pub re_password: String,
}

impl SignupRequest {
    /// Checks the form locally; the backend still runs its own validators.
    ///
    /// # Errors
    ///
    /// Returns the first [`SignupError`] the request violates.
    pub fn validate(&self) -> Result<(), SignupError> {
        if !EMAIL.is_match(self.email.trim()) {
            return Err(SignupError::InvalidEmail);
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(SignupError::MissingName);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort);
        }
        if self.password != self.re_password {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupRequest {
        SignupRequest {
            email: "nuevo@example.com".to_string(),
            first_name: "nuevo".to_string(),
            last_name: "usuario".to_string(),
            password: "ClaveSegura123!".to_string(),
            re_password: "ClaveSegura123!".to_string(),
        }
    }

    #[test]
    fn display_name_prefers_full_name() {
        let mut user = User {
            id: 1,
            email: "ana@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Torres".to_string(),
        };
        assert_eq!(user.display_name(), "Ana Torres");
        user.first_name.clear();
        user.last_name.clear();
        assert_eq!(user.display_name(), "ana@example.com");
    }

    #[test]
    fn valid_signup_passes() {
        assert_eq!(signup().validate(), Ok(()));
    }

    #[test]
    fn signup_rejections() {
        let mut request = signup();
        request.email = "not-an-email".to_string();
        assert_eq!(request.validate(), Err(SignupError::InvalidEmail));

        let mut request = signup();
        request.last_name = "  ".to_string();
        assert_eq!(request.validate(), Err(SignupError::MissingName));

        let mut request = signup();
        request.password = "short".to_string();
        request.re_password = "short".to_string();
        assert_eq!(request.validate(), Err(SignupError::PasswordTooShort));

        let mut request = signup();
        request.re_password = "ClaveSegura124!".to_string();
        assert_eq!(request.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn refresh_response_without_rotation() {
        let response: RefreshResponse = serde_json::from_str(r#"{"access": "abc"}"#).unwrap();
        assert_eq!(response.access, "abc");
        assert!(response.refresh.is_none());
    }
}
