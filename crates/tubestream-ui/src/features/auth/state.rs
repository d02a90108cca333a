//! Login and registration form state.

use thiserror::Error;
use tubestream_api_models::{LoginRequest, RegisterRequest};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Notice shown on the login page after registering.
pub const REGISTERED_NOTICE: &str = "Account created. Please sign in.";

/// Login form validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Email or password is empty.
    #[error("Please enter your email and password")]
    MissingFields,
}

/// Registration form validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// A field is empty.
    #[error("Please fill all the required fields")]
    MissingFields,
    /// Password shorter than [`MIN_PASSWORD_LEN`].
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Login inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
}

impl LoginForm {
    /// Request body once both fields are filled.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::MissingFields`] when either input is blank.
    pub fn request(&self) -> Result<LoginRequest, LoginError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Registration inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Username input.
    pub username: String,
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
    /// Confirmation input.
    pub confirm: String,
}

impl RegisterForm {
    /// Validate locally and build the request; nothing is sent on failure.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: required fields, length, then match.
    pub fn request(&self) -> Result<RegisterRequest, RegisterError> {
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty()
            || email.is_empty()
            || self.password.is_empty()
            || self.confirm.is_empty()
        {
            return Err(RegisterError::MissingFields);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterError::PasswordTooShort);
        }
        if self.password != self.confirm {
            return Err(RegisterError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            username: " neo ".into(),
            email: "neo@example.test".into(),
            password: "matrix".into(),
            confirm: "matrix".into(),
        }
    }

    #[test]
    fn register_rules_apply_in_order() {
        let mut form = filled();
        form.email.clear();
        assert_eq!(form.request(), Err(RegisterError::MissingFields));

        let mut form = filled();
        form.password = "abc".into();
        form.confirm = "abd".into();
        assert_eq!(form.request(), Err(RegisterError::PasswordTooShort));

        let mut form = filled();
        form.confirm = "matrix2".into();
        assert_eq!(form.request(), Err(RegisterError::PasswordMismatch));
        assert_eq!(
            RegisterError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }

    #[test]
    fn valid_registration_trims_identity_fields() {
        let request = filled().request().expect("valid form");
        assert_eq!(request.username, "neo");
        assert_eq!(request.password, "matrix");
    }

    #[test]
    fn login_requires_both_fields() {
        let mut form = LoginForm {
            email: " a@b.c ".into(),
            password: String::new(),
        };
        assert_eq!(form.request(), Err(LoginError::MissingFields));
        form.password = "pw".into();
        assert_eq!(form.request().map(|r| r.email), Ok("a@b.c".to_string()));
    }
}
