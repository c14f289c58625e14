//! Form state and client-side validation.

use eventticket_wire::{LoginRequest, RegisterRequest};

use crate::error::{messages, Result, StoreError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegisterForm {
    /// Build the request body, refusing mismatched passwords
    pub fn validate(&self) -> Result<RegisterRequest> {
        if self.password != self.password_confirm {
            return Err(StoreError::Validation(
                messages::PASSWORD_MISMATCH.to_string(),
            ));
        }
        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
        })
    }
}

/// Contact details a guest fills in before being asked to sign in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional
    pub phone: String,
}

impl GuestForm {
    pub fn validate(&self) -> Result<()> {
        let required = [&self.first_name, &self.last_name, &self.email];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(StoreError::Validation(messages::REQUIRED_FIELDS.to_string()));
        }
        Ok(())
    }
}

/// Where a social-login button was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIntent {
    SignIn,
    SignUp,
}

/// Placeholder notice for social providers that are not wired up yet
pub fn social_login_notice(provider: &str, intent: SocialIntent) -> String {
    match intent {
        SocialIntent::SignIn => format!("{} ile giriş özelliği yakında eklenecek!", provider),
        SocialIntent::SignUp => format!("{} ile kayıt özelliği yakında eklenecek!", provider),
    }
}
