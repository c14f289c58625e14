//! Account and authentication payloads.

use serde::{Deserialize, Serialize};

/// User record as returned by the auth endpoints.
///
/// Cached verbatim in browser storage under the `user` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_staff: bool,
}

impl User {
    /// "First Last", falling back to the username
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Single uppercase letter for the profile avatar
    pub fn initial(&self) -> String {
        self.first_name
            .chars()
            .next()
            .or_else(|| self.username.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Body of `POST auth/login/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST auth/register/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
}

/// Response of the login and register endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Error envelope used by the API (`{"error": "..."}` or DRF's `{"detail": "..."}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// The server-provided message, if any
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.detail.as_deref())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_without_token() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"user":{"id":3,"username":"ayse"}}"#).unwrap();
        assert!(resp.token.is_none());
        assert_eq!(resp.user.unwrap().username, "ayse");
    }

    #[test]
    fn test_display_name_and_initial() {
        let user = User {
            id: 1,
            username: "mehmet".to_string(),
            first_name: "ömer".to_string(),
            last_name: "Kaya".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "ömer Kaya");
        assert_eq!(user.initial(), "Ö");

        let bare = User {
            id: 2,
            username: "zeynep".to_string(),
            ..Default::default()
        };
        assert_eq!(bare.display_name(), "zeynep");
        assert_eq!(bare.initial(), "Z");
    }

    #[test]
    fn test_error_body_prefers_error_field() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Geçersiz bilgiler","detail":"x"}"#).unwrap();
        assert_eq!(body.message(), Some("Geçersiz bilgiler"));

        let drf: ApiErrorBody = serde_json::from_str(r#"{"detail":"Yetkisiz"}"#).unwrap();
        assert_eq!(drf.message(), Some("Yetkisiz"));

        let empty: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message(), None);
    }
}
