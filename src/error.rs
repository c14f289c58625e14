//! Error taxonomy for storefront operations.
//!
//! Every failure is caught by the component that started the operation and
//! rendered inline; `user_message` decides what the visitor actually sees.

use thiserror::Error;

/// Default Turkish messages shown when the server gives no usable text.
pub mod messages {
    pub const LOGIN_FAILED: &str = "Giriş yapılırken bir hata oluştu.";
    pub const REGISTER_FAILED: &str = "Kayıt olurken bir hata oluştu.";
    pub const GENERIC: &str = "Bir hata oluştu.";
    pub const PASSWORD_MISMATCH: &str = "Şifreler eşleşmiyor.";
    pub const REQUIRED_FIELDS: &str = "Lütfen tüm gerekli alanları doldurun.";
    pub const PAYMENT_FAILED: &str = "Ödeme sırasında bir hata oluştu";
    pub const PROFILE_FAILED: &str = "Profil bilgileri yüklenirken bir hata oluştu.";
    pub const RECOMMENDATIONS_FAILED: &str = "Öneriler yüklenirken bir hata oluştu.";
    pub const STATS_FAILED: &str = "İstatistikler yüklenirken bir hata oluştu.";
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),

    /// Client-side form validation failed; no request was sent
    #[error("{0}")]
    Validation(String),

    /// Server rejected the request with a message of its own
    #[error("rejected by server: {0}")]
    Auth(String),

    /// Non-2xx response without a usable message
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// Response body did not match the expected schema
    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("socket error: {0}")]
    Socket(String),

    /// Payment gateway refused or failed to confirm the payment
    #[error("payment gateway: {0}")]
    Gateway(String),
}

impl StoreError {
    /// Text to show the visitor.
    ///
    /// Server, gateway and validation messages are shown verbatim; everything
    /// else falls back to the caller's default.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            Self::Validation(msg) | Self::Auth(msg) | Self::Gateway(msg) if !msg.is_empty() => {
                msg.clone()
            }
            _ => default.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
