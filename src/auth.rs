//! Sign-in and sign-up flows.
//!
//! Both post to the API and, when the response carries a user, persist the
//! session. The caller decides what to do next (navigate or close a modal).

use eventticket_wire::AuthResponse;

use crate::api::ApiClient;
use crate::error::{messages, Result, StoreError};
use crate::forms::{LoginForm, RegisterForm};
use crate::session::{Session, SessionStorage, SessionStore};

pub async fn login<S: SessionStorage>(
    api: &ApiClient,
    store: &SessionStore<S>,
    form: &LoginForm,
) -> Result<Session> {
    let resp = api.login(&form.to_request()).await?;
    persist(store, resp, messages::LOGIN_FAILED)
}

/// Validates locally first; a mismatched password never reaches the server.
pub async fn register<S: SessionStorage>(
    api: &ApiClient,
    store: &SessionStore<S>,
    form: &RegisterForm,
) -> Result<Session> {
    let req = form.validate()?;
    let resp = api.register(&req).await?;
    persist(store, resp, messages::REGISTER_FAILED)
}

fn persist<S: SessionStorage>(
    store: &SessionStore<S>,
    resp: AuthResponse,
    default: &str,
) -> Result<Session> {
    match resp.user {
        Some(user) => {
            tracing::info!("Signed in as {}", user.username);
            Ok(store.save(resp.token.as_deref(), &user))
        }
        None => {
            tracing::warn!("Auth response without a user record");
            Err(StoreError::Auth(default.to_string()))
        }
    }
}

/// Clear the persisted session
pub fn logout<S: SessionStorage>(store: &SessionStore<S>) {
    store.clear();
    tracing::info!("Signed out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{client, MockTransport};
    use crate::session::MemoryStorage;
    use tokio_test::block_on;

    #[test]
    fn test_login_persists_session() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"token":"tok-1","user":{"id":1,"username":"kerem","is_staff":true}}"#,
        );
        let store = SessionStore::new(MemoryStorage::default());
        let form = LoginForm {
            username: "kerem".into(),
            password: "pw".into(),
        };

        let session = block_on(login(&client(&transport), &store, &form)).unwrap();
        assert!(session.is_authenticated());
        assert!(session.is_staff());
        assert_eq!(store.load(), session);

        let req = transport.last_request().unwrap();
        assert!(req.url.ends_with("/auth/login/"));
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"username":"kerem","password":"pw"}"#)
        );
    }

    #[test]
    fn test_login_error_message_from_server() {
        let transport = MockTransport::new();
        transport.respond(400, r#"{"error":"Geçersiz bilgiler"}"#);
        let store = SessionStore::new(MemoryStorage::default());
        let err = block_on(login(&client(&transport), &store, &LoginForm::default())).unwrap_err();
        assert_eq!(err.user_message(messages::LOGIN_FAILED), "Geçersiz bilgiler");
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn test_login_network_failure_uses_default_message() {
        let transport = MockTransport::new();
        transport.fail(StoreError::Network("offline".into()));
        let store = SessionStore::new(MemoryStorage::default());
        let err = block_on(login(&client(&transport), &store, &LoginForm::default())).unwrap_err();
        assert_eq!(
            err.user_message(messages::LOGIN_FAILED),
            "Giriş yapılırken bir hata oluştu."
        );
    }

    #[test]
    fn test_register_mismatch_sends_nothing() {
        let transport = MockTransport::new();
        let store = SessionStore::new(MemoryStorage::default());
        let form = RegisterForm {
            password: "a".into(),
            password_confirm: "b".into(),
            ..Default::default()
        };
        let err = block_on(register(&client(&transport), &store, &form)).unwrap_err();
        assert_eq!(
            err.user_message(messages::REGISTER_FAILED),
            "Şifreler eşleşmiyor."
        );
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_response_without_user_is_an_error() {
        let transport = MockTransport::new();
        transport.respond(201, r#"{"message":"ok"}"#);
        let store = SessionStore::new(MemoryStorage::default());
        let form = RegisterForm {
            username: "n".into(),
            password: "x".into(),
            password_confirm: "x".into(),
            ..Default::default()
        };
        let err = block_on(register(&client(&transport), &store, &form)).unwrap_err();
        assert_eq!(
            err.user_message(messages::GENERIC),
            "Kayıt olurken bir hata oluştu."
        );
    }

    #[test]
    fn test_logout_clears() {
        let store = SessionStore::new(MemoryStorage::default());
        store.save(Some("t"), &Default::default());
        logout(&store);
        assert!(!store.load().is_authenticated());
    }
}
