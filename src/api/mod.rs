//! REST API client.
//!
//! Thin wrapper over a `Transport`: builds URLs against the configured API
//! root, attaches `Authorization: Token {token}` when a session exists, and
//! turns responses into typed values or a `StoreError`.

pub mod transport;

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use eventticket_wire::{
    ApiErrorBody, AuthResponse, ConfirmPaymentRequest, CreateIntentRequest, DashboardStats, Event,
    Listing, LoginRequest, ManagedUser, PaymentConfirmation, PaymentIntent, PaymentMethods,
    RegisterRequest, Ticket, User,
};

use crate::error::{Result, StoreError};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

/// Filters for the event listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    /// Category id or slug
    pub category: Option<String>,
    /// Free-text search over title, description and location
    pub search: Option<String>,
}

impl EventQuery {
    pub fn search(term: &str) -> Self {
        Self {
            search: Some(term.to_string()),
            ..Default::default()
        }
    }

    pub fn category(category: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    /// Query string including the leading `?`, empty when there are no filters
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = [("category", &self.category), ("search", &self.search)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{}={}", key, urlencoding::encode(v)))
            })
            .collect();
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            transport,
        }
    }

    /// Client for the active configuration and the build's default transport
    pub fn from_config() -> Self {
        Self::new(
            &crate::config::active().api_base_url,
            transport::default_transport(),
        )
    }

    /// Attach a session token. Empty tokens are ignored.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> HttpRequest {
        let req = HttpRequest::new(method, self.url(path));
        match &self.token {
            Some(token) => req.header("Authorization", &format!("Token {}", token)),
            None => req,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!("{} {}", method.as_str(), url);

        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            let message = serde_json::from_str::<ApiErrorBody>(&resp.body)
                .ok()
                .and_then(|body| body.message().map(str::to_string));
            tracing::warn!("{} {} failed with {}", method.as_str(), url, resp.status);
            return Err(match message {
                Some(msg) => StoreError::Auth(msg),
                None => StoreError::Http {
                    status: resp.status,
                },
            });
        }

        serde_json::from_str(&resp.body).map_err(|e| {
            tracing::warn!("Unexpected body from {}: {}", url, e);
            StoreError::Decode(e.to_string())
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.request(Method::Get, path)).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_string(body)?;
        self.execute(self.request(Method::Post, path).json_body(body))
            .await
    }

    /// GET a list endpoint, accepting a bare array or a paginated page
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let listing: Listing<T> = self.get_json(path).await?;
        Ok(listing.into_items())
    }

    // ----- events -----

    pub async fn list_events(&self, query: &EventQuery) -> Result<Vec<Event>> {
        self.get_list(&query.to_query_string()).await
    }

    pub async fn get_event(&self, id: i64) -> Result<Event> {
        self.get_json(&format!("{}/", id)).await
    }

    // ----- accounts -----

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse> {
        self.post_json("auth/login/", req).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse> {
        self.post_json("auth/register/", req).await
    }

    pub async fn profile(&self) -> Result<User> {
        self.get_json("auth/profile/").await
    }

    pub async fn tickets(&self) -> Result<Vec<Ticket>> {
        self.get_list("tickets/").await
    }

    // ----- payments -----

    pub async fn payment_methods(&self) -> Result<PaymentMethods> {
        self.get_json("payment/methods/").await
    }

    pub async fn create_payment_intent(&self, req: &CreateIntentRequest) -> Result<PaymentIntent> {
        self.post_json("payment/create-intent/", req).await
    }

    pub async fn confirm_payment(&self, req: &ConfirmPaymentRequest) -> Result<PaymentConfirmation> {
        self.post_json("payment/confirm/", req).await
    }

    // ----- admin -----

    pub async fn admin_stats(&self) -> Result<DashboardStats> {
        self.get_json("admin/stats/").await
    }

    pub async fn admin_events(&self) -> Result<Vec<Event>> {
        self.get_list("admin/events_management/").await
    }

    pub async fn admin_users(&self) -> Result<Vec<ManagedUser>> {
        self.get_list("admin/users_management/").await
    }

    pub async fn admin_tickets(&self) -> Result<Vec<Ticket>> {
        self.get_list("admin/tickets_management/").await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted transport for exercising request flows without a network.

    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    pub struct MockTransport {
        responses: RefCell<VecDeque<Result<HttpResponse>>>,
        pub requests: RefCell<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn respond(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
        }

        pub fn fail(&self, err: StoreError) {
            self.responses.borrow_mut().push_back(Err(err));
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        pub fn last_request(&self) -> Option<HttpRequest> {
            self.requests.borrow().last().cloned()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(StoreError::Network("no scripted response".into())))
        }
    }

    pub fn client(transport: &Rc<MockTransport>) -> ApiClient {
        ApiClient::new("http://localhost:8000/api/", transport.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{client, MockTransport};
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_query_string() {
        assert_eq!(EventQuery::default().to_query_string(), "");
        assert_eq!(
            EventQuery::search("caz gecesi").to_query_string(),
            "?search=caz%20gecesi"
        );
        let both = EventQuery {
            category: Some("konser".into()),
            search: Some("  ".into()),
        };
        assert_eq!(both.to_query_string(), "?category=konser");
    }

    #[test]
    fn test_list_events_accepts_paginated_body() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"count":1,"results":[{"id":1,"title":"A","date":"2024-01-01","price":"10.00"}]}"#,
        );
        let events = block_on(client(&transport).list_events(&EventQuery::category("konser")))
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            transport.last_request().unwrap().url,
            "http://localhost:8000/api/?category=konser"
        );
    }

    #[test]
    fn test_token_header_attached() {
        let transport = MockTransport::new();
        transport.respond(200, "[]");
        let api = client(&transport).with_token(Some("abc".into()));
        let tickets = block_on(api.tickets()).unwrap();
        assert!(tickets.is_empty());

        let req = transport.last_request().unwrap();
        assert_eq!(req.url, "http://localhost:8000/api/tickets/");
        assert_eq!(req.header_value("Authorization"), Some("Token abc"));
    }

    #[test]
    fn test_tickets_accept_empty_paginated_page() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"count":0,"next":null,"previous":null,"results":[]}"#);
        let tickets = block_on(client(&transport).with_token(Some("abc".into())).tickets()).unwrap();
        assert!(tickets.is_empty());
    }

    #[test]
    fn test_management_lists_accept_both_shapes() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"count":1,"results":[{"id":2,"username":"elif","total_spent":"120.50"}]}"#,
        );
        transport.respond(200, r#"[{"id":1,"title":"A","date":"2024-01-01","price":"10.00"}]"#);
        let api = client(&transport);

        let users = block_on(api.admin_users()).unwrap();
        assert_eq!(users[0].username, "elif");
        assert_eq!(users[0].total_spent, 120.5);
        assert_eq!(
            transport.last_request().unwrap().url,
            "http://localhost:8000/api/admin/users_management/"
        );

        let events = block_on(api.admin_events()).unwrap();
        assert_eq!(events[0].title, "A");
    }

    #[test]
    fn test_guest_requests_have_no_auth_header() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id":3,"title":"B","date":"2024-01-01","price":5}"#);
        let event = block_on(client(&transport).with_token(Some(String::new())).get_event(3))
            .unwrap();
        assert_eq!(event.id, 3);
        let req = transport.last_request().unwrap();
        assert_eq!(req.url, "http://localhost:8000/api/3/");
        assert!(req.header_value("Authorization").is_none());
    }

    #[test]
    fn test_error_body_becomes_auth_error() {
        let transport = MockTransport::new();
        transport.respond(400, r#"{"error":"Geçersiz kullanıcı adı veya şifre"}"#);
        let req = LoginRequest {
            username: "a".into(),
            password: "b".into(),
        };
        let err = block_on(client(&transport).login(&req)).unwrap_err();
        assert_eq!(
            err,
            StoreError::Auth("Geçersiz kullanıcı adı veya şifre".into())
        );
    }

    #[test]
    fn test_bare_failure_becomes_http_error() {
        let transport = MockTransport::new();
        transport.respond(502, "<html>Bad gateway</html>");
        let err = block_on(client(&transport).admin_stats()).unwrap_err();
        assert_eq!(err, StoreError::Http { status: 502 });
    }

    #[test]
    fn test_schema_mismatch_becomes_decode_error() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"unexpected":true}"#);
        let err = block_on(client(&transport).profile()).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
