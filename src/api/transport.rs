//! HTTP transports.
//!
//! `FetchTransport` drives `window.fetch` in the browser, `ReqwestTransport`
//! is used by the native host. Both return the raw status and body; status
//! interpretation lives in `ApiClient`.

use async_trait::async_trait;

use crate::error::{Result, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self.header("Content-Type", "application/json")
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Futures are not `Send`: the browser transport holds JS values across awaits.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;

#[cfg(target_arch = "wasm32")]
mod fetch {
    use super::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    #[derive(Debug, Clone, Copy, Default)]
    pub struct FetchTransport;

    #[async_trait(?Send)]
    impl Transport for FetchTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            let headers = Headers::new()
                .map_err(|e| StoreError::Network(format!("headers: {:?}", e)))?;
            for (key, value) in &request.headers {
                headers
                    .set(key, value)
                    .map_err(|e| StoreError::Network(format!("header {}: {:?}", key, e)))?;
            }

            let opts = RequestInit::new();
            opts.set_method(request.method.as_str());
            opts.set_headers(&headers.into());
            if let Some(body) = &request.body {
                opts.set_body(&JsValue::from_str(body));
            }

            let req = Request::new_with_str_and_init(&request.url, &opts)
                .map_err(|e| StoreError::Network(format!("{:?}", e)))?;
            let window =
                web_sys::window().ok_or_else(|| StoreError::Network("no window".to_string()))?;

            let resp_value = JsFuture::from(window.fetch_with_request(&req))
                .await
                .map_err(|e| StoreError::Network(format!("{:?}", e)))?;
            let resp: Response = resp_value
                .dyn_into()
                .map_err(|e| StoreError::Network(format!("not a Response: {:?}", e)))?;

            let status = resp.status();
            let text_promise = resp
                .text()
                .map_err(|e| StoreError::Decode(format!("{:?}", e)))?;
            let body = JsFuture::from(text_promise)
                .await
                .map_err(|e| StoreError::Decode(format!("{:?}", e)))?
                .as_string()
                .unwrap_or_default();

            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub use native::ReqwestTransport;

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
mod native {
    use super::*;

    use std::sync::OnceLock;

    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    /// Process-wide client so every `ApiClient` reuses one connection pool
    pub(super) fn shared_client() -> &'static reqwest::Client {
        CLIENT.get_or_init(reqwest::Client::new)
    }

    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl Default for ReqwestTransport {
        fn default() -> Self {
            Self {
                client: shared_client().clone(),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            let mut builder = match request.method {
                Method::Get => self.client.get(&request.url),
                Method::Post => self.client.post(&request.url),
            };
            for (key, value) in &request.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let resp = builder
                .send()
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
    }
}

/// Transport for builds with neither a browser nor the native HTTP client
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

#[async_trait(?Send)]
impl Transport for OfflineTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        Err(StoreError::Network(format!(
            "no HTTP transport available for {}",
            request.url
        )))
    }
}

/// The transport for the current build target
pub fn default_transport() -> std::rc::Rc<dyn Transport> {
    #[cfg(target_arch = "wasm32")]
    {
        std::rc::Rc::new(FetchTransport)
    }
    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    {
        std::rc::Rc::new(ReqwestTransport::default())
    }
    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    {
        std::rc::Rc::new(OfflineTransport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_sets_content_type() {
        let req = HttpRequest::new(Method::Post, "http://x/api/auth/login/")
            .json_body("{}".to_string());
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    #[test]
    fn test_native_transports_share_one_client() {
        assert!(std::ptr::eq(native::shared_client(), native::shared_client()));
        let _ = default_transport();
        let _ = default_transport();
        assert!(std::ptr::eq(native::shared_client(), native::shared_client()));
    }

    #[test]
    fn test_offline_transport_reports_network_error() {
        let res = tokio_test::block_on(
            OfflineTransport.send(HttpRequest::new(Method::Get, "http://x/api/")),
        );
        assert!(matches!(res, Err(StoreError::Network(_))));
    }
}
