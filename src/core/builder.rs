use crate::core::request::{BceRequest, Body, CONTENT_TYPE};
use crate::config::DEFAULT_CONTENT_TYPE;
use crate::domain::ports::Client;
use crate::utils::error::{BceError, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Fluent request builder shared by all service bindings.
///
/// ```no_run
/// # use bce_sdk::core::builder::RequestBuilder;
/// # use bce_sdk::domain::ports::Client;
/// # async fn demo(client: &impl Client) -> bce_sdk::Result<()> {
/// let nat: serde_json::Value = RequestBuilder::new(client)
///     .with_url("/v1/nat/nat-123")
///     .with_method(reqwest::Method::GET)
///     .fetch()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct RequestBuilder<'a, C: Client + ?Sized> {
    client: &'a C,
    url: Option<String>,
    method: Option<Method>,
    params: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
    body: Option<Result<Body>>,
}

impl<'a, C: Client + ?Sized> RequestBuilder<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            url: None,
            method: None,
            params: BTreeMap::new(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// 只有 value 非空時才加入查詢參數
    pub fn with_query_param_filter(self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if value.is_empty() {
            return self;
        }
        let value = value.to_string();
        self.with_query_param(key, value)
    }

    pub fn with_query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in params {
            self.params.insert(k.into(), v.into());
        }
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in headers {
            self.headers.insert(k.into(), v.into());
        }
        self
    }

    /// Serialized eagerly; a serialization failure surfaces from the terminal call.
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(Body::from_json(body));
        self
    }

    fn build(self) -> Result<(&'a C, BceRequest)> {
        let url = self
            .url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| BceError::invalid_argument("The url can't be empty"))?;
        let method = self
            .method
            .ok_or_else(|| BceError::invalid_argument("The method can't be empty"))?;

        let mut req = BceRequest::new(method, url);
        for (k, v) in self.params {
            req.set_param(k, v);
        }
        for (k, v) in self.headers {
            req.set_header(k, v);
        }
        if let Some(body) = self.body {
            req.set_body(body?);
            if req.header(CONTENT_TYPE).is_none() {
                req.set_header(CONTENT_TYPE, DEFAULT_CONTENT_TYPE);
            }
        }
        Ok((self.client, req))
    }

    async fn send(self) -> Result<crate::core::response::BceResponse> {
        let (client, req) = self.build()?;
        let response = client.send_request(req).await?;
        if response.is_fail() {
            return Err(BceError::ServiceError(response.service_error()));
        }
        Ok(response)
    }

    /// Sends the request and discards the response body.
    pub async fn execute(self) -> Result<()> {
        self.send().await.map(|_| ())
    }

    /// Sends the request and decodes the JSON response into `T`.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T> {
        self.send().await?.parse_json_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::response::BceResponse;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde::Deserialize;
    use std::sync::Mutex;
    use std::time::Duration;

    /// 記錄收到的請求並回傳預設回應
    struct RecordingClient {
        status: u16,
        body: String,
        captured: Mutex<Vec<BceRequest>>,
    }

    impl RecordingClient {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                captured: Mutex::new(Vec::new()),
            }
        }

        fn last(&self) -> BceRequest {
            self.captured.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Client for RecordingClient {
        async fn send_request(&self, req: BceRequest) -> Result<BceResponse> {
            self.captured.lock().unwrap().push(req);
            Ok(BceResponse::new(
                StatusCode::from_u16(self.status).unwrap(),
                BTreeMap::new(),
                self.body.clone().into_bytes(),
                Duration::from_millis(1),
            ))
        }
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct NatId {
        nat_id: String,
    }

    #[tokio::test]
    async fn test_fetch_builds_request() {
        let client = RecordingClient::new(200, r#"{"natId":"nat-1"}"#);
        let result: NatId = RequestBuilder::new(&client)
            .with_url("/v1/nat")
            .with_method(Method::POST)
            .with_body(&serde_json::json!({"name": "nat"}))
            .with_query_param_filter("clientToken", "token-1")
            .with_query_param_filter("marker", "")
            .with_header("x-bce-custom", "yes")
            .fetch()
            .await
            .unwrap();

        assert_eq!(result.nat_id, "nat-1");
        let req = client.last();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.uri(), "/v1/nat");
        assert_eq!(req.param("clientToken"), Some("token-1"));
        assert_eq!(req.param("marker"), None);
        assert_eq!(req.header("x-bce-custom"), Some("yes"));
        assert_eq!(req.header("content-type"), Some(DEFAULT_CONTENT_TYPE));
        assert_eq!(req.body().unwrap().as_bytes(), br#"{"name":"nat"}"#);
    }

    #[tokio::test]
    async fn test_execute_maps_service_error() {
        let client = RecordingClient::new(
            409,
            r#"{"code":"NatConflict","message":"busy","requestId":"r1"}"#,
        );
        let err = RequestBuilder::new(&client)
            .with_url("/v1/nat/nat-1")
            .with_method(Method::DELETE)
            .execute()
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(409));
        assert_eq!(err.service_code(), Some("NatConflict"));
    }

    #[tokio::test]
    async fn test_missing_url_or_method() {
        let client = RecordingClient::new(200, "");
        let err = RequestBuilder::new(&client)
            .with_method(Method::GET)
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(err, BceError::InvalidArgument { .. }));

        let err = RequestBuilder::new(&client)
            .with_url("/v1/user")
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(err, BceError::InvalidArgument { .. }));
        assert!(client.captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_with_query_params() {
        let client = RecordingClient::new(200, "{}");
        RequestBuilder::new(&client)
            .with_url("/v1/nat")
            .with_method(Method::PUT)
            .with_query_params([("bind", ""), ("clientToken", "abc")])
            .with_headers([("X-Bce-Extra", "1")])
            .execute()
            .await
            .unwrap();

        let req = client.last();
        assert_eq!(req.param("bind"), Some(""));
        assert_eq!(req.param("clientToken"), Some("abc"));
        assert_eq!(req.header("x-bce-extra"), Some("1"));
    }
}
