use crate::utils::encoding::{encode_query, uri_encode};
use crate::utils::error::Result;
use reqwest::Method;
use serde::Serialize;
use std::collections::BTreeMap;

pub const HOST: &str = "host";
pub const AUTHORIZATION: &str = "authorization";
pub const CONTENT_TYPE: &str = "content-type";
pub const CONTENT_LENGTH: &str = "content-length";
pub const USER_AGENT: &str = "user-agent";
pub const BCE_PREFIX: &str = "x-bce-";
pub const BCE_DATE: &str = "x-bce-date";
pub const BCE_REQUEST_ID: &str = "x-bce-request-id";
pub const BCE_SECURITY_TOKEN: &str = "x-bce-security-token";

/// 請求內容 (已序列化的位元組)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    content: Vec<u8>,
}

impl Body {
    pub fn from_bytes(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn from_json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self {
            content: serde_json::to_vec(value)?,
        })
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }
}

/// A request before signing: path, query, lower-cased headers and body.
#[derive(Debug, Clone)]
pub struct BceRequest {
    method: Method,
    protocol: String,
    host: String,
    uri: String,
    headers: BTreeMap<String, String>,
    params: BTreeMap<String, String>,
    body: Option<Body>,
}

impl Default for BceRequest {
    fn default() -> Self {
        Self {
            method: Method::GET,
            protocol: "http".to_string(),
            host: String::new(),
            uri: "/".to_string(),
            headers: BTreeMap::new(),
            params: BTreeMap::new(),
            body: None,
        }
    }
}

impl BceRequest {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        let mut req = Self::default();
        req.set_method(method);
        req.set_uri(uri);
        req
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn set_uri(&mut self, uri: impl Into<String>) {
        let uri = uri.into();
        self.uri = if uri.starts_with('/') {
            uri
        } else {
            format!("/{}", uri)
        };
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// 設定目標端點，例如 `https://iam.bj.baidubce.com` 或 `127.0.0.1:8080`
    pub fn set_endpoint(&mut self, endpoint: &str) {
        let (protocol, rest) = match endpoint.split_once("://") {
            Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
            None => ("http".to_string(), endpoint),
        };
        self.protocol = protocol;
        self.host = rest.trim_end_matches('/').to_string();
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    pub fn set_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    pub fn remove_header(&mut self, name: &str) -> Option<String> {
        self.headers.remove(&name.to_ascii_lowercase())
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|v| v.as_str())
    }

    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// 設定請求內容，並同步更新 `content-length`
    pub fn set_body(&mut self, body: Body) {
        self.set_header(CONTENT_LENGTH, body.len().to_string());
        self.body = Some(body);
    }

    pub fn query_string(&self) -> String {
        encode_query(&self.params)
    }

    /// Full URL with the same path and query encoding the signer uses.
    pub fn url(&self) -> String {
        let mut url = format!(
            "{}://{}{}",
            self.protocol,
            self.host,
            uri_encode(&self.uri, false)
        );
        if !self.params.is_empty() {
            url.push('?');
            url.push_str(&self.query_string());
        }
        url
    }
}
