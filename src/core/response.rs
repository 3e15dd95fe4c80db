use crate::core::request::BCE_REQUEST_ID;
use crate::utils::error::{BceServiceError, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;

/// 已完整讀取的 HTTP 回應
#[derive(Debug, Clone)]
pub struct BceResponse {
    status: StatusCode,
    headers: BTreeMap<String, String>,
    body: Vec<u8>,
    elapsed: Duration,
}

impl BceResponse {
    pub fn new(
        status: StatusCode,
        headers: BTreeMap<String, String>,
        body: Vec<u8>,
        elapsed: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            elapsed,
        }
    }

    /// Drains a `reqwest` response into memory.
    pub async fn from_http(response: reqwest::Response, elapsed: Duration) -> Result<Self> {
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, headers, body, elapsed))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn is_fail(&self) -> bool {
        self.status.as_u16() >= 400
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn request_id(&self) -> Option<&str> {
        self.header(BCE_REQUEST_ID)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// 解析服務端錯誤文件；無法解析時以 HTTP 狀態補齊
    pub fn service_error(&self) -> BceServiceError {
        let header_request_id = self.request_id().unwrap_or_default().to_string();

        if let Ok(mut err) = serde_json::from_slice::<BceServiceError>(&self.body) {
            if !err.code.is_empty() || !err.message.is_empty() {
                err.status_code = self.status_code();
                if err.request_id.is_empty() {
                    err.request_id = header_request_id;
                }
                return err;
            }
        }

        let code = self
            .status
            .canonical_reason()
            .map(|r| r.replace(' ', ""))
            .unwrap_or_else(|| format!("Http{}", self.status_code()));
        let text = String::from_utf8_lossy(&self.body).trim().to_string();
        let message = if text.is_empty() {
            format!("HTTP {}", self.status)
        } else {
            text
        };
        BceServiceError::new(code, message, header_request_id, self.status_code())
    }

    /// An empty body is decoded as JSON `null`.
    pub fn parse_json_body<T: DeserializeOwned>(&self) -> Result<T> {
        if self.body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(serde_json::from_slice(b"null")?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(status: u16, body: &str) -> BceResponse {
        let mut headers = BTreeMap::new();
        headers.insert(BCE_REQUEST_ID.to_string(), "hdr-req-id".to_string());
        BceResponse::new(
            StatusCode::from_u16(status).unwrap(),
            headers,
            body.as_bytes().to_vec(),
            Duration::from_millis(5),
        )
    }

    #[test]
    fn test_is_fail() {
        assert!(!response(200, "").is_fail());
        assert!(!response(302, "").is_fail());
        assert!(response(400, "").is_fail());
        assert!(response(503, "").is_fail());
    }

    #[test]
    fn test_service_error_from_document() {
        let resp = response(
            404,
            r#"{"code":"NoSuchUser","message":"user not exist","requestId":"doc-req-id"}"#,
        );
        let err = resp.service_error();
        assert_eq!(err.code, "NoSuchUser");
        assert_eq!(err.message, "user not exist");
        assert_eq!(err.request_id, "doc-req-id");
        assert_eq!(err.status_code, 404);
    }

    #[test]
    fn test_service_error_falls_back_to_status() {
        let err = response(503, "").service_error();
        assert_eq!(err.code, "ServiceUnavailable");
        assert_eq!(err.message, "HTTP 503 Service Unavailable");
        assert_eq!(err.request_id, "hdr-req-id");

        let err = response(502, "upstream broken").service_error();
        assert_eq!(err.code, "BadGateway");
        assert_eq!(err.message, "upstream broken");
    }

    #[test]
    fn test_parse_json_body() {
        #[derive(Deserialize)]
        struct Named {
            name: String,
        }
        let named: Named = response(200, r#"{"name":"alice"}"#).parse_json_body().unwrap();
        assert_eq!(named.name, "alice");

        let unit: () = response(200, "").parse_json_body().unwrap();
        assert_eq!(unit, ());

        assert!(response(200, "").parse_json_body::<Named>().is_err());
    }
}
