use crate::auth::signer::{format_iso8601, BceV1Signer, Signer};
use crate::config::{BceClientConfig, DEFAULT_CONTENT_TYPE};
use crate::core::request::{BceRequest, BCE_DATE, CONTENT_TYPE, HOST, USER_AGENT};
use crate::core::response::BceResponse;
use crate::domain::ports::Client;
use crate::utils::error::{BceError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Instant;

/// Signs and sends requests for one service endpoint, retrying per the configured policy.
#[derive(Debug, Clone)]
pub struct BceClient {
    config: BceClientConfig,
    signer: Arc<dyn Signer>,
    http: reqwest::Client,
}

impl BceClient {
    pub fn new(config: BceClientConfig) -> Result<Self> {
        Self::with_signer(config, BceV1Signer)
    }

    pub fn with_signer<S: Signer + 'static>(config: BceClientConfig, signer: S) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .connect_timeout(config.connection_timeout)
            .timeout(config.connection_timeout)
            .build()?;
        Ok(Self {
            config,
            signer: Arc::new(signer),
            http,
        })
    }

    pub fn config(&self) -> &BceClientConfig {
        &self.config
    }

    /// 補上端點、Host、User-Agent 等標準標頭
    fn prepare(&self, req: &mut BceRequest) {
        req.set_endpoint(&self.config.endpoint);
        let host = req.host().to_string();
        req.set_header(HOST, host);
        if req.header(USER_AGENT).is_none() {
            req.set_header(USER_AGENT, self.config.user_agent.clone());
        }
        if req.body().is_some() && req.header(CONTENT_TYPE).is_none() {
            req.set_header(CONTENT_TYPE, DEFAULT_CONTENT_TYPE);
        }
    }

    fn to_http_request(&self, req: &BceRequest) -> Result<reqwest::Request> {
        let mut headers = HeaderMap::new();
        for (name, value) in req.headers() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                BceError::invalid_argument(format!("invalid header name '{}': {}", name, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                BceError::invalid_argument(format!("invalid header value '{}': {}", value, e))
            })?;
            headers.insert(name, value);
        }

        let mut builder = self
            .http
            .request(req.method().clone(), req.url())
            .headers(headers);
        if let Some(body) = req.body() {
            builder = builder.body(body.as_bytes().to_vec());
        }
        // 無法建立的請求 (例如無效 URL) 重試也不會成功
        builder
            .build()
            .map_err(|e| BceError::invalid_argument(format!("invalid request: {}", e)))
    }

    async fn send_once(&self, req: &mut BceRequest) -> Result<BceResponse> {
        // 每次重試都重新簽名，x-bce-date 與簽名時間一致
        let now = self.config.sign_options.timestamp.unwrap_or_else(Utc::now);
        req.set_header(BCE_DATE, format_iso8601(&now));
        let mut options = self.config.sign_options.clone();
        options.timestamp = Some(now);
        self.signer.sign(req, &self.config.credentials, &options)?;

        let http_request = self.to_http_request(req)?;
        let started = Instant::now();
        let response = self.http.execute(http_request).await?;
        let elapsed = started.elapsed();
        BceResponse::from_http(response, elapsed).await
    }
}

#[async_trait]
impl Client for BceClient {
    async fn send_request(&self, mut req: BceRequest) -> Result<BceResponse> {
        self.prepare(&mut req);

        let mut attempts = 0u32;
        loop {
            tracing::debug!(
                "📡 {} {} (attempt {})",
                req.method(),
                req.url(),
                attempts + 1
            );

            match self.send_once(&mut req).await {
                Err(err @ (BceError::HttpError(_) | BceError::IoError(_))) => {
                    if !self.config.retry.should_retry(&err, attempts) {
                        tracing::error!("❌ {} {} failed: {}", req.method(), req.uri(), err);
                        return Err(err);
                    }
                    let delay = self.config.retry.delay_before_next_retry(&err, attempts);
                    tracing::warn!("Request failed ({}), retrying in {:?}", err, delay);
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
                Ok(response) => {
                    if response.elapsed() > self.config.warn_log_timeout {
                        tracing::warn!(
                            "Slow response from {} {}: {:?} (request id: {})",
                            req.method(),
                            req.uri(),
                            response.elapsed(),
                            response.request_id().unwrap_or("-")
                        );
                    }

                    if !response.is_fail() {
                        tracing::debug!(
                            "📡 {} {} -> {}",
                            req.method(),
                            req.uri(),
                            response.status()
                        );
                        return Ok(response);
                    }

                    let err = BceError::ServiceError(response.service_error());
                    if !self.config.retry.should_retry(&err, attempts) {
                        tracing::debug!("📡 {} {} -> {}", req.method(), req.uri(), err);
                        return Ok(response);
                    }
                    let delay = self.config.retry.delay_before_next_retry(&err, attempts);
                    tracing::warn!("Service error {}, retrying in {:?}", err, delay);
                    tokio::time::sleep(delay).await;
                }
            }
            attempts += 1;
        }
    }
}
