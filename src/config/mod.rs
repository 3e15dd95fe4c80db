#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::auth::{BceCredentials, SignOptions};
use crate::core::retry::{BackOffRetryPolicy, RetryPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoint, validate_non_empty_string, Validate};
use std::sync::Arc;
use std::time::Duration;

pub use toml_config::SdkConfig;

pub const DEFAULT_REGION: &str = "bj";
pub const DEFAULT_DOMAIN: &str = "baidubce.com";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json;charset=utf-8";
pub const DEFAULT_CONNECTION_TIMEOUT_IN_MILLIS: u64 = 1200 * 1000;
pub const DEFAULT_WARN_LOG_TIMEOUT_IN_MILLIS: u64 = 5 * 1000;

pub fn default_user_agent() -> String {
    format!(
        "bce-sdk-rust/{}/{}/{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// `<service>.<region>.baidubce.com`
pub fn service_endpoint(service: &str, region: &str) -> String {
    format!("{}.{}.{}", service, region, DEFAULT_DOMAIN)
}

/// Everything a [`crate::core::client::BceClient`] needs to reach one service endpoint.
#[derive(Debug, Clone)]
pub struct BceClientConfig {
    pub endpoint: String,
    pub region: String,
    pub user_agent: String,
    pub credentials: BceCredentials,
    pub sign_options: SignOptions,
    pub retry: Arc<dyn RetryPolicy>,
    pub connection_timeout: Duration,
    /// 回應時間超過此值時記錄警告
    pub warn_log_timeout: Duration,
}

impl BceClientConfig {
    pub fn new(endpoint: impl Into<String>, credentials: BceCredentials) -> Self {
        Self {
            endpoint: endpoint.into(),
            region: DEFAULT_REGION.to_string(),
            user_agent: default_user_agent(),
            credentials,
            sign_options: SignOptions::default(),
            retry: Arc::new(BackOffRetryPolicy::default()),
            connection_timeout: Duration::from_millis(DEFAULT_CONNECTION_TIMEOUT_IN_MILLIS),
            warn_log_timeout: Duration::from_millis(DEFAULT_WARN_LOG_TIMEOUT_IN_MILLIS),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_sign_options(mut self, sign_options: SignOptions) -> Self {
        self.sign_options = sign_options;
        self
    }

    pub fn with_retry<R: RetryPolicy + 'static>(mut self, retry: R) -> Self {
        self.retry = Arc::new(retry);
        self
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }
}

impl Validate for BceClientConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("endpoint", &self.endpoint)?;
        validate_non_empty_string("region", &self.region)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}
