//! Video content recognition: submit media for review and poll the result.

mod media;

pub mod model;

pub use model::*;

use crate::auth::BceCredentials;
use crate::config::{service_endpoint, BceClientConfig, DEFAULT_REGION};
use crate::core::client::BceClient;
use crate::utils::error::Result;

pub const SERVICE_NAME: &str = "vcr";
pub const URI_PREFIX: &str = "/v1";
pub const URI_MEDIA: &str = "/media";

pub fn default_endpoint() -> String {
    service_endpoint(SERVICE_NAME, DEFAULT_REGION)
}

/// VCR 服務客戶端
#[derive(Debug, Clone)]
pub struct VcrClient {
    client: BceClient,
}

impl VcrClient {
    pub fn new(ak: &str, sk: &str) -> Result<Self> {
        Self::with_endpoint(ak, sk, &default_endpoint())
    }

    pub fn with_endpoint(ak: &str, sk: &str, endpoint: &str) -> Result<Self> {
        let credentials = BceCredentials::new(ak, sk)?;
        Self::from_config(BceClientConfig::new(endpoint, credentials))
    }

    pub fn from_config(config: BceClientConfig) -> Result<Self> {
        Ok(Self {
            client: BceClient::new(config)?,
        })
    }

    pub fn bce_client(&self) -> &BceClient {
        &self.client
    }
}
