//! VPC bindings. Only the NAT gateway resource is covered.

mod nat;

pub mod model;

pub use model::*;

use crate::auth::BceCredentials;
use crate::config::{service_endpoint, BceClientConfig, DEFAULT_REGION};
use crate::core::client::BceClient;
use crate::utils::error::Result;

/// VPC APIs are served from the BCC endpoint.
pub const SERVICE_NAME: &str = "bcc";
pub const URI_PREFIX: &str = "/v1";
pub const URI_NAT: &str = "/nat";

pub fn default_endpoint() -> String {
    service_endpoint(SERVICE_NAME, DEFAULT_REGION)
}

/// VPC 服務客戶端
#[derive(Debug, Clone)]
pub struct VpcClient {
    client: BceClient,
}

impl VpcClient {
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

fn nat_url() -> String {
    format!("{}{}", URI_PREFIX, URI_NAT)
}

fn nat_id_url(nat_id: &str) -> String {
    format!("{}{}/{}", URI_PREFIX, URI_NAT, nat_id)
}
