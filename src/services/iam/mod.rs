//! Identity and access management: sub-users, login profiles, groups,
//! policies and access keys.

mod access_key;
mod group;
mod policy;
mod user;

pub mod model;

pub use model::*;

use crate::auth::BceCredentials;
use crate::config::{service_endpoint, BceClientConfig, DEFAULT_REGION};
use crate::core::client::BceClient;
use crate::utils::error::Result;

pub const SERVICE_NAME: &str = "iam";
pub const URI_PREFIX: &str = "/v1";
pub const URI_USER: &str = "/user";
pub const URI_GROUP: &str = "/group";
pub const URI_POLICY: &str = "/policy";
pub const URI_LOGIN_PROFILE: &str = "/loginProfile";
pub const URI_ACCESS_KEY: &str = "/accesskey";

pub fn default_endpoint() -> String {
    service_endpoint(SERVICE_NAME, DEFAULT_REGION)
}

/// IAM 服務客戶端
#[derive(Debug, Clone)]
pub struct IamClient {
    client: BceClient,
}

impl IamClient {
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

// Raw names; the request layer percent-encodes the path once when sending.
fn user_uri(name: &str) -> String {
    format!("{}{}/{}", URI_PREFIX, URI_USER, name)
}

fn group_uri(name: &str) -> String {
    format!("{}{}/{}", URI_PREFIX, URI_GROUP, name)
}

fn policy_uri(name: &str) -> String {
    format!("{}{}/{}", URI_PREFIX, URI_POLICY, name)
}
