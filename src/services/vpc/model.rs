use crate::domain::model::Billing;
use serde::{Deserialize, Serialize};
use std::fmt;

/// NAT 閘道規格，決定最大連線數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NatGatewaySpec {
    Small,
    Medium,
    Large,
}

impl NatGatewaySpec {
    pub fn as_str(&self) -> &'static str {
        match self {
            NatGatewaySpec::Small => "small",
            NatGatewaySpec::Medium => "medium",
            NatGatewaySpec::Large => "large",
        }
    }
}

impl fmt::Display for NatGatewaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NatStatus {
    Building,
    Unconfigured,
    Active,
    Deleting,
    Downgrading,
    Updating,
    Updated,
    Configuring,
    Starting,
    Stopping,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNatGatewayArgs {
    /// 冪等 token，以查詢參數傳送
    #[serde(skip)]
    pub client_token: String,
    pub name: String,
    pub vpc_id: String,
    pub spec: NatGatewaySpec,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub eips: Vec<String>,
    pub billing: Billing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNatGatewayResult {
    pub nat_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListNatGatewayArgs {
    pub vpc_id: String,
    pub nat_id: String,
    pub name: String,
    pub ip: String,
    pub marker: String,
    /// 0 表示使用服務端上限 1000
    pub max_keys: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nat {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vpc_id: String,
    #[serde(default)]
    pub spec: String,
    pub status: NatStatus,
    #[serde(default)]
    pub eips: Vec<String>,
    #[serde(default)]
    pub payment_timing: String,
    #[serde(default)]
    pub expired_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNatGatewayResult {
    #[serde(default)]
    pub nats: Vec<Nat>,
    #[serde(default)]
    pub marker: String,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub next_marker: String,
    #[serde(default)]
    pub max_keys: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNatGatewayArgs {
    #[serde(skip)]
    pub client_token: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindEipsArgs {
    #[serde(skip)]
    pub client_token: String,
    pub eips: Vec<String>,
}

pub type UnbindEipsArgs = BindEipsArgs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewNatGatewayArgs {
    #[serde(skip)]
    pub client_token: String,
    pub billing: Billing,
}
