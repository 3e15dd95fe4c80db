use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserArgs {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
}

pub type CreateUserResult = UserModel;
pub type GetUserResult = UserModel;
pub type UpdateUserResult = UserModel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserArgs {
    /// 新名稱，留空表示不修改
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUserResult {
    #[serde(default)]
    pub users: Vec<UserModel>,
}

/// Console login settings of a sub-user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginProfileModel {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub password: String,
    #[serde(default)]
    pub need_reset_password: bool,
    #[serde(default)]
    pub enabled_login_mfa: bool,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub login_mfa_type: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub third_party_type: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub third_party_account: String,
}

pub type UpdateUserLoginProfileArgs = LoginProfileModel;
pub type UpdateUserLoginProfileResult = LoginProfileModel;
pub type GetUserLoginProfileResult = LoginProfileModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupModel {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupArgs {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
}

pub type CreateGroupResult = GroupModel;
pub type GetGroupResult = GroupModel;
pub type UpdateGroupResult = GroupModel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGroupArgs {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroupResult {
    #[serde(default)]
    pub groups: Vec<GroupModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersInGroupResult {
    #[serde(default)]
    pub users: Vec<UserModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroupsForUserResult {
    #[serde(default)]
    pub groups: Vec<GroupModel>,
}

/// 策略類型：自訂策略或系統內建策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyType {
    CustomPolicy,
    SystemPolicy,
}

impl PolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::CustomPolicy => "CustomPolicy",
            PolicyType::SystemPolicy => "SystemPolicy",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PolicyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CustomPolicy" => Ok(PolicyType::CustomPolicy),
            "SystemPolicy" => Ok(PolicyType::SystemPolicy),
            other => Err(format!("unknown policy type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyModel {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// `CustomPolicy` / `SystemPolicy`; kept as text so new types still decode.
    #[serde(rename = "type", default)]
    pub policy_type: String,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub document: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePolicyArgs {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    /// JSON 格式的 ACL 文件
    pub document: String,
}

pub type CreatePolicyResult = PolicyModel;
pub type GetPolicyResult = PolicyModel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPolicyResult {
    #[serde(default)]
    pub policies: Vec<PolicyModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachPolicyToUserArgs {
    pub user_name: String,
    pub policy_name: String,
    pub policy_type: Option<PolicyType>,
}

pub type DetachPolicyFromUserArgs = AttachPolicyToUserArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachPolicyToGroupArgs {
    pub group_name: String,
    pub policy_name: String,
    pub policy_type: Option<PolicyType>,
}

pub type DetachPolicyFromGroupArgs = AttachPolicyToGroupArgs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyModel {
    pub id: String,
    /// 只有建立時會回傳
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub secret: String,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
}

pub type CreateAccessKeyResult = AccessKeyModel;
pub type UpdateAccessKeyResult = AccessKeyModel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAccessKeyResult {
    #[serde(default)]
    pub access_keys: Vec<AccessKeyModel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_model_decodes_service_document() {
        let user: UserModel = serde_json::from_value(serde_json::json!({
            "id": "c9b1a9f2",
            "name": "test-user-sdk",
            "createTime": "2021-06-17T09:04:21Z",
            "description": "description"
        }))
        .unwrap();
        assert_eq!(user.name, "test-user-sdk");
        assert_eq!(
            user.create_time.unwrap().to_rfc3339(),
            "2021-06-17T09:04:21+00:00"
        );
    }

    #[test]
    fn test_empty_optional_fields_are_omitted() {
        let json = serde_json::to_value(CreateUserArgs {
            name: "alice".to_string(),
            description: String::new(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"name": "alice"}));

        let json = serde_json::to_value(LoginProfileModel {
            enabled_login_mfa: true,
            login_mfa_type: "PHONE".to_string(),
            ..LoginProfileModel::default()
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "needResetPassword": false,
                "enabledLoginMfa": true,
                "loginMfaType": "PHONE"
            })
        );
    }

    #[test]
    fn test_policy_type_parsing() {
        assert_eq!("SystemPolicy".parse::<PolicyType>().unwrap(), PolicyType::SystemPolicy);
        assert!("Other".parse::<PolicyType>().is_err());
        assert_eq!(PolicyType::CustomPolicy.to_string(), "CustomPolicy");
    }
}
