use super::model::*;
use super::{user_uri, IamClient, URI_ACCESS_KEY};
use crate::core::builder::RequestBuilder;
use crate::utils::error::Result;
use crate::utils::validation::require_argument;
use reqwest::Method;

fn access_key_uri(user_name: &str, access_key_id: &str) -> String {
    format!("{}{}/{}", user_uri(user_name), URI_ACCESS_KEY, access_key_id)
}

impl IamClient {
    /// 建立子使用者的 AK/SK；secret 只會在這次回應中出現
    pub async fn create_access_key(&self, user_name: &str) -> Result<CreateAccessKeyResult> {
        require_argument("userName", user_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", user_uri(user_name), URI_ACCESS_KEY))
            .with_method(Method::POST)
            .fetch()
            .await
    }

    pub async fn disable_access_key(
        &self,
        user_name: &str,
        access_key_id: &str,
    ) -> Result<UpdateAccessKeyResult> {
        self.toggle_access_key(user_name, access_key_id, "disable").await
    }

    pub async fn enable_access_key(
        &self,
        user_name: &str,
        access_key_id: &str,
    ) -> Result<UpdateAccessKeyResult> {
        self.toggle_access_key(user_name, access_key_id, "enable").await
    }

    async fn toggle_access_key(
        &self,
        user_name: &str,
        access_key_id: &str,
        action: &str,
    ) -> Result<UpdateAccessKeyResult> {
        require_argument("userName", user_name)?;
        require_argument("accessKeyId", access_key_id)?;
        RequestBuilder::new(&self.client)
            .with_url(access_key_uri(user_name, access_key_id))
            .with_method(Method::PUT)
            .with_query_param(action, "")
            .fetch()
            .await
    }

    pub async fn delete_access_key(&self, user_name: &str, access_key_id: &str) -> Result<()> {
        require_argument("userName", user_name)?;
        require_argument("accessKeyId", access_key_id)?;
        RequestBuilder::new(&self.client)
            .with_url(access_key_uri(user_name, access_key_id))
            .with_method(Method::DELETE)
            .execute()
            .await
    }

    pub async fn list_access_key(&self, user_name: &str) -> Result<ListAccessKeyResult> {
        require_argument("userName", user_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", user_uri(user_name), URI_ACCESS_KEY))
            .with_method(Method::GET)
            .fetch()
            .await
    }
}
