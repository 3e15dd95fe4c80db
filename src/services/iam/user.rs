use super::model::*;
use super::{user_uri, IamClient, URI_LOGIN_PROFILE, URI_PREFIX, URI_USER};
use crate::core::builder::RequestBuilder;
use crate::utils::error::Result;
use crate::utils::validation::require_argument;
use reqwest::Method;

impl IamClient {
    pub async fn create_user(&self, args: &CreateUserArgs) -> Result<CreateUserResult> {
        require_argument("name", &args.name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", URI_PREFIX, URI_USER))
            .with_method(Method::POST)
            .with_body(args)
            .fetch()
            .await
    }

    pub async fn get_user(&self, name: &str) -> Result<GetUserResult> {
        require_argument("userName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(user_uri(name))
            .with_method(Method::GET)
            .fetch()
            .await
    }

    pub async fn update_user(&self, name: &str, args: &UpdateUserArgs) -> Result<UpdateUserResult> {
        require_argument("userName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(user_uri(name))
            .with_method(Method::PUT)
            .with_body(args)
            .fetch()
            .await
    }

    pub async fn delete_user(&self, name: &str) -> Result<()> {
        require_argument("userName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(user_uri(name))
            .with_method(Method::DELETE)
            .execute()
            .await
    }

    pub async fn list_user(&self) -> Result<ListUserResult> {
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", URI_PREFIX, URI_USER))
            .with_method(Method::GET)
            .fetch()
            .await
    }

    /// 設定子使用者的控制台登入 (密碼、MFA)
    pub async fn update_user_login_profile(
        &self,
        name: &str,
        args: &UpdateUserLoginProfileArgs,
    ) -> Result<UpdateUserLoginProfileResult> {
        require_argument("userName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", user_uri(name), URI_LOGIN_PROFILE))
            .with_method(Method::PUT)
            .with_body(args)
            .fetch()
            .await
    }

    pub async fn get_user_login_profile(&self, name: &str) -> Result<GetUserLoginProfileResult> {
        require_argument("userName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", user_uri(name), URI_LOGIN_PROFILE))
            .with_method(Method::GET)
            .fetch()
            .await
    }

    pub async fn delete_user_login_profile(&self, name: &str) -> Result<()> {
        require_argument("userName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", user_uri(name), URI_LOGIN_PROFILE))
            .with_method(Method::DELETE)
            .execute()
            .await
    }
}
