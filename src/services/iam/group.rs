use super::model::*;
use super::{group_uri, user_uri, IamClient, URI_GROUP, URI_PREFIX, URI_USER};
use crate::core::builder::RequestBuilder;
use crate::utils::error::Result;
use crate::utils::validation::require_argument;
use reqwest::Method;

impl IamClient {
    pub async fn create_group(&self, args: &CreateGroupArgs) -> Result<CreateGroupResult> {
        require_argument("name", &args.name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", URI_PREFIX, URI_GROUP))
            .with_method(Method::POST)
            .with_body(args)
            .fetch()
            .await
    }

    pub async fn get_group(&self, name: &str) -> Result<GetGroupResult> {
        require_argument("groupName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(group_uri(name))
            .with_method(Method::GET)
            .fetch()
            .await
    }

    pub async fn update_group(&self, name: &str, args: &UpdateGroupArgs) -> Result<UpdateGroupResult> {
        require_argument("groupName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(group_uri(name))
            .with_method(Method::PUT)
            .with_body(args)
            .fetch()
            .await
    }

    pub async fn delete_group(&self, name: &str) -> Result<()> {
        require_argument("groupName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(group_uri(name))
            .with_method(Method::DELETE)
            .execute()
            .await
    }

    pub async fn list_group(&self) -> Result<ListGroupResult> {
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", URI_PREFIX, URI_GROUP))
            .with_method(Method::GET)
            .fetch()
            .await
    }

    pub async fn add_user_to_group(&self, user_name: &str, group_name: &str) -> Result<()> {
        require_argument("userName", user_name)?;
        require_argument("groupName", group_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}/{}", group_uri(group_name), URI_USER, user_name))
            .with_method(Method::PUT)
            .execute()
            .await
    }

    pub async fn delete_user_from_group(&self, user_name: &str, group_name: &str) -> Result<()> {
        require_argument("userName", user_name)?;
        require_argument("groupName", group_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}/{}", group_uri(group_name), URI_USER, user_name))
            .with_method(Method::DELETE)
            .execute()
            .await
    }

    pub async fn list_users_in_group(&self, group_name: &str) -> Result<ListUsersInGroupResult> {
        require_argument("groupName", group_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", group_uri(group_name), URI_USER))
            .with_method(Method::GET)
            .fetch()
            .await
    }

    pub async fn list_groups_for_user(&self, user_name: &str) -> Result<ListGroupsForUserResult> {
        require_argument("userName", user_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", user_uri(user_name), URI_GROUP))
            .with_method(Method::GET)
            .fetch()
            .await
    }
}
