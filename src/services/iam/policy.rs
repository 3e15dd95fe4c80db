use super::model::*;
use super::{group_uri, policy_uri, user_uri, IamClient, URI_POLICY, URI_PREFIX};
use crate::core::builder::RequestBuilder;
use crate::utils::error::Result;
use crate::utils::validation::require_argument;
use reqwest::Method;

const POLICY_TYPE_PARAM: &str = "policyType";

fn policy_type_value(policy_type: Option<PolicyType>) -> &'static str {
    policy_type.map(|t| t.as_str()).unwrap_or("")
}

impl IamClient {
    pub async fn create_policy(&self, args: &CreatePolicyArgs) -> Result<CreatePolicyResult> {
        require_argument("name", &args.name)?;
        require_argument("document", &args.document)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", URI_PREFIX, URI_POLICY))
            .with_method(Method::POST)
            .with_body(args)
            .fetch()
            .await
    }

    pub async fn get_policy(
        &self,
        name: &str,
        policy_type: Option<PolicyType>,
    ) -> Result<GetPolicyResult> {
        require_argument("policyName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(policy_uri(name))
            .with_method(Method::GET)
            .with_query_param_filter(POLICY_TYPE_PARAM, policy_type_value(policy_type))
            .fetch()
            .await
    }

    pub async fn delete_policy(&self, name: &str) -> Result<()> {
        require_argument("policyName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(policy_uri(name))
            .with_method(Method::DELETE)
            .execute()
            .await
    }

    /// `name_filter` 為空字串時不過濾
    pub async fn list_policy(
        &self,
        name_filter: &str,
        policy_type: Option<PolicyType>,
    ) -> Result<ListPolicyResult> {
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", URI_PREFIX, URI_POLICY))
            .with_method(Method::GET)
            .with_query_param_filter("nameFilter", name_filter)
            .with_query_param_filter(POLICY_TYPE_PARAM, policy_type_value(policy_type))
            .fetch()
            .await
    }

    pub async fn attach_policy_to_user(&self, args: &AttachPolicyToUserArgs) -> Result<()> {
        require_argument("userName", &args.user_name)?;
        require_argument("policyName", &args.policy_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}/{}", user_uri(&args.user_name), URI_POLICY, args.policy_name))
            .with_method(Method::PUT)
            .with_query_param_filter(POLICY_TYPE_PARAM, policy_type_value(args.policy_type))
            .execute()
            .await
    }

    pub async fn detach_policy_from_user(&self, args: &DetachPolicyFromUserArgs) -> Result<()> {
        require_argument("userName", &args.user_name)?;
        require_argument("policyName", &args.policy_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}/{}", user_uri(&args.user_name), URI_POLICY, args.policy_name))
            .with_method(Method::DELETE)
            .with_query_param_filter(POLICY_TYPE_PARAM, policy_type_value(args.policy_type))
            .execute()
            .await
    }

    pub async fn list_user_attached_policies(&self, name: &str) -> Result<ListPolicyResult> {
        require_argument("userName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", user_uri(name), URI_POLICY))
            .with_method(Method::GET)
            .fetch()
            .await
    }

    pub async fn attach_policy_to_group(&self, args: &AttachPolicyToGroupArgs) -> Result<()> {
        require_argument("groupName", &args.group_name)?;
        require_argument("policyName", &args.policy_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}/{}", group_uri(&args.group_name), URI_POLICY, args.policy_name))
            .with_method(Method::PUT)
            .with_query_param_filter(POLICY_TYPE_PARAM, policy_type_value(args.policy_type))
            .execute()
            .await
    }

    pub async fn detach_policy_from_group(&self, args: &DetachPolicyFromGroupArgs) -> Result<()> {
        require_argument("groupName", &args.group_name)?;
        require_argument("policyName", &args.policy_name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}/{}", group_uri(&args.group_name), URI_POLICY, args.policy_name))
            .with_method(Method::DELETE)
            .with_query_param_filter(POLICY_TYPE_PARAM, policy_type_value(args.policy_type))
            .execute()
            .await
    }

    pub async fn list_group_attached_policies(&self, name: &str) -> Result<ListPolicyResult> {
        require_argument("groupName", name)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", group_uri(name), URI_POLICY))
            .with_method(Method::GET)
            .fetch()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::test_config;
    use httpmock::prelude::*;

    const DOCUMENT: &str = r#"{"accessControlList":[{"service":"bce:bos","region":"*","effect":"Allow","resource":["*"],"permission":["READ"]}]}"#;

    fn client(server: &MockServer) -> IamClient {
        IamClient::from_config(test_config(server.base_url())).unwrap()
    }

    #[tokio::test]
    async fn test_create_get_delete_policy() {
        let server = MockServer::start();
        let create_mock = server.mock(|when, then| {
            when.method(POST).path("/v1/policy").json_body(serde_json::json!({
                "name": "test_sdk_policy",
                "document": DOCUMENT
            }));
            then.status(200).json_body(serde_json::json!({
                "id": "p-1",
                "name": "test_sdk_policy",
                "type": "CustomPolicy",
                "document": DOCUMENT
            }));
        });
        let get_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/policy/test_sdk_policy")
                .query_param("policyType", "CustomPolicy");
            then.status(200).json_body(serde_json::json!({
                "id": "p-1",
                "name": "test_sdk_policy",
                "type": "CustomPolicy",
                "document": DOCUMENT
            }));
        });
        let delete_mock = server.mock(|when, then| {
            when.method(DELETE).path("/v1/policy/test_sdk_policy");
            then.status(200);
        });

        let iam = client(&server);
        let created = iam
            .create_policy(&CreatePolicyArgs {
                name: "test_sdk_policy".to_string(),
                description: String::new(),
                document: DOCUMENT.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.policy_type, "CustomPolicy");

        let policy = iam
            .get_policy("test_sdk_policy", Some(PolicyType::CustomPolicy))
            .await
            .unwrap();
        assert_eq!(policy.document, DOCUMENT);

        iam.delete_policy("test_sdk_policy").await.unwrap();

        create_mock.assert();
        get_mock.assert();
        delete_mock.assert();
    }

    #[tokio::test]
    async fn test_list_policy_filters() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/policy")
                .query_param("nameFilter", "read")
                .query_param("policyType", "SystemPolicy");
            then.status(200).json_body(serde_json::json!({
                "policies": [{"id": "p-2", "name": "BosReadAccess", "type": "SystemPolicy"}]
            }));
        });

        let result = client(&server)
            .list_policy("read", Some(PolicyType::SystemPolicy))
            .await
            .unwrap();
        api_mock.assert();
        assert_eq!(result.policies.len(), 1);
        assert_eq!(result.policies[0].name, "BosReadAccess");
    }

    #[tokio::test]
    async fn test_list_policy_without_filters_sends_no_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/policy")
                .matches(|req| req.query_params.as_ref().map_or(true, |q| q.is_empty()));
            then.status(200).json_body(serde_json::json!({"policies": []}));
        });

        let result = client(&server).list_policy("", None).await.unwrap();
        api_mock.assert();
        assert!(result.policies.is_empty());
    }

    #[tokio::test]
    async fn test_attach_detach_policy() {
        let server = MockServer::start();
        let attach_user_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v1/user/alice/policy/test_sdk_policy")
                .query_param("policyType", "CustomPolicy");
            then.status(200);
        });
        let list_user_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/user/alice/policy");
            then.status(200).json_body(serde_json::json!({
                "policies": [{"id": "p-1", "name": "test_sdk_policy", "type": "CustomPolicy"}]
            }));
        });
        let detach_user_mock = server.mock(|when, then| {
            when.method(DELETE).path("/v1/user/alice/policy/test_sdk_policy");
            then.status(200);
        });
        let attach_group_mock = server.mock(|when, then| {
            when.method(PUT).path("/v1/group/devs/policy/test_sdk_policy");
            then.status(200);
        });
        let list_group_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/group/devs/policy");
            then.status(200).json_body(serde_json::json!({"policies": []}));
        });
        let detach_group_mock = server.mock(|when, then| {
            when.method(DELETE).path("/v1/group/devs/policy/test_sdk_policy");
            then.status(200);
        });

        let iam = client(&server);
        let user_args = AttachPolicyToUserArgs {
            user_name: "alice".to_string(),
            policy_name: "test_sdk_policy".to_string(),
            policy_type: Some(PolicyType::CustomPolicy),
        };
        iam.attach_policy_to_user(&user_args).await.unwrap();
        let attached = iam.list_user_attached_policies("alice").await.unwrap();
        assert_eq!(attached.policies[0].name, "test_sdk_policy");
        iam.detach_policy_from_user(&user_args).await.unwrap();

        let group_args = AttachPolicyToGroupArgs {
            group_name: "devs".to_string(),
            policy_name: "test_sdk_policy".to_string(),
            policy_type: None,
        };
        iam.attach_policy_to_group(&group_args).await.unwrap();
        assert!(iam
            .list_group_attached_policies("devs")
            .await
            .unwrap()
            .policies
            .is_empty());
        iam.detach_policy_from_group(&group_args).await.unwrap();

        attach_user_mock.assert();
        list_user_mock.assert();
        detach_user_mock.assert();
        attach_group_mock.assert();
        list_group_mock.assert();
        detach_group_mock.assert();
    }
}
