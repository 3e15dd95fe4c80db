use super::model::*;
use super::{nat_id_url, nat_url, VpcClient};
use crate::core::builder::RequestBuilder;
use crate::utils::error::Result;
use crate::utils::validation::require_argument;
use reqwest::Method;

const CLIENT_TOKEN: &str = "clientToken";
const DEFAULT_MAX_KEYS: u32 = 1000;

impl VpcClient {
    pub async fn create_nat_gateway(
        &self,
        args: &CreateNatGatewayArgs,
    ) -> Result<CreateNatGatewayResult> {
        require_argument("name", &args.name)?;
        require_argument("vpcId", &args.vpc_id)?;
        RequestBuilder::new(&self.client)
            .with_url(nat_url())
            .with_method(Method::POST)
            .with_body(args)
            .with_query_param_filter(CLIENT_TOKEN, &args.client_token)
            .fetch()
            .await
    }

    /// 分頁列出 VPC 內的 NAT 閘道；`max_keys` 為 0 時取 1000
    pub async fn list_nat_gateway(&self, args: &ListNatGatewayArgs) -> Result<ListNatGatewayResult> {
        require_argument("vpcId", &args.vpc_id)?;
        let max_keys = if args.max_keys == 0 {
            DEFAULT_MAX_KEYS
        } else {
            args.max_keys
        };
        RequestBuilder::new(&self.client)
            .with_url(nat_url())
            .with_method(Method::GET)
            .with_query_param("vpcId", args.vpc_id.as_str())
            .with_query_param_filter("natId", &args.nat_id)
            .with_query_param_filter("name", &args.name)
            .with_query_param_filter("ip", &args.ip)
            .with_query_param_filter("marker", &args.marker)
            .with_query_param_filter("maxKeys", max_keys.to_string())
            .fetch()
            .await
    }

    pub async fn get_nat_gateway_detail(&self, nat_id: &str) -> Result<Nat> {
        require_argument("natId", nat_id)?;
        RequestBuilder::new(&self.client)
            .with_url(nat_id_url(nat_id))
            .with_method(Method::GET)
            .fetch()
            .await
    }

    pub async fn update_nat_gateway(&self, nat_id: &str, args: &UpdateNatGatewayArgs) -> Result<()> {
        require_argument("natId", nat_id)?;
        RequestBuilder::new(&self.client)
            .with_url(nat_id_url(nat_id))
            .with_method(Method::PUT)
            .with_body(args)
            .with_query_param_filter(CLIENT_TOKEN, &args.client_token)
            .execute()
            .await
    }

    pub async fn bind_eips(&self, nat_id: &str, args: &BindEipsArgs) -> Result<()> {
        self.change_eips(nat_id, args, "bind").await
    }

    pub async fn unbind_eips(&self, nat_id: &str, args: &UnbindEipsArgs) -> Result<()> {
        self.change_eips(nat_id, args, "unbind").await
    }

    async fn change_eips(&self, nat_id: &str, args: &BindEipsArgs, action: &str) -> Result<()> {
        require_argument("natId", nat_id)?;
        RequestBuilder::new(&self.client)
            .with_url(nat_id_url(nat_id))
            .with_method(Method::PUT)
            .with_body(args)
            .with_query_param_filter(CLIENT_TOKEN, &args.client_token)
            .with_query_param(action, "")
            .execute()
            .await
    }

    pub async fn delete_nat_gateway(&self, nat_id: &str, client_token: &str) -> Result<()> {
        require_argument("natId", nat_id)?;
        RequestBuilder::new(&self.client)
            .with_url(nat_id_url(nat_id))
            .with_method(Method::DELETE)
            .with_query_param_filter(CLIENT_TOKEN, client_token)
            .execute()
            .await
    }

    /// 預付費 NAT 閘道續費
    pub async fn renew_nat_gateway(&self, nat_id: &str, args: &RenewNatGatewayArgs) -> Result<()> {
        require_argument("natId", nat_id)?;
        RequestBuilder::new(&self.client)
            .with_url(nat_id_url(nat_id))
            .with_method(Method::PUT)
            .with_body(args)
            .with_query_param_filter(CLIENT_TOKEN, &args.client_token)
            .with_query_param("purchaseReserved", "")
            .execute()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Billing;
    use crate::services::testing::test_config;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> VpcClient {
        VpcClient::from_config(test_config(server.base_url())).unwrap()
    }

    #[tokio::test]
    async fn test_create_nat_gateway() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/nat")
                .query_param("clientToken", "token-1")
                .json_body(serde_json::json!({
                    "name": "nat-demo",
                    "vpcId": "vpc-1",
                    "spec": "medium",
                    "eips": ["1.2.3.4"],
                    "billing": {
                        "paymentTiming": "Prepaid",
                        "reservation": {"reservationLength": 1, "reservationTimeUnit": "month"}
                    }
                }));
            then.status(200).json_body(serde_json::json!({"natId": "nat-123"}));
        });

        let args = CreateNatGatewayArgs {
            client_token: "token-1".to_string(),
            name: "nat-demo".to_string(),
            vpc_id: "vpc-1".to_string(),
            spec: NatGatewaySpec::Medium,
            eips: vec!["1.2.3.4".to_string()],
            billing: Billing::prepaid(1),
        };
        let result = client(&server).create_nat_gateway(&args).await.unwrap();
        api_mock.assert();
        assert_eq!(result.nat_id, "nat-123");
    }

    #[tokio::test]
    async fn test_list_nat_gateway_defaults_max_keys() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/nat")
                .query_param("vpcId", "vpc-1")
                .query_param("maxKeys", "1000")
                .query_param_exists("name")
                .matches(|req| {
                    req.query_params
                        .as_ref()
                        .map_or(false, |q| !q.iter().any(|(k, _)| k == "marker" || k == "ip"))
                });
            then.status(200).json_body(serde_json::json!({
                "nats": [{
                    "id": "nat-123",
                    "name": "nat-demo",
                    "vpcId": "vpc-1",
                    "spec": "small",
                    "status": "active",
                    "eips": ["1.2.3.4"],
                    "paymentTiming": "Postpaid"
                }],
                "marker": "",
                "isTruncated": true,
                "nextMarker": "nat-456",
                "maxKeys": 1000
            }));
        });

        let args = ListNatGatewayArgs {
            vpc_id: "vpc-1".to_string(),
            name: "nat-demo".to_string(),
            ..ListNatGatewayArgs::default()
        };
        let result = client(&server).list_nat_gateway(&args).await.unwrap();
        api_mock.assert();
        assert!(result.is_truncated);
        assert_eq!(result.next_marker, "nat-456");
        assert_eq!(result.nats[0].status, NatStatus::Active);
    }

    #[tokio::test]
    async fn test_list_nat_gateway_requires_vpc() {
        let server = MockServer::start();
        let err = client(&server)
            .list_nat_gateway(&ListNatGatewayArgs::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: vpcId cannot be empty");
    }

    #[tokio::test]
    async fn test_get_update_delete_nat_gateway() {
        let server = MockServer::start();
        let get_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/nat/nat-123");
            then.status(200).json_body(serde_json::json!({
                "id": "nat-123",
                "name": "nat-demo",
                "vpcId": "vpc-1",
                "spec": "large",
                "status": "unconfigured",
                "eips": [],
                "paymentTiming": "Prepaid",
                "expiredTime": "2026-12-01T00:00:00Z"
            }));
        });
        let update_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v1/nat/nat-123")
                .json_body(serde_json::json!({"name": "nat-renamed"}));
            then.status(200);
        });
        let delete_mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/v1/nat/nat-123")
                .query_param("clientToken", "token-2");
            then.status(200);
        });

        let vpc = client(&server);
        let nat = vpc.get_nat_gateway_detail("nat-123").await.unwrap();
        assert_eq!(nat.status, NatStatus::Unconfigured);
        assert_eq!(nat.expired_time, "2026-12-01T00:00:00Z");

        vpc.update_nat_gateway(
            "nat-123",
            &UpdateNatGatewayArgs {
                name: "nat-renamed".to_string(),
                ..UpdateNatGatewayArgs::default()
            },
        )
        .await
        .unwrap();
        vpc.delete_nat_gateway("nat-123", "token-2").await.unwrap();

        get_mock.assert();
        update_mock.assert();
        delete_mock.assert();
    }

    #[tokio::test]
    async fn test_bind_unbind_and_renew() {
        let server = MockServer::start();
        let bind_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v1/nat/nat-123")
                .query_param_exists("bind")
                .json_body(serde_json::json!({"eips": ["1.2.3.4"]}));
            then.status(200);
        });
        let unbind_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v1/nat/nat-123")
                .query_param_exists("unbind")
                .json_body(serde_json::json!({"eips": ["1.2.3.4"]}));
            then.status(200);
        });
        let renew_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v1/nat/nat-123")
                .query_param_exists("purchaseReserved")
                .json_body(serde_json::json!({
                    "billing": {"reservation": {"reservationLength": 6, "reservationTimeUnit": "month"}}
                }));
            then.status(200);
        });

        let vpc = client(&server);
        let eips = BindEipsArgs {
            eips: vec!["1.2.3.4".to_string()],
            ..BindEipsArgs::default()
        };
        vpc.bind_eips("nat-123", &eips).await.unwrap();
        vpc.unbind_eips("nat-123", &eips).await.unwrap();

        let mut billing = Billing::prepaid(6);
        billing.payment_timing = None;
        vpc.renew_nat_gateway(
            "nat-123",
            &RenewNatGatewayArgs {
                client_token: String::new(),
                billing,
            },
        )
        .await
        .unwrap();

        bind_mock.assert();
        unbind_mock.assert();
        renew_mock.assert();
    }
}
