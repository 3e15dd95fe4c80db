use anyhow::Context;
use bce_sdk::config::cli::{IamCommand, ServiceCommand, VcrCommand, VpcCommand};
use bce_sdk::services::iam::PolicyType;
use bce_sdk::services::vpc::ListNatGatewayArgs;
use bce_sdk::utils::logger;
use bce_sdk::{CliArgs, IamClient, SdkConfig, VcrClient, VpcClient};
use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_log {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if let Err(e) = run(args).await {
        tracing::error!("❌ Command failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let mut sdk_config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            SdkConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
        }
        None => SdkConfig::from_env(),
    };

    let (service, service_host) = args.service.service_names();
    if let Some(endpoint) = &args.endpoint {
        sdk_config.set_endpoint(service, endpoint);
        tracing::info!("🔧 Endpoint overridden to: {}", endpoint);
    }

    let client_config = sdk_config
        .to_client_config(service, service_host)
        .context("invalid configuration")?;
    tracing::debug!("Using endpoint {}", client_config.endpoint);

    match args.service {
        ServiceCommand::Iam(command) => {
            let iam = IamClient::from_config(client_config)?;
            match command {
                IamCommand::ListUsers => print_json(&iam.list_user().await?),
                IamCommand::GetUser { name } => print_json(&iam.get_user(&name).await?),
                IamCommand::ListGroups => print_json(&iam.list_group().await?),
                IamCommand::ListPolicies {
                    name_filter,
                    policy_type,
                } => {
                    let policy_type = policy_type
                        .map(|t| t.parse::<PolicyType>())
                        .transpose()
                        .map_err(anyhow::Error::msg)?;
                    print_json(&iam.list_policy(&name_filter, policy_type).await?)
                }
            }
        }
        ServiceCommand::Vpc(command) => {
            let vpc = VpcClient::from_config(client_config)?;
            match command {
                VpcCommand::ListNats(list) => {
                    let list_args = ListNatGatewayArgs {
                        vpc_id: list.vpc_id,
                        name: list.name,
                        marker: list.marker,
                        max_keys: list.max_keys,
                        ..ListNatGatewayArgs::default()
                    };
                    print_json(&vpc.list_nat_gateway(&list_args).await?)
                }
                VpcCommand::GetNat { nat_id } => {
                    print_json(&vpc.get_nat_gateway_detail(&nat_id).await?)
                }
            }
        }
        ServiceCommand::Vcr(VcrCommand::GetMedia { source }) => {
            let vcr = VcrClient::from_config(client_config)?;
            print_json(&vcr.get_media(&source).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
