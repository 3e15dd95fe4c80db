use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "bce")]
#[command(about = "Command line client for BCE IAM, VPC and VCR APIs")]
pub struct CliArgs {
    /// Path to TOML configuration file; falls back to BCE_* environment variables
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_log: bool,

    #[command(subcommand)]
    pub service: ServiceCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ServiceCommand {
    /// Identity and access management
    #[command(subcommand)]
    Iam(IamCommand),
    /// NAT gateways
    #[command(subcommand)]
    Vpc(VpcCommand),
    /// Video content recognition
    #[command(subcommand)]
    Vcr(VcrCommand),
}

impl ServiceCommand {
    /// (設定檔中的服務名稱, 預設端點的主機前綴)
    pub fn service_names(&self) -> (&'static str, &'static str) {
        match self {
            ServiceCommand::Iam(_) => ("iam", crate::services::iam::SERVICE_NAME),
            ServiceCommand::Vpc(_) => ("vpc", crate::services::vpc::SERVICE_NAME),
            ServiceCommand::Vcr(_) => ("vcr", crate::services::vcr::SERVICE_NAME),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum IamCommand {
    ListUsers,
    GetUser {
        #[arg(long)]
        name: String,
    },
    ListGroups,
    ListPolicies {
        #[arg(long, default_value = "")]
        name_filter: String,
        /// CustomPolicy or SystemPolicy
        #[arg(long)]
        policy_type: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum VpcCommand {
    ListNats(ListNatsArgs),
    GetNat {
        #[arg(long)]
        nat_id: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ListNatsArgs {
    #[arg(long)]
    pub vpc_id: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub marker: String,
    #[arg(long, default_value = "0")]
    pub max_keys: u32,
}

#[derive(Debug, Clone, Subcommand)]
pub enum VcrCommand {
    GetMedia {
        #[arg(long)]
        source: String,
    },
}
