pub mod auth;
pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use auth::{BceCredentials, BceV1Signer, SignOptions, Signer};
pub use config::{BceClientConfig, SdkConfig};
pub use core::{BceClient, RequestBuilder};
pub use services::{iam::IamClient, vcr::VcrClient, vpc::VpcClient};
pub use utils::error::{BceError, BceServiceError, Result};
