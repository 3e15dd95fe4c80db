use crate::auth::{BceCredentials, SignOptions};
use crate::config::{service_endpoint, BceClientConfig, DEFAULT_REGION};
use crate::core::retry::{BackOffRetryPolicy, NoRetryPolicy};
use crate::utils::error::{BceError, Result};
use crate::utils::validation::{
    validate_endpoint, validate_non_empty_string, validate_range, validate_required_field,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const ENV_ACCESS_KEY_ID: &str = "BCE_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "BCE_SECRET_ACCESS_KEY";
pub const ENV_SESSION_TOKEN: &str = "BCE_SESSION_TOKEN";
pub const ENV_REGION: &str = "BCE_REGION";

/// SDK 設定檔 (TOML)
///
/// ```toml
/// [credentials]
/// access_key_id = "${BCE_ACCESS_KEY_ID}"
/// secret_access_key = "${BCE_SECRET_ACCESS_KEY}"
///
/// [client]
/// region = "bj"
/// endpoints = { iam = "iam.bj.baidubce.com" }
///
/// [retry]
/// max_error_retry = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub credentials: CredentialsConfig,
    pub client: Option<ClientSection>,
    pub retry: Option<RetryConfig>,
    pub sign: Option<SignConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub region: Option<String>,
    pub user_agent: Option<String>,
    pub connection_timeout_seconds: Option<u64>,
    /// 依服務覆寫端點，例如 `iam`、`vpc`、`vcr`
    pub endpoints: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub enabled: Option<bool>,
    pub max_error_retry: Option<u32>,
    pub max_delay_millis: Option<u64>,
    pub base_interval_millis: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignConfig {
    pub expire_seconds: Option<u32>,
    pub headers_to_sign: Option<Vec<String>>,
}

impl SdkConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BceError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BceError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 只從環境變數組出配置 (BCE_ACCESS_KEY_ID / BCE_SECRET_ACCESS_KEY / ...)
    pub fn from_env() -> Self {
        let region = std::env::var(ENV_REGION).ok();
        Self {
            credentials: CredentialsConfig {
                access_key_id: std::env::var(ENV_ACCESS_KEY_ID).ok(),
                secret_access_key: std::env::var(ENV_SECRET_ACCESS_KEY).ok(),
                session_token: std::env::var(ENV_SESSION_TOKEN).ok(),
            },
            client: region.map(|region| ClientSection {
                region: Some(region),
                ..ClientSection::default()
            }),
            retry: None,
            sign: None,
        }
    }

    /// 替換環境變數 (例如 ${BCE_ACCESS_KEY_ID})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BceError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn region(&self) -> &str {
        self.client
            .as_ref()
            .and_then(|c| c.region.as_deref())
            .unwrap_or(DEFAULT_REGION)
    }

    /// 取得服務端點；未覆寫時使用 `<service_host>.<region>.baidubce.com`
    pub fn endpoint_for(&self, service: &str, service_host: &str) -> String {
        self.client
            .as_ref()
            .and_then(|c| c.endpoints.as_ref())
            .and_then(|endpoints| endpoints.get(service))
            .cloned()
            .unwrap_or_else(|| service_endpoint(service_host, self.region()))
    }

    /// 以指令列等來源覆寫單一服務的端點
    pub fn set_endpoint(&mut self, service: &str, endpoint: &str) {
        self.client
            .get_or_insert_with(ClientSection::default)
            .endpoints
            .get_or_insert_with(HashMap::new)
            .insert(service.to_string(), endpoint.to_string());
    }

    pub fn credentials(&self) -> Result<BceCredentials> {
        let ak = validate_required_field("credentials.access_key_id", &self.credentials.access_key_id)?;
        let sk = validate_required_field(
            "credentials.secret_access_key",
            &self.credentials.secret_access_key,
        )?;
        match self.credentials.session_token.as_deref() {
            Some(token) if !token.is_empty() => {
                BceCredentials::with_session_token(ak.as_str(), sk.as_str(), token)
            }
            _ => BceCredentials::new(ak.as_str(), sk.as_str()),
        }
    }

    /// Builds the client configuration for one service.
    pub fn to_client_config(&self, service: &str, service_host: &str) -> Result<BceClientConfig> {
        self.validate_config()?;

        let mut config =
            BceClientConfig::new(self.endpoint_for(service, service_host), self.credentials()?)
                .with_region(self.region());

        if let Some(client) = &self.client {
            if let Some(user_agent) = &client.user_agent {
                config = config.with_user_agent(user_agent.clone());
            }
            if let Some(seconds) = client.connection_timeout_seconds {
                config = config.with_connection_timeout(Duration::from_secs(seconds));
            }
        }

        if let Some(retry) = &self.retry {
            config = if retry.enabled == Some(false) {
                config.with_retry(NoRetryPolicy)
            } else {
                let defaults = BackOffRetryPolicy::default();
                config.with_retry(BackOffRetryPolicy::new(
                    retry.max_error_retry.unwrap_or(defaults.max_error_retry()),
                    Duration::from_millis(
                        retry
                            .max_delay_millis
                            .unwrap_or(crate::core::retry::DEFAULT_MAX_DELAY_IN_MILLIS),
                    ),
                    Duration::from_millis(
                        retry
                            .base_interval_millis
                            .unwrap_or(crate::core::retry::DEFAULT_BASE_INTERVAL_IN_MILLIS),
                    ),
                ))
            };
        }

        if let Some(sign) = &self.sign {
            let mut options = SignOptions::default();
            if let Some(expire) = sign.expire_seconds {
                options.expire_seconds = expire;
            }
            if let Some(headers) = &sign.headers_to_sign {
                options.headers_to_sign =
                    Some(headers.iter().map(|h| h.to_ascii_lowercase()).collect());
            }
            config = config.with_sign_options(options);
        }

        Ok(config)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let ak = validate_required_field("credentials.access_key_id", &self.credentials.access_key_id)?;
        validate_non_empty_string("credentials.access_key_id", ak)?;
        let sk = validate_required_field(
            "credentials.secret_access_key",
            &self.credentials.secret_access_key,
        )?;
        validate_non_empty_string("credentials.secret_access_key", sk)?;

        // 未替換的 ${VAR} 代表環境變數不存在
        for (field, value) in [("credentials.access_key_id", ak), ("credentials.secret_access_key", sk)] {
            if value.starts_with("${") {
                return Err(BceError::MissingConfigError {
                    field: format!("{} (environment variable {} is not set)", field, value),
                });
            }
        }

        if let Some(client) = &self.client {
            if let Some(region) = &client.region {
                validate_non_empty_string("client.region", region)?;
            }
            if let Some(endpoints) = &client.endpoints {
                for (service, endpoint) in endpoints {
                    validate_endpoint(&format!("client.endpoints.{}", service), endpoint)?;
                }
            }
        }

        if let Some(retry) = &self.retry {
            if let Some(max) = retry.max_error_retry {
                validate_range("retry.max_error_retry", max, 0, 10)?;
            }
        }

        if let Some(sign) = &self.sign {
            if let Some(expire) = sign.expire_seconds {
                validate_range("sign.expire_seconds", expire, 1, 7 * 24 * 3600)?;
            }
        }

        Ok(())
    }
}

impl Validate for SdkConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
