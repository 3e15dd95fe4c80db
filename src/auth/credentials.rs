use crate::utils::error::{BceError, Result};
use std::fmt;

/// AK/SK pair, optionally with an STS session token.
#[derive(Clone, PartialEq, Eq)]
pub struct BceCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl BceCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Result<Self> {
        let access_key_id = access_key_id.into();
        let secret_access_key = secret_access_key.into();
        if access_key_id.is_empty() {
            return Err(BceError::invalid_argument("accessKeyId should not be empty"));
        }
        if secret_access_key.is_empty() {
            return Err(BceError::invalid_argument("secretKey should not be empty"));
        }
        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token: None,
        })
    }

    /// 臨時憑證 (STS)，請求時會附帶 `x-bce-security-token`
    pub fn with_session_token(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Result<Self> {
        let session_token = session_token.into();
        if session_token.is_empty() {
            return Err(BceError::invalid_argument("sessionToken should not be empty"));
        }
        let mut credentials = Self::new(access_key_id, secret_access_key)?;
        credentials.session_token = Some(session_token);
        Ok(credentials)
    }
}

impl fmt::Debug for BceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BceCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}
