use crate::auth::credentials::BceCredentials;
use crate::core::request::{
    BceRequest, AUTHORIZATION, BCE_PREFIX, BCE_REQUEST_ID, BCE_SECURITY_TOKEN,
};
use crate::utils::encoding::uri_encode;
use crate::utils::error::{BceError, Result};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeSet;

type HmacSha256 = Hmac<Sha256>;

pub const BCE_AUTH_VERSION: &str = "bce-auth-v1";
pub const DEFAULT_EXPIRE_SECONDS: u32 = 1800;
pub const DEFAULT_HEADERS_TO_SIGN: [&str; 4] =
    ["host", "content-md5", "content-length", "content-type"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOptions {
    /// `None` signs the default header set.
    pub headers_to_sign: Option<BTreeSet<String>>,
    /// 固定簽名時間 (測試或預簽名用)，`None` 表示使用當下時間
    pub timestamp: Option<DateTime<Utc>>,
    pub expire_seconds: u32,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            headers_to_sign: Some(
                DEFAULT_HEADERS_TO_SIGN
                    .iter()
                    .map(|h| h.to_string())
                    .collect(),
            ),
            timestamp: None,
            expire_seconds: DEFAULT_EXPIRE_SECONDS,
        }
    }
}

impl SignOptions {
    fn should_sign(&self, header: &str) -> bool {
        if header == AUTHORIZATION {
            return false;
        }
        let listed = match &self.headers_to_sign {
            Some(set) => set.contains(header),
            None => DEFAULT_HEADERS_TO_SIGN.contains(&header),
        };
        listed || (header.starts_with(BCE_PREFIX) && header != BCE_REQUEST_ID)
    }
}

pub trait Signer: Send + Sync + std::fmt::Debug {
    /// Adds the `authorization` header (and any header it depends on) to `req`.
    fn sign(
        &self,
        req: &mut BceRequest,
        credentials: &BceCredentials,
        options: &SignOptions,
    ) -> Result<()>;
}

/// `bce-auth-v1` canonical-request signer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BceV1Signer;

impl Signer for BceV1Signer {
    fn sign(
        &self,
        req: &mut BceRequest,
        credentials: &BceCredentials,
        options: &SignOptions,
    ) -> Result<()> {
        if let Some(token) = &credentials.session_token {
            req.set_header(BCE_SECURITY_TOKEN, token.clone());
        }

        let timestamp = options.timestamp.unwrap_or_else(Utc::now);
        let auth_string_prefix = format!(
            "{}/{}/{}/{}",
            BCE_AUTH_VERSION,
            credentials.access_key_id,
            format_iso8601(&timestamp),
            options.expire_seconds
        );
        let signing_key = hex::encode(hmac_sha256(
            credentials.secret_access_key.as_bytes(),
            auth_string_prefix.as_bytes(),
        )?);

        let canonical_uri = canonical_uri(req.uri());
        let canonical_query = canonical_query_string(req);
        let (canonical_headers, signed_headers) = canonical_headers(req, options);
        let canonical_request = format!(
            "{}\n{}\n{}\n{}",
            req.method().as_str(),
            canonical_uri,
            canonical_query,
            canonical_headers
        );
        tracing::debug!("Canonical request: {:?}", canonical_request);

        let signature = hex::encode(hmac_sha256(
            signing_key.as_bytes(),
            canonical_request.as_bytes(),
        )?);
        let authorization = format!(
            "{}/{}/{}",
            auth_string_prefix,
            signed_headers.join(";"),
            signature
        );
        tracing::debug!("Authorization: {}", authorization);

        req.set_header(AUTHORIZATION, authorization);
        Ok(())
    }
}

pub fn format_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| BceError::SigningError {
        message: e.to_string(),
    })?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn canonical_uri(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    let encoded = uri_encode(path, false);
    if encoded.starts_with('/') {
        encoded
    } else {
        format!("/{}", encoded)
    }
}

fn canonical_query_string(req: &BceRequest) -> String {
    let mut items: Vec<String> = req
        .params()
        .iter()
        .filter(|(k, _)| !k.eq_ignore_ascii_case(AUTHORIZATION))
        .map(|(k, v)| format!("{}={}", uri_encode(k, true), uri_encode(v, true)))
        .collect();
    items.sort();
    items.join("&")
}

/// Returns the canonical header block and the sorted signed header names.
fn canonical_headers(req: &BceRequest, options: &SignOptions) -> (String, Vec<String>) {
    let mut canonical = Vec::new();
    let mut signed = Vec::new();
    for (name, value) in req.headers() {
        let name = name.trim().to_ascii_lowercase();
        let value = value.trim();
        if value.is_empty() || !options.should_sign(&name) {
            continue;
        }
        canonical.push(format!(
            "{}:{}",
            uri_encode(&name, true),
            uri_encode(value, true)
        ));
        signed.push(name);
    }
    canonical.sort();
    signed.sort();
    (canonical.join("\n"), signed)
}
