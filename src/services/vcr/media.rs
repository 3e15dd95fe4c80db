use super::model::*;
use super::{VcrClient, URI_MEDIA, URI_PREFIX};
use crate::core::builder::RequestBuilder;
use crate::utils::error::Result;
use crate::utils::validation::require_argument;
use reqwest::Method;
use tracing::debug;

impl VcrClient {
    /// 提交媒體審核工作，結果需透過 [`VcrClient::get_media`] 查詢
    pub async fn put_media(&self, args: &PutMediaArgs) -> Result<()> {
        require_argument("source", &args.source)?;
        debug!("🎬 Submitting media {}", args.source);
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", URI_PREFIX, URI_MEDIA))
            .with_method(Method::PUT)
            .with_body(args)
            .execute()
            .await
    }

    pub async fn get_media(&self, source: &str) -> Result<GetMediaResult> {
        require_argument("source", source)?;
        RequestBuilder::new(&self.client)
            .with_url(format!("{}{}", URI_PREFIX, URI_MEDIA))
            .with_method(Method::GET)
            .with_query_param("source", source)
            .fetch()
            .await
    }
}
