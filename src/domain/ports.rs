use crate::core::request::BceRequest;
use crate::core::response::BceResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can sign and send a [`BceRequest`].
///
/// Failed HTTP statuses are returned as a response (check
/// [`BceResponse::is_fail`]); only transport problems are errors.
#[async_trait]
pub trait Client: Send + Sync {
    async fn send_request(&self, req: BceRequest) -> Result<BceResponse>;
}
