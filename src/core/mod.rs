pub mod builder;
pub mod client;
pub mod request;
pub mod response;
pub mod retry;

pub use crate::domain::ports::Client;
pub use crate::utils::error::Result;
pub use builder::RequestBuilder;
pub use client::BceClient;
pub use request::{BceRequest, Body};
pub use response::BceResponse;
pub use retry::{BackOffRetryPolicy, NoRetryPolicy, RetryPolicy};
