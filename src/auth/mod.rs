pub mod credentials;
pub mod signer;

pub use credentials::BceCredentials;
pub use signer::{BceV1Signer, SignOptions, Signer};
