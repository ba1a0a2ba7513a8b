pub mod client;
pub mod error;
pub mod query_builder;
pub mod session;

pub use client::{AciiverseClient, ClientResult, ResponseMeta};
pub use error::ClientError;
pub use query_builder::GetOptions;
