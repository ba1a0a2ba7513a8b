pub mod codec;
pub mod compare;
pub mod filter;
pub mod order;
pub mod pipeline;
pub mod projection;
pub mod value_objects;

pub use codec::{QueryParamsExt, QueryParamsOptions};
pub use value_objects::*;
