pub mod get_readiness;
pub mod get_status;
