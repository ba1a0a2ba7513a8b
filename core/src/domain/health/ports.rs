use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::entities::{DataHealthStatus, ServiceStatus},
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn status(&self) -> impl Future<Output = Result<ServiceStatus, CoreError>> + Send;

    /// Succeeds when the backing store can be read.
    fn readiness(&self) -> impl Future<Output = Result<DataHealthStatus, CoreError>> + Send;
}
