use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub checked_at: DateTime<Local>,
}

impl ServiceStatus {
    pub fn message(&self) -> String {
        format!(
            "Service alive! Time: {}",
            self.checked_at.format("%d.%m.%Y, %H:%M:%S")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DataHealthStatus {
    pub games: usize,
}
