use std::path::PathBuf;

use chrono::{DateTime, Local};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct AciiverseConfig {
    pub data: DataConfig,
}

#[derive(Clone, Debug)]
pub struct DataConfig {
    /// JSON document holding the `games` collection, re-read on every request.
    pub file_path: PathBuf,
}

pub fn generate_timestamp() -> DateTime<Local> {
    Local::now()
}
