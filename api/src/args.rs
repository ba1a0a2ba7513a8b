use std::path::PathBuf;

use aciiverse_core::domain::common::{AciiverseConfig, DataConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "aciiverse-api", version, about = "Aciiverse games API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DataArgs {
    #[arg(long = "data-file", env = "DATA_FILE", default_value = "data/games.json")]
    pub file: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directive.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for AciiverseConfig {
    fn from(args: Args) -> Self {
        AciiverseConfig {
            data: DataConfig {
                file_path: args.data.file,
            },
        }
    }
}
