//! Server configuration from CLI flags and environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Runtime configuration, parsed from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "backend", about = "Hospital administration backend")]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Directory holding the JSON collection files.
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Login endpoint of the external identity service.
    #[arg(
        long,
        env = "AUTH_UPSTREAM_URL",
        default_value = "https://dummyjson.com/auth/login"
    )]
    pub auth_upstream_url: String,
}
