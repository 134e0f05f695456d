//! Server configuration
//!
//! Every setting can come from a command-line flag or its environment
//! variable, so containers can be configured without arguments.

use crate::store::StoreKind;
use clap::Args;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// How long in-flight requests get to finish after a shutdown signal
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Settings of the HTTP server
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Web server listen port
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Enable debugging and disable caching
    #[arg(long, env = "DEBUG")]
    pub debug: bool,

    /// What kind of database to use
    #[arg(long, env = "DB_TYPE", value_enum, default_value_t = StoreKind::Noop)]
    pub db_type: StoreKind,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 8080,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            debug: false,
            db_type: StoreKind::Noop,
        }
    }
}
