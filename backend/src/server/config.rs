//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USERDIR_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8000;

/// Errors raised while turning settings into a bind address.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ServerSettingsError {
    /// The configured host is not an IP address.
    #[error("invalid host '{value}'; expected an IPv4 or IPv6 address")]
    InvalidHost { value: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERDIR")]
pub struct ServerSettings {
    /// Interface address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Start with an empty directory instead of the two sample users.
    #[ortho_config(default = false)]
    pub no_seed_users: bool,
}

impl ServerSettings {
    /// Whether the directory starts with Alice and Bob.
    pub fn seed_users(&self) -> bool {
        !self.no_seed_users
    }

    /// Configured port, falling back to 8000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address the listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerSettingsError> {
        let host = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ServerSettingsError::InvalidHost {
                    value: raw.to_owned(),
                })?,
        };
        Ok(SocketAddr::new(host, self.port()))
    }
}
