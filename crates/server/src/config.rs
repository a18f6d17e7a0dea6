//! Server settings read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `WIKILENS_ADDR` | `0.0.0.0:8000` |
//! | `DATABASE_URL` | unset: in-memory store |
//! | `WIKILENS_LANG` | `en` |
//! | `WIKILENS_CONFIG` | unset: `~/.config/wikilens/analyzer.txt` only |
//! | `WIKILENS_USERS` | unset: every login is rejected |
//! | `WIKILENS_REQUEST_TIMEOUT` | `30` seconds |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub database_url: Option<String>,
    pub language: String,
    pub analyzer_config: Option<PathBuf>,
    /// Raw `user:password` pairs, comma separated.
    pub users: Option<String>,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let addr = get("WIKILENS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr.parse().with_context(|| format!("Invalid WIKILENS_ADDR: {}", addr))?;

        let request_timeout = match get("WIKILENS_REQUEST_TIMEOUT") {
            Some(secs) => {
                secs.parse::<u64>().with_context(|| format!("Invalid WIKILENS_REQUEST_TIMEOUT: {}", secs))?
            }
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if request_timeout == 0 {
            anyhow::bail!("WIKILENS_REQUEST_TIMEOUT must be greater than zero");
        }

        Ok(Self {
            addr,
            database_url: get("DATABASE_URL"),
            language: get("WIKILENS_LANG").unwrap_or_else(|| "en".to_string()),
            analyzer_config: get("WIKILENS_CONFIG").map(PathBuf::from),
            users: get("WIKILENS_USERS"),
            request_timeout: Duration::from_secs(request_timeout),
        })
    }
}
