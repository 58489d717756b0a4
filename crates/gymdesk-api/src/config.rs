use std::env;
use std::net::SocketAddr;

use jiff::tz::TimeZone;

const DEFAULT_BUCKET: &str = "gymdesk";
const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Service configuration. Environment-only, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `GYMDESK_BUCKET`
    pub bucket: String,
    /// `GYMDESK_TIMEZONE`, an IANA zone name.
    pub timezone: TimeZone,
    pub timezone_name: String,
    /// `GYMDESK_BIND_ADDR`. When set, serve on a local listener instead of
    /// the Lambda runtime.
    pub bind_addr: Option<SocketAddr>,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bucket = lookup("GYMDESK_BUCKET")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BUCKET.to_string());

        let timezone_name = lookup("GYMDESK_TIMEZONE")
            .filter(|tz| !tz.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone = TimeZone::get(&timezone_name)
            .map_err(|e| eyre::eyre!("invalid GYMDESK_TIMEZONE {timezone_name:?}: {e}"))?;

        let bind_addr = match lookup("GYMDESK_BIND_ADDR").filter(|a| !a.trim().is_empty()) {
            Some(raw) => Some(
                raw.parse()
                    .map_err(|e| eyre::eyre!("invalid GYMDESK_BIND_ADDR {raw:?}: {e}"))?,
            ),
            None => None,
        };

        Ok(Self {
            bucket,
            timezone,
            timezone_name,
            bind_addr,
        })
    }
}
