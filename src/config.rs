use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Reads `PORT`, `HOST` and `INSIGHT_SEED` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or_default("PORT", lookup("PORT"), DEFAULT_PORT);
        let host = parse_or_default("HOST", lookup("HOST"), DEFAULT_HOST);
        let seed = lookup("INSIGHT_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                warn!("ignoring INSIGHT_SEED={raw:?}: {err}");
                None
            }
        });

        Self {
            addr: SocketAddr::new(host, port),
            seed,
        }
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(err) => {
            warn!("invalid {key}={raw:?} ({err}), using {default}");
            default
        }
    }
}
