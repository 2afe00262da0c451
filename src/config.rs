use crate::metrics::WeekStart;
use crate::storage::resolve_data_path;
use std::{env, net::SocketAddr, path::PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub week_start: WeekStart,
}

impl Config {
    pub fn from_env() -> Result<Self, std::io::Error> {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let week_start = match env::var("APP_WEEK_START") {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                warn!("{err}, using monday");
                WeekStart::default()
            }),
            Err(_) => WeekStart::default(),
        };

        Ok(Self {
            port,
            data_path: resolve_data_path()?,
            week_start,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
