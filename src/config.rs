use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;

use crate::data::loader::DataSource;

/// Published copy of the launch table.
pub const DEFAULT_DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

#[derive(Parser, Debug, Clone)]
#[command(name = "launch-dash")]
#[command(about = "Interactive SpaceX launch records dashboard")]
#[command(version)]
pub struct Config {
    /// CSV URL, or a local .csv / .json file
    #[arg(long, env = "LAUNCH_DASH_DATA_SOURCE", default_value = DEFAULT_DATA_URL)]
    pub data_source: String,

    /// Address to bind
    #[arg(long, env = "LAUNCH_DASH_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port for web server
    #[arg(short, long, env = "LAUNCH_DASH_PORT", default_value_t = 8050)]
    pub port: u16,

    /// Timeout for the startup dataset download, in seconds
    #[arg(long, env = "LAUNCH_DASH_FETCH_TIMEOUT", default_value_t = 30)]
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn source(&self) -> DataSource {
        DataSource::parse(&self.data_source)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
