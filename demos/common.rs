//! Settings shared by the demo binaries, read from the environment.

#![allow(dead_code)]

use std::io;

use hilink::{Credentials, DEFAULT_BASE_URL, HiLinkClient};
use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

/// `HILINK_URL` (default `http://192.168.8.1`).
pub fn device_client() -> Result<HiLinkClient, hilink::HiLinkError> {
    let url = std::env::var("HILINK_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
    HiLinkClient::new(url)
}

/// `HILINK_USERNAME` (default `admin`) and `HILINK_PASSWORD` (default `admin`).
pub fn credentials() -> Result<Credentials, hilink::ValidationError> {
    let username = std::env::var("HILINK_USERNAME").unwrap_or_else(|_| "admin".to_owned());
    let password = std::env::var("HILINK_PASSWORD").unwrap_or_else(|_| "admin".to_owned());
    Credentials::new(username, password)
}
