use crate::args::Args;

use std::time::Duration;

use bcc::{ClientConfig, Result};

use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

pub fn client_config(args: &Args) -> ClientConfig {
    return ClientConfig::new(args.api_url.clone())
        .with_timeout(args.timeout_secs.map(Duration::from_secs))
        .with_currency(args.currency.clone());
}
