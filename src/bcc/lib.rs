mod client;
mod config;
pub mod ids;
pub mod input;
pub mod messages;
pub mod models;
mod money;
mod outcome;
pub mod requests;
mod result;
pub mod transport;
pub mod view;

pub use client::{AccountConsoleClient, ClientError};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_CURRENCY};
pub use money::{Money, MoneyError};
pub use outcome::Outcome;
pub use result::Result;
