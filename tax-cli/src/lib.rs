pub mod app;
pub mod config;
pub mod format;
pub mod logging;
pub mod reference;

pub use app::{App, Cli, Command, IncomeArgs};
pub use config::{AppConfig, ConfigError};
