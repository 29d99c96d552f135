//! Configuration loading and management for the voucher engine.
//!
//! This module loads the service configuration (listen address, national
//! holidays, default alternating-Saturday policy) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use vt_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("National holidays: {:?}", config.national_holidays());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{CalendarConfig, EngineConfig, ServerConfig};
