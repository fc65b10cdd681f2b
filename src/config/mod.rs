//! Configuration loading and management for the payroll engine.
//!
//! Shop metadata and effective-dated rate settings are loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use detailing_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/detailing").unwrap();
//! println!("Loaded shop: {}", config.shop().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{SettingsVersion, ShopConfig, ShopMetadata};
