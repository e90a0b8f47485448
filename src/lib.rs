pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::PunkApiClient;
pub use config::{ServiceConfig, TomlConfig};
pub use core::{BeerCatalog, BeerSource};
pub use utils::error::{BeerError, Result};
