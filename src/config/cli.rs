use crate::config::{LogFormat, ServiceConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "brewdog-api")]
#[command(about = "An Api to receive data from the brewdog punkapi database")]
pub struct CliConfig {
    #[arg(long, env = "API_HOST", default_value = super::DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "API_PORT", default_value_t = super::DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "PUNKAPI_URL", default_value = super::DEFAULT_PUNKAPI_URL)]
    pub punkapi_url: String,

    #[arg(long, env = "BREWDOG_CONFIG", help = "TOML config file; overrides the flags above")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併 CLI 與 TOML：有指定設定檔時以檔案為準，未設定的 logging 欄位沿用 CLI
    pub fn resolve(&self) -> Result<ServiceConfig> {
        match &self.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                let log_format = toml.log_format().unwrap_or(self.log_format);
                let verbose = toml.verbose().unwrap_or(self.verbose);
                Ok(ServiceConfig {
                    log_format,
                    verbose,
                    ..toml.into_service_config()
                })
            }
            None => Ok(ServiceConfig {
                host: self.host.clone(),
                port: self.port,
                upstream_url: self.punkapi_url.clone(),
                log_format: self.log_format,
                verbose: self.verbose,
            }),
        }
    }
}
