pub mod toml_config;

use crate::utils::error::{ReceiptError, Result};
use crate::utils::validation::{self, Validate};
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::net::SocketAddr;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const MIN_BODY_BYTES: usize = 1024;
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "receipt-processor")]
#[command(about = "Receipt validation and loyalty points service")]
pub struct ServerConfig {
    #[arg(long, env = "RECEIPTS_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "RECEIPTS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Optional TOML configuration file; explicit flags and env vars take precedence over it
    #[arg(short, long, env = "RECEIPTS_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "RECEIPTS_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    #[arg(long, env = "RECEIPTS_JSON_LOGS", help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, env = "RECEIPTS_VERBOSE", help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            config: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            json_logs: false,
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// 套用 TOML 檔中有設定的值
    pub fn apply_toml(&mut self, file: &TomlConfig) {
        if let Some(server) = &file.server {
            if let Some(host) = &server.host {
                self.host = host.clone();
            }
            if let Some(port) = server.port {
                self.port = port;
            }
            if let Some(max_body_bytes) = server.max_body_bytes {
                self.max_body_bytes = max_body_bytes;
            }
        }
        if let Some(logging) = &file.logging {
            if let Some(json) = logging.json {
                self.json_logs = json;
            }
            if let Some(verbose) = logging.verbose {
                self.verbose = verbose;
            }
        }
    }

    /// 合併順序：預設值 < TOML 檔 < 環境變數 / 命令列參數
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let cli = Self::from_arg_matches(matches).map_err(|e| ReceiptError::ConfigError {
            message: e.to_string(),
        })?;

        let Some(path) = cli.config.clone() else {
            return Ok(cli);
        };

        let file = TomlConfig::from_file(&path)?;
        file.validate()?;

        let mut config = Self {
            config: Some(path),
            ..Self::default()
        };
        config.apply_toml(&file);

        let explicit = |id: &str| {
            matches!(
                matches.value_source(id),
                Some(ValueSource::CommandLine | ValueSource::EnvVariable)
            )
        };
        if explicit("host") {
            config.host = cli.host;
        }
        if explicit("port") {
            config.port = cli.port;
        }
        if explicit("max_body_bytes") {
            config.max_body_bytes = cli.max_body_bytes;
        }
        if explicit("json_logs") {
            config.json_logs = cli.json_logs;
        }
        if explicit("verbose") {
            config.verbose = cli.verbose;
        }
        Ok(config)
    }

    pub fn try_load_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .try_get_matches_from(args)
            .map_err(|e| ReceiptError::ConfigError {
                message: e.to_string(),
            })?;
        Self::from_matches(&matches)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("server.host", &self.host, self.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.host)?;
        validation::validate_range("server.port", self.port, 1, u16::MAX)?;
        validation::validate_range(
            "server.max_body_bytes",
            self.max_body_bytes,
            MIN_BODY_BYTES,
            MAX_BODY_BYTES,
        )?;
        self.socket_addr()?;
        Ok(())
    }
}
