use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct TournamentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub chain: ChainConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

/// Endpoint and factory contract the chain layer would talk to. The current
/// provider is a mock, but the settings mirror what a real deployment reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub factory_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Origin allowed to call the API from a browser.
    pub frontend_origin: String,
}

impl TournamentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(TournamentConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("onchain_fantasy"), is_prod)?,
            },
            chain: ChainConfig {
                rpc_url: get_env("RPC_URL", Some("http://localhost:8545"), is_prod)?,
                factory_address: get_env(
                    "FACTORY_ADDRESS",
                    Some("0x0000000000000000000000000000000000000000"),
                    is_prod,
                )?,
            },
            http: HttpConfig {
                frontend_origin: get_env("FRONTEND_URL", Some("http://localhost:3000"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
