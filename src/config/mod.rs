use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone)]
pub struct PlanetConfig {
    pub common: CommonConfig,
    /// Deployment environment label, reported by the `/os` endpoint.
    pub environment: String,
    pub mongodb: MongoConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Directory served for unmatched requests, including the landing page.
    pub static_root: String,
    /// Path to the OpenAPI document returned by `/api-docs`.
    pub docs_path: String,
}

fn default_port() -> u16 {
    3030
}

impl PlanetConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        // Listener settings come from the optional `configuration` file and
        // the APP__ environment prefix.
        let common = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize::<CommonConfig>()?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let is_prod = environment == "prod";

        Ok(PlanetConfig {
            common,
            environment,
            mongodb: MongoConfig {
                uri: get_env("MONGO_URI", Some("mongodb://localhost:27017"), is_prod)?,
                username: env::var("MONGO_USERNAME").ok(),
                password: env::var("MONGO_PASSWORD").ok(),
                database: get_env("MONGO_DATABASE", Some("planets_db"), is_prod)?,
            },
            content: ContentConfig {
                static_root: get_env("STATIC_ROOT", Some("public"), is_prod)?,
                docs_path: get_env("API_DOCS_PATH", Some("oas.json"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::Internal(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Internal(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
