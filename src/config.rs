use std::env;

use crate::errors::AppError;

const DEFAULT_PORT: u16 = 8787;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub crm_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a valid port number, got {raw:?}")))?,
            None => DEFAULT_PORT,
        };

        let crm_base_url = lookup("CRM_BASE_URL")
            .or_else(|| lookup("LEADCONNECTOR_URL"))
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::Config("CRM_BASE_URL must be set".to_string()))?;

        if !crm_base_url.starts_with("http://") && !crm_base_url.starts_with("https://") {
            return Err(AppError::Config(
                "CRM_BASE_URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(Self { port, crm_base_url })
    }
}
