#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{self, Validate};

pub const DEFAULT_BACKEND_URL: &str = "https://ycjrtxkhpjqlfvjfbtcn.supabase.co";
pub const DEFAULT_TABLE: &str = "config_sites";
pub const DEFAULT_SITE_NAME: &str = "Festo";
pub const DEFAULT_SITES_ENDPOINT: &str = "http://localhost:5244/api/sites";

pub const BACKEND_URL_ENV: &str = "SUPABASE_URL";
pub const API_KEY_ENV: &str = "SUPABASE_KEY";
pub const SITES_ENDPOINT_ENV: &str = "SITES_ENDPOINT";

/// Values given explicitly on the command line. They win over everything else.
#[derive(Debug, Clone, Default)]
pub struct BackendOverrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub table: Option<String>,
    pub site_name: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
    pub site_name: String,
}

impl std::fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .field("site_name", &self.site_name)
            .finish()
    }
}

impl BackendSettings {
    /// Resolves settings with precedence CLI > environment > config file > default.
    pub fn resolve<F>(overrides: BackendOverrides, file: Option<&TomlConfig>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let section = file.and_then(TomlConfig::backend);

        let base_url = overrides
            .base_url
            .or_else(|| env(BACKEND_URL_ENV))
            .or_else(|| section.and_then(|s| s.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let api_key = overrides
            .api_key
            .or_else(|| env(API_KEY_ENV))
            .or_else(|| section.and_then(|s| s.api_key.clone()))
            .ok_or_else(|| ProbeError::MissingConfigError {
                field: "backend.api_key".to_string(),
            })?;

        let table = overrides
            .table
            .or_else(|| section.and_then(|s| s.table.clone()))
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());

        let site_name = overrides
            .site_name
            .or_else(|| section.and_then(|s| s.site_name.clone()))
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string());

        let settings = Self {
            base_url,
            api_key,
            table,
            site_name,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// `{base_url}/rest/v1/{table}`
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), self.table)
    }

    /// PostgREST equality filter on the `name` column.
    pub fn name_filter(&self) -> String {
        format!("eq.{}", self.site_name)
    }
}

impl Validate for BackendSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_resolved("backend.base_url", &self.base_url)?;
        validation::validate_url("backend.base_url", &self.base_url)?;
        validation::validate_resolved("backend.api_key", &self.api_key)?;
        validation::validate_non_empty_string("backend.api_key", &self.api_key)?;
        validation::validate_non_empty_string("backend.table", &self.table)?;
        validation::validate_non_empty_string("backend.site_name", &self.site_name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitesSettings {
    pub endpoint: String,
}

impl SitesSettings {
    pub fn resolve<F>(endpoint: Option<String>, file: Option<&TomlConfig>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = endpoint
            .or_else(|| env(SITES_ENDPOINT_ENV))
            .or_else(|| file.and_then(TomlConfig::sites).and_then(|s| s.endpoint.clone()))
            .unwrap_or_else(|| DEFAULT_SITES_ENDPOINT.to_string());

        let settings = Self { endpoint };
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for SitesSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SITES_ENDPOINT.to_string(),
        }
    }
}

impl Validate for SitesSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_resolved("sites.endpoint", &self.endpoint)?;
        validation::validate_url("sites.endpoint", &self.endpoint)
    }
}
