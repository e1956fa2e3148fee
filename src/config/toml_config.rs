use crate::utils::error::{ProbeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional config file shared by both binaries.
///
/// ```toml
/// [backend]
/// base_url = "${SUPABASE_URL}"
/// api_key = "${SUPABASE_KEY}"
/// table = "config_sites"
/// site_name = "Festo"
///
/// [sites]
/// endpoint = "http://localhost:5244/api/sites"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub backend: Option<BackendSection>,
    pub sites: Option<SitesSection>,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct BackendSection {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub table: Option<String>,
    pub site_name: Option<String>,
}

impl std::fmt::Debug for BackendSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSection")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("table", &self.table)
            .field("site_name", &self.site_name)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitesSection {
    pub endpoint: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML, substituting `${VAR}` from the process environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = substitute_env_vars(content, lookup)?;
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn backend(&self) -> Option<&BackendSection> {
        self.backend.as_ref()
    }

    pub fn sites(&self) -> Option<&SitesSection> {
        self.sites.as_ref()
    }
}

/// Replaces `${VAR}` placeholders; unknown variables are left as-is.
fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProbeError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}
