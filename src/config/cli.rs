use crate::config::toml_config::TomlConfig;
use crate::config::{BackendOverrides, BackendSettings, SitesSettings};
use crate::utils::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "get-config")]
#[command(about = "Fetch a named site configuration record from the backend")]
pub struct ConfigFetcherArgs {
    /// Backend base URL (env: SUPABASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Backend API key (env: SUPABASE_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Table queried under /rest/v1
    #[arg(long)]
    pub table: Option<String>,

    /// Value matched against the `name` column
    #[arg(long)]
    pub name: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigFetcherArgs {
    pub fn settings(&self) -> Result<BackendSettings> {
        let file = load_file(self.config.as_deref())?;
        let overrides = BackendOverrides {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            table: self.table.clone(),
            site_name: self.name.clone(),
        };
        BackendSettings::resolve(overrides, file.as_ref(), |name| std::env::var(name).ok())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "list-sites")]
#[command(about = "List the sites exposed by the local site service")]
pub struct SiteListerArgs {
    /// Sites listing URL (env: SITES_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SiteListerArgs {
    pub fn settings(&self) -> Result<SitesSettings> {
        let file = load_file(self.config.as_deref())?;
        SitesSettings::resolve(self.endpoint.clone(), file.as_ref(), |name| {
            std::env::var(name).ok()
        })
    }
}

fn load_file(path: Option<&Path>) -> Result<Option<TomlConfig>> {
    match path {
        Some(path) => {
            tracing::debug!("Loading configuration from: {}", path.display());
            TomlConfig::from_file(path).map(Some)
        }
        None => Ok(None),
    }
}
