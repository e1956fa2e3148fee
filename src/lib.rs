pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{ConfigFetcherArgs, SiteListerArgs};

pub use config::{BackendSettings, SitesSettings};
pub use core::{
    config_fetcher::ConfigFetcher,
    runner::{ErrorPolicy, ProbeRunner},
    site_lister::SiteLister,
};
pub use domain::model::{Report, SiteRecord};
pub use utils::error::{ProbeError, Result};
