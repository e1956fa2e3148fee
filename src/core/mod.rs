pub mod config_fetcher;
pub mod runner;
pub mod site_lister;

pub use crate::domain::model::{Report, SiteRecord};
pub use crate::domain::ports::Probe;
pub use crate::utils::error::Result;
