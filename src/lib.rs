pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod tracing;
pub mod ui;

pub use config::SiteConfig;
pub use error::{LoadError, Result};
pub use search::{SearchSession, TeaserExtractor, extract_teaser};
