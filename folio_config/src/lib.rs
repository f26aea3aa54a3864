use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::pagination::{PageQueryParam, PaginationLimit};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding additional config files, separated like `PATH`.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Load the default config, followed by the files listed in [`CONFIG_PATH_ENV`].
///
/// Files later in the list override values of earlier ones.
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(extra) = std::env::var_os(CONFIG_PATH_ENV) {
        paths.extend(std::env::split_paths(&extra));
    }
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Same as [`load_paths`], additionally applying the given TOML snippets on top.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub backend: BackendConfig,
    pub pagination: PaginationConfig,
    pub listing: ListingConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    pub url: Url,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct PaginationConfig {
    #[serde(default)]
    pub page_param: PageQueryParam,
    #[serde(default)]
    pub per_page: PaginationLimit,
}

#[derive(Debug, Deserialize)]
pub struct ListingConfig {
    pub news_url: String,
    pub portfolio_url: String,
    pub bookmarks_url: String,
    /// Where to send visitors when a list cannot be fetched
    pub error_redirect_url: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(&**config.pagination.page_param, "page");
        assert_eq!(config.listing.news_url, "/news");
    }

    #[test]
    fn override_values() {
        let config = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &[
                "pagination.per_page = 24",
                "[backend]\ntimeout = \"1m 30s\"",
            ],
        )
        .unwrap();
        assert_eq!(*config.pagination.per_page, 24);
        assert_eq!(config.backend.timeout.as_secs(), 90);
    }

    #[test]
    fn invalid_page_param() {
        let result = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &["pagination.page_param = \"page?\""],
        );
        assert!(result.is_err());
    }
}
