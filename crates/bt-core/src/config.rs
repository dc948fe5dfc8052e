//! Site server configuration

use crate::content::{catalog, AssetRef};
use crate::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_VAR: &str = "BLOCKTRACE_ADDR";
pub const ASSET_DIR_VAR: &str = "BLOCKTRACE_ASSET_DIR";
pub const LOG_VAR: &str = "RUST_LOG";

pub const DEFAULT_LOG_FILTER: &str = "bt_marketing=info,bt_core=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Overrides the Leptos `site_addr` when set
    pub addr: Option<SocketAddr>,
    /// Directory served under `/images`
    pub asset_dir: PathBuf,
    /// tracing-subscriber `EnvFilter` directives
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: None,
            asset_dir: PathBuf::from("./public/images"),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SiteConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> SiteResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> SiteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let addr = match lookup(ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<SocketAddr>().map_err(|e| {
                SiteError::InvalidAddress {
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let asset_dir = lookup(ASSET_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.asset_dir);

        let log_filter = match lookup(LOG_VAR) {
            Some(filter) if filter.trim().is_empty() => {
                return Err(SiteError::Config(format!("{} must not be blank", LOG_VAR)))
            }
            Some(filter) => filter,
            None => defaults.log_filter,
        };

        Ok(Self {
            addr,
            asset_dir,
            log_filter,
        })
    }

    /// Local file backing a bundled asset, `None` for remote URLs
    pub fn asset_path(&self, asset: AssetRef) -> Option<PathBuf> {
        if !asset.is_bundled() {
            return None;
        }
        let relative = asset.as_str().trim_start_matches("/images").trim_start_matches('/');
        Some(self.asset_dir.join(relative))
    }

    /// Bundled page images with no file in the asset directory
    pub fn missing_assets(&self) -> Vec<AssetRef> {
        catalog::images()
            .filter(|asset| {
                self.asset_path(*asset)
                    .map(|path| !path.is_file())
                    .unwrap_or(false)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_asset_path_maps_bundled_images() {
        let config = SiteConfig {
            asset_dir: PathBuf::from("/srv/site/images"),
            ..Default::default()
        };
        assert_eq!(
            config.asset_path(AssetRef("/images/hero.png")),
            Some(PathBuf::from("/srv/site/images/hero.png"))
        );
        assert_eq!(config.asset_path(AssetRef("https://images.unsplash.com/photo")), None);
    }

    #[test]
    fn test_missing_assets_lists_only_bundled() {
        let config = SiteConfig {
            asset_dir: PathBuf::from("/nonexistent/blocktrace/images"),
            ..Default::default()
        };
        let missing = config.missing_assets();
        let bundled = catalog::images().filter(|a| a.is_bundled()).count();
        assert!(bundled > 0);
        assert_eq!(missing.len(), bundled);
        assert!(missing.iter().all(|a| a.is_bundled()));
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.addr.is_none());
    }

    #[test]
    fn test_reads_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (ASSET_DIR_VAR, "/srv/blocktrace/images"),
            (LOG_VAR, "bt_marketing=debug"),
        ]))
        .unwrap();

        assert_eq!(config.addr, Some("0.0.0.0:8080".parse().unwrap()));
        assert_eq!(config.asset_dir, PathBuf::from("/srv/blocktrace/images"));
        assert_eq!(config.log_filter, "bt_marketing=debug");
    }

    #[test]
    fn test_blank_addr_is_unset() {
        let config = SiteConfig::from_lookup(lookup_from(&[(ADDR_VAR, "  ")])).unwrap();
        assert!(config.addr.is_none());
    }

    #[test]
    fn test_rejects_malformed_addr() {
        let err = SiteConfig::from_lookup(lookup_from(&[(ADDR_VAR, "localhost")])).unwrap_err();
        match err {
            SiteError::InvalidAddress { value, .. } => assert_eq!(value, "localhost"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_blank_log_filter() {
        let err = SiteConfig::from_lookup(lookup_from(&[(LOG_VAR, " ")])).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}
