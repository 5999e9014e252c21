//! Render configuration from environment variables
//!
//! - `SITE_OUTPUT_DIR`: directory receiving `index.html` (default: `dist`)
//! - `SITE_YEAR`: copyright year override (default: current year)
//! - `SITE_EMIT_JSON`: also write `page.json` (`1`/`true`/`yes`, default: off)

use std::path::PathBuf;

use crate::error::{Result, SiteError};

pub const DEFAULT_OUTPUT_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    pub year: Option<i32>,
    pub emit_json: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            year: None,
            emit_json: false,
        }
    }
}

impl RenderConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_dir = lookup("SITE_OUTPUT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let year = match lookup("SITE_YEAR") {
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| SiteError::Config {
                key: "SITE_YEAR",
                value: raw.clone(),
            })?),
            None => None,
        };

        let emit_json = match lookup("SITE_EMIT_JSON") {
            Some(raw) => parse_flag(&raw).ok_or(SiteError::Config {
                key: "SITE_EMIT_JSON",
                value: raw,
            })?,
            None => false,
        };

        Ok(Self { output_dir, year, emit_json })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
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
    fn test_defaults() {
        let config = RenderConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_overrides() {
        let config = RenderConfig::from_lookup(lookup_from(&[
            ("SITE_OUTPUT_DIR", "public"),
            ("SITE_YEAR", "2025"),
            ("SITE_EMIT_JSON", "yes"),
        ]))
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.year, Some(2025));
        assert!(config.emit_json);
    }

    #[test]
    fn test_invalid_year() {
        let err = RenderConfig::from_lookup(lookup_from(&[("SITE_YEAR", "next")])).unwrap_err();
        assert!(matches!(err, SiteError::Config { key: "SITE_YEAR", .. }));
    }

    #[test]
    fn test_invalid_flag() {
        let err = RenderConfig::from_lookup(lookup_from(&[("SITE_EMIT_JSON", "maybe")])).unwrap_err();
        assert!(matches!(err, SiteError::Config { key: "SITE_EMIT_JSON", .. }));
    }
}
