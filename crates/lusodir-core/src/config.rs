//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Typed sections (`search`, `server`, `logging`) fall back to their defaults
//! when absent. Path helpers expand `~` and `${VAR}` and resolve relative
//! paths against a known base directory.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Limits and thresholds applied by the search pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub min_query_len: usize,
    pub default_radius_km: f64,
    pub max_radius_km: f64,
    pub default_limit: usize,
    pub max_limit: usize,
    /// Requests slower than this are reported to the logger.
    pub slow_query_ms: u64,
    /// Requests faster than this report `cache_used = true`.
    pub cache_hint_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            default_radius_km: 50.0,
            max_radius_km: 200.0,
            default_limit: 20,
            max_limit: 50,
            slow_query_ms: 300,
            cache_hint_ms: 100,
        }
    }
}

impl SearchSettings {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.max_limit == 0 {
            return Err(Error::InvalidConfig("search.max_limit must be at least 1".into()));
        }
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(Error::InvalidConfig(format!(
                "search.default_limit must be within 1..={}",
                self.max_limit
            )));
        }
        if !(self.max_radius_km.is_finite() && self.max_radius_km >= 0.0) {
            return Err(Error::InvalidConfig("search.max_radius_km must be a non-negative number".into()));
        }
        if !(0.0..=self.max_radius_km).contains(&self.default_radius_km) {
            return Err(Error::InvalidConfig(format!(
                "search.default_radius_km must be within 0..={}",
                self.max_radius_km
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub catalog_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            catalog_path: "data/businesses.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from(Path::new("."), &env_name)
    }

    /// Load `config.toml` and the env-specific overlay from `dir`.
    pub fn load_from(dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::file(dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, base_dir: dir.to_path_buf() };
        config.validate_for_env(env_name)?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Like `get`, but an absent section yields `T::default()`.
    pub fn section<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if self.figment.find_value(key).is_ok() { self.get(key) } else { Ok(T::default()) }
    }

    pub fn search(&self) -> anyhow::Result<SearchSettings> {
        self.section("search")
    }

    pub fn server(&self) -> anyhow::Result<ServerSettings> {
        self.section("server")
    }

    pub fn logging(&self) -> anyhow::Result<LoggingSettings> {
        self.section("logging")
    }

    /// Catalog fixture path, resolved against the directory the config was loaded from.
    pub fn catalog_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_with_base(&self.base_dir, self.server()?.catalog_path))
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        self.search()?.validate()?;
        if matches!(env, "prod" | "production") && self.logging()?.level.eq_ignore_ascii_case("trace") {
            return Err(Error::InvalidConfig("trace logging is not allowed in production".into()).into());
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    // Expand env vars first
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    // Expand ~ at start
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
