use log::warn;
use std::path::PathBuf;

const K_FACTOR_ENV: &str = "ELO_K_FACTOR";
const DEFAULT_RATING_ENV: &str = "ELO_DEFAULT_RATING";
const DATA_PATH_ENV: &str = "DATA_FILE_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct RatingSettings {
    pub k_factor: f64,
    pub default_rating: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            default_rating: 1500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoaderSettings {
    pub data_path: PathBuf,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 500,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub loader: LoaderSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `ELO_K_FACTOR`, `ELO_DEFAULT_RATING` and `DATA_FILE_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(k) = parse_var(&lookup, K_FACTOR_ENV) {
            config.rating.k_factor = k;
        }
        if let Some(rating) = parse_var(&lookup, DEFAULT_RATING_ENV) {
            config.rating.default_rating = rating;
        }
        if let Some(path) = lookup(DATA_PATH_ENV).filter(|p| !p.is_empty()) {
            config.loader.data_path = PathBuf::from(path);
        }

        config
    }

    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.loader.data_path = path;
        }
        self
    }

    pub fn with_k_factor(mut self, k_factor: Option<f64>) -> Self {
        if let Some(k) = k_factor.and_then(|k| finite("--k-factor", k)) {
            self.rating.k_factor = k;
        }
        self
    }

    pub fn with_default_rating(mut self, rating: Option<f64>) -> Self {
        if let Some(rating) = rating.and_then(|r| finite("--default-rating", r)) {
            self.rating.default_rating = rating;
        }
        self
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => finite(key, value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}

/// Rejects NaN and infinities.
fn finite(source: &str, value: f64) -> Option<f64> {
    if value.is_finite() {
        Some(value)
    } else {
        warn!("Ignoring {}={}: not a finite number", source, value);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.rating.k_factor, 32.0);
        assert_eq!(config.rating.default_rating, 1500.0);
        assert_eq!(config.loader.data_path, PathBuf::from("data.json"));
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ELO_K_FACTOR", "16"),
            ("ELO_DEFAULT_RATING", "1200.5"),
            ("DATA_FILE_PATH", "/tmp/battles.json"),
        ]));

        assert_eq!(config.rating.k_factor, 16.0);
        assert_eq!(config.rating.default_rating, 1200.5);
        assert_eq!(config.loader.data_path, PathBuf::from("/tmp/battles.json"));
    }

    #[test]
    fn test_invalid_env_value_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("ELO_K_FACTOR", "fast")]));
        assert_eq!(config.rating.k_factor, 32.0);
    }

    #[test]
    fn test_non_finite_env_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ELO_K_FACTOR", "inf"),
            ("ELO_DEFAULT_RATING", "NaN"),
        ]));

        assert_eq!(config.rating.k_factor, 32.0);
        assert_eq!(config.rating.default_rating, 1500.0);
    }

    #[test]
    fn test_non_finite_cli_values_are_ignored() {
        let config = AppConfig::new()
            .with_k_factor(Some(f64::INFINITY))
            .with_default_rating(Some(f64::NAN));

        assert_eq!(config.rating.k_factor, 32.0);
        assert_eq!(config.rating.default_rating, 1500.0);
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = AppConfig::from_lookup(lookup_from(&[("ELO_K_FACTOR", "16")]))
            .with_k_factor(Some(24.0))
            .with_default_rating(None)
            .with_data_path(Some(PathBuf::from("other.json")));

        assert_eq!(config.rating.k_factor, 24.0);
        assert_eq!(config.rating.default_rating, 1500.0);
        assert_eq!(config.loader.data_path, PathBuf::from("other.json"));
    }
}
