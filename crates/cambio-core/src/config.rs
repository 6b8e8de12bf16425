use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::conversion::DOLLAR_RATE;

/// Global configuration loaded from `~/.config/cambio/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CambioConfig {
    /// Reais per dollar used when no `--rate` is given.
    #[serde(default = "default_dollar_rate")]
    pub dollar_rate: f64,
    /// URL used by `cambio demo` instead of the built-in reference URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_url: Option<String>,
}

fn default_dollar_rate() -> f64 {
    DOLLAR_RATE
}

impl Default for CambioConfig {
    fn default() -> Self {
        Self {
            dollar_rate: DOLLAR_RATE,
            default_url: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cambio")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CambioConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CambioConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CambioConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CambioConfig::default();
        assert_eq!(cfg.dollar_rate, 5.50);
        assert!(cfg.default_url.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CambioConfig {
            dollar_rate: 4.9,
            default_url: Some("https://bytebank.com.br/cambio?quantidade=1".to_string()),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CambioConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: CambioConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, CambioConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            dollar_rate = 5.25
            default_url = "www.bytebank.com/cambio?quantidade=3&moedaOrigem=real&moedaDestino=dolar"
            unknown_key = true
        "#;
        let cfg: CambioConfig = toml::from_str(toml).unwrap();
        assert!((cfg.dollar_rate - 5.25).abs() < 1e-9);
        assert_eq!(
            cfg.default_url.as_deref(),
            Some("www.bytebank.com/cambio?quantidade=3&moedaOrigem=real&moedaDestino=dolar")
        );
    }

    #[test]
    fn config_toml_rejects_wrong_type() {
        assert!(toml::from_str::<CambioConfig>("dollar_rate = \"cinco\"").is_err());
    }
}
