//! Layered settings: defaults → TOML file → `BS_CALC_*` environment → flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bytesize::Unit;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::{Args, parse_output_unit};

/// Prefix of every environment variable the calculator reads.
pub const ENV_PREFIX: &str = "BS_CALC_";

/// Output format of diagnostic logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human-readable events.
    #[default]
    Compact,
    /// Multi-line human-readable events.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Effective configuration of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Decimal places in non-integral output.
    pub places: u32,
    /// Unit to show results in; `None` prints every binary unit.
    pub unit: Option<String>,
    /// `tracing` filter directive, e.g. `debug` or `bytesize=trace`.
    pub log: Option<String>,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            places: 2,
            unit: None,
            log: None,
            log_format: LogFormat::Compact,
        }
    }
}

/// Values given on the command line; unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct FlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    places: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl From<&Args> for FlagOverrides {
    fn from(args: &Args) -> Self {
        Self {
            places: args.places,
            unit: args.selected_unit().map(|unit| unit.name().to_string()),
        }
    }
}

impl Settings {
    /// Resolve settings for the given arguments.
    pub fn load(args: &Args) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) if !path.is_file() => {
                bail!("configuration file {} does not exist", path.display());
            }
            Some(path) => Some(path.clone()),
            None => default_config_path(),
        };
        let settings: Self = Self::figment(config_file.as_deref(), args)
            .extract()
            .context("invalid configuration")?;
        settings.unit()?;
        Ok(settings)
    }

    fn figment(config_file: Option<&Path>, args: &Args) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
            .merge(Serialized::defaults(FlagOverrides::from(args)))
    }

    /// The configured output unit, validated.
    pub fn unit(&self) -> Result<Option<Unit>> {
        self.unit
            .as_deref()
            .map(parse_output_unit)
            .transpose()
            .map_err(anyhow::Error::msg)
            .context("invalid `unit` setting")
    }
}

/// `$XDG_CONFIG_HOME/bs-calc/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bs-calc").join("config.toml"))
}
