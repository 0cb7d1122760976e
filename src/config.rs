// SPDX-License-Identifier: MIT
//
// Configuration file support.
//
// An optional TOML file supplies default rule parameters, the log level,
// and extra theme keywords. Looked up at:
//
//   --config PATH                          (must exist)
//   <config dir>/huekit/config.toml        (used only if present)
//
// The config dir is the platform one: $XDG_CONFIG_HOME or ~/.config on
// Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows.
//
// Command-line flags always override file defaults.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use huekit_color::{ColorError, Rgb};
use huekit_palette::{PaletteError, RuleParams};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Application name used for the config directory.
const APP_NAME: &str = "huekit";

/// Default config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid [defaults] in config: {0}")]
    InvalidDefaults(#[source] PaletteError),

    #[error("theme '{name}' in config has an invalid base color: {source}")]
    InvalidTheme {
        name: String,
        #[source]
        source: ColorError,
    },
}

/// The standard config file location, `<config dir>/huekit/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

// ─── Config ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    /// Rule parameter defaults, overridden by command-line flags.
    pub defaults: RuleParams,
    /// User theme keywords, consulted before the builtins.
    pub themes: BTreeMap<String, ThemeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeEntry {
    pub base: String,
    #[serde(default)]
    pub description: String,
}

impl Config {
    /// Load from an explicit path, or from the default location if a file
    /// exists there. No file at the default location yields defaults.
    ///
    /// # Errors
    ///
    /// Read failures on an explicit path, TOML syntax or schema errors,
    /// out-of-range `[defaults]`, and theme bases that are not valid hex.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        Self::from_file(&path)
    }

    /// Read and parse a specific file.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading config from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.defaults.validate().map_err(ConfigError::InvalidDefaults)?;
        for (name, entry) in &self.themes {
            Rgb::from_hex(&entry.base).map_err(|source| ConfigError::InvalidTheme {
                name: name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Look up a user theme keyword (case-insensitive).
    #[must_use]
    pub fn theme(&self, name: &str) -> Option<(Rgb, &str)> {
        let lower = name.trim().to_ascii_lowercase();
        self.themes
            .iter()
            .find(|(key, _)| key.to_ascii_lowercase() == lower)
            .and_then(|(_, entry)| {
                Rgb::from_hex(&entry.base)
                    .ok()
                    .map(|rgb| (rgb, entry.description.as_str()))
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use huekit_palette::{Style, Temperature};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn parse(text: &str) -> Config {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn empty_is_default() {
        let c = parse("");
        assert_eq!(c.logging.level, "warn");
        assert_eq!(c.defaults, RuleParams::default());
        assert!(c.themes.is_empty());
    }

    #[test]
    fn full_file() {
        let c = parse(
            r##"
            [logging]
            level = "debug"

            [defaults]
            vibrancy = 0.8
            angle = 25.0
            num_variations = 7
            temperature = "cool"
            style = "quiet"

            [themes.brand]
            base = "#336699"
            description = "House colors."
            "##,
        );
        assert_eq!(c.logging.level, "debug");
        assert_eq!(c.defaults.vibrancy, Some(0.8));
        assert_eq!(c.defaults.angle, Some(25.0));
        assert_eq!(c.defaults.num_variations, Some(7));
        assert_eq!(c.defaults.temperature, Some(Temperature::Cool));
        assert_eq!(c.defaults.style, Some(Style::Quiet));
        let (rgb, description) = c.theme("Brand").unwrap();
        assert_eq!(rgb, Rgb::new(0x33, 0x66, 0x99));
        assert_eq!(description, "House colors.");
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<Config>("[defaults]\nshade = 1\n").is_err());
        assert!(toml::from_str::<Config>("colour = 'red'\n").is_err());
    }

    #[test]
    fn bad_enum_value_rejected() {
        assert!(toml::from_str::<Config>("[defaults]\nstyle = \"mild\"\n").is_err());
    }

    #[test]
    fn from_file_reads_and_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[themes.sea]\nbase = \"1e90ff\"").unwrap();
        let c = Config::from_file(file.path()).unwrap();
        assert_eq!(c.theme("sea").unwrap().0, Rgb::new(0x1E, 0x90, 0xFF));
    }

    #[test]
    fn invalid_theme_base_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[themes.mud]\nbase = \"brown\"").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTheme { ref name, .. } if name == "mud"), "{err}");
    }

    #[test]
    fn non_finite_defaults_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nvibrancy = nan").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidDefaults(PaletteError::InvalidParameter { name: "vibrancy", .. })),
            "{err}"
        );
    }

    #[test]
    fn oversized_variation_default_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nnum_variations = 5000").unwrap();
        assert!(matches!(Config::from_file(file.path()), Err(ConfigError::InvalidDefaults(_))));
    }

    #[test]
    fn default_path_ends_in_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("huekit/config.toml"), "{}", path.display());
        }
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn syntax_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
