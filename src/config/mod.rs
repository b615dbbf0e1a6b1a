use crate::errors::{AppError, AppResult};
use crate::models::{Port, Status};
use crate::ui::labels::{LabelOverrides, Labels, Language};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub default_port: Port,
    pub default_status: Status,
    /// Report an empty container number as an error instead of a no-op.
    pub strict_validation: bool,
    pub confirm_delete: bool,
    pub comment_width: usize,
    pub separator_char: String,
    #[serde(skip_serializing_if = "LabelOverrides::is_empty")]
    pub labels: LabelOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::En,
            default_port: Port::Alesund,
            default_status: Status::Empty,
            strict_validation: false,
            confirm_delete: true,
            comment_width: 40,
            separator_char: "-".to_string(),
            labels: LabelOverrides::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcontainerlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rcontainerlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcontainerlog.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default configuration file. Returns its path.
    pub fn init_all(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(&path, Config::default().to_yaml()?)?;
        Ok(path)
    }

    pub fn labels(&self) -> Labels {
        Labels::for_language(self.language).with_overrides(&self.labels)
    }

    /// First character of `separator_char`, '-' when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg = Config::parse("language: hr\nstrict_validation: true\n").unwrap();
        assert_eq!(cfg.language, Language::Hr);
        assert!(cfg.strict_validation);
        assert!(cfg.confirm_delete);
        assert_eq!(cfg.comment_width, 40);
        assert_eq!(cfg.labels().port, "Luka");
    }

    #[test]
    fn enum_fields_use_display_labels() {
        let cfg = Config::parse("default_port: Førde\ndefault_status: Ikke ADR\n").unwrap();
        assert_eq!(cfg.default_port, Port::Forde);
        assert_eq!(cfg.default_status, Status::NotAdr);

        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("default_port: Ålesund"));
        assert!(!yaml.contains("labels"));
    }

    #[test]
    fn unknown_port_is_a_config_error() {
        assert!(Config::parse("default_port: Bergen\n").is_err());
    }

    #[test]
    fn label_overrides_are_applied() {
        let cfg = Config::parse("labels:\n  comment: Notes\n").unwrap();
        assert_eq!(cfg.labels().comment, "Notes");
        assert_eq!(cfg.labels().date, "Date");
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::parse("  \n").unwrap(), Config::default());
    }
}
