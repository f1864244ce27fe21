use chrono::Utc;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file pixiu keeps in the project directory.
pub const CONFIG_FILE: &str = "pixiu.toml";

/// Project configuration loaded from and saved to pixiu.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project: ProjectSection,
    #[serde(default)]
    pub database: BTreeMap<String, DatabaseProfile>,
    #[serde(default)]
    pub deployment: BTreeMap<String, DeploymentTarget>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    pub initialized: String,
    pub platform: Platform,
}

/// A named database profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseProfile {
    pub engine: String,
}

/// A named deployment environment, referencing a database profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentTarget {
    pub database: String,
}

/// Project templates pixiu can scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    October,
    Django,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::October => "october",
            Platform::Django => "django",
        }
    }

    /// Dependency manager used by projects on this platform
    pub fn installer(&self) -> &'static str {
        match self {
            Platform::October => "composer",
            Platform::Django => "pip",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from reading, writing or querying the project configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no {} found in {}; run `pixiu --init <platform>` to scaffold a project", CONFIG_FILE, .dir.display())]
    Missing { dir: PathBuf },

    #[error("{} is not a valid pixiu configuration", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown deployment environment '{name}' (configured: {known})")]
    UnknownEnvironment { name: String, known: String },

    #[error("failed to serialize the project configuration")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProjectConfig {
    /// Path of the configuration file inside a project directory
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load the configuration from `dir`, if one exists.
    ///
    /// A missing file is not an error (`Ok(None)`); callers decide whether
    /// absence is fatal. A file that exists but does not parse always is.
    pub fn load(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = Self::path_in(dir);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        let config =
            toml::from_str(&raw).map_err(|source| ConfigError::Malformed { path, source })?;
        Ok(Some(config))
    }

    /// Load the configuration from `dir`, failing when there is none.
    pub fn load_required(dir: &Path) -> Result<Self, ConfigError> {
        Self::load(dir)?.ok_or_else(|| ConfigError::Missing {
            dir: dir.to_path_buf(),
        })
    }

    /// Build a fresh default configuration for `platform`, named after `dir`.
    ///
    /// Does not touch disk; call [`save`](Self::save) to write it out.
    pub fn bootstrap(platform: Platform, dir: &Path) -> Self {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string());

        let mut database = BTreeMap::new();
        database.insert(
            "localhost".to_string(),
            DatabaseProfile {
                engine: "sqlite".to_string(),
            },
        );

        let mut deployment = BTreeMap::new();
        deployment.insert(
            "test_localhost".to_string(),
            DeploymentTarget {
                database: "localhost".to_string(),
            },
        );

        Self {
            project: ProjectSection {
                name,
                initialized: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                platform,
            },
            database,
            deployment,
        }
    }

    /// Serialize the configuration and overwrite `dir`'s pixiu.toml in full.
    pub fn save(&self, dir: &Path) -> Result<(), ConfigError> {
        let path = Self::path_in(dir);
        let raw = toml::to_string_pretty(self)?;
        fs::write(&path, raw).map_err(|source| ConfigError::Io { path, source })?;
        Ok(())
    }

    /// Project name recorded at init time
    pub fn name(&self) -> &str {
        &self.project.name
    }

    /// Names of the configured deployment environments, in stable order
    pub fn environments(&self) -> Vec<&str> {
        self.deployment.keys().map(String::as_str).collect()
    }

    /// Look up a deployment environment by name.
    pub fn deployment(&self, name: &str) -> Result<&DeploymentTarget, ConfigError> {
        self.deployment
            .get(name)
            .ok_or_else(|| ConfigError::UnknownEnvironment {
                name: name.to_string(),
                known: if self.deployment.is_empty() {
                    "none".to_string()
                } else {
                    self.environments().join(", ")
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_returns_none_without_config() {
        let dir = TempDir::new().unwrap();
        assert!(ProjectConfig::load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_required_reports_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = ProjectConfig::load_required(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
        assert!(err.to_string().contains("pixiu.toml"));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "project = [broken").unwrap();

        let err = ProjectConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn test_load_rejects_wrong_schema() {
        // parses as TOML but carries no [project] table
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[settings]\nkey = 1\n").unwrap();

        let err = ProjectConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn test_bootstrap_names_project_after_directory() {
        let config = ProjectConfig::bootstrap(Platform::October, Path::new("/srv/myapp"));
        assert_eq!(config.name(), "myapp");
        assert_eq!(config.project.platform, Platform::October);
    }

    #[test]
    fn test_bootstrap_default_database_and_environment() {
        let config = ProjectConfig::bootstrap(Platform::Django, Path::new("/srv/myapp"));

        assert_eq!(config.database.len(), 1);
        assert_eq!(config.database["localhost"].engine, "sqlite");
        assert_eq!(config.deployment.len(), 1);
        assert_eq!(config.deployment["test_localhost"].database, "localhost");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::bootstrap(Platform::October, dir.path());
        config.save(dir.path()).unwrap();

        let loaded = ProjectConfig::load_required(dir.path()).unwrap();
        assert_eq!(loaded.name(), config.name());
        assert_eq!(loaded.project.platform, Platform::October);
        assert_eq!(loaded.project.initialized, config.project.initialized);
        assert_eq!(loaded.environments(), vec!["test_localhost"]);
    }

    #[test]
    fn test_environments_sorted_order() {
        let mut config = ProjectConfig::bootstrap(Platform::October, Path::new("/srv/myapp"));
        config.deployment.insert(
            "staging".to_string(),
            DeploymentTarget {
                database: "localhost".to_string(),
            },
        );
        config.deployment.insert(
            "production".to_string(),
            DeploymentTarget {
                database: "localhost".to_string(),
            },
        );

        assert_eq!(
            config.environments(),
            vec!["production", "staging", "test_localhost"]
        );
    }

    #[test]
    fn test_deployment_lookup_unknown_environment() {
        let config = ProjectConfig::bootstrap(Platform::October, Path::new("/srv/myapp"));

        let err = config.deployment("production").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEnvironment { .. }));

        let message = err.to_string();
        assert!(message.contains("production"));
        assert!(message.contains("test_localhost"));
    }

    #[test]
    fn test_deployment_lookup_empty_table() {
        let mut config = ProjectConfig::bootstrap(Platform::October, Path::new("/srv/myapp"));
        config.deployment.clear();

        let message = config.deployment("anywhere").unwrap_err().to_string();
        assert!(message.contains("configured: none"));
    }
}
