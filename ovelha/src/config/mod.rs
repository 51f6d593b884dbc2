//! Configuration management for the generator
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `OVELHA_` prefix, `__` for nesting)
//! 2. An explicit config file, or `./ovelha.toml` when none is given
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # ovelha.toml
//! [project]
//! name = "petshop"
//!
//! [backend]
//! group_id = "com.acme"
//! server_port = 9090
//! database = "h2"
//!
//! [backend.datasource]
//! username = "petshop"
//!
//! [frontend]
//! api_base_url = "http://localhost:9090"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Name of the config file picked up from the working directory
pub const LOCAL_CONFIG_FILE: &str = "ovelha.toml";

/// Database backend for generated Spring Boot projects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    /// `PostgreSQL` - production-grade (default)
    #[default]
    Postgres,
    /// H2 - in-memory, zero setup
    H2,
}

impl DatabaseBackend {
    /// Default JDBC URL for a database named after the project
    #[must_use]
    pub fn default_url(self, database_name: &str) -> String {
        match self {
            Self::Postgres => format!("jdbc:postgresql://localhost:5432/{database_name}"),
            Self::H2 => format!("jdbc:h2:mem:{database_name}"),
        }
    }

    /// JDBC driver class name
    #[must_use]
    pub const fn driver_class(self) -> &'static str {
        match self {
            Self::Postgres => "org.postgresql.Driver",
            Self::H2 => "org.h2.Driver",
        }
    }
}

/// Project-wide settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Overrides the project name derived from the source file stem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Persistence connection parameters written to the runtime config
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasourceSettings {
    /// JDBC URL; derived from the database backend when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Placeholder user name
    pub username: String,

    /// Placeholder password
    pub password: String,
}

impl Default for DatasourceSettings {
    fn default() -> Self {
        Self {
            url: None,
            username: "postgres".to_string(),
            password: "changeme".to_string(),
        }
    }
}

/// Spring Boot backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Maven group id, also the package prefix
    pub group_id: String,

    /// Java release targeted by the build descriptor
    pub java_version: String,

    /// Spring Boot parent version
    pub spring_boot_version: String,

    /// HTTP port of the generated server
    pub server_port: u16,

    /// Database backend
    pub database: DatabaseBackend,

    /// Connection parameters
    pub datasource: DatasourceSettings,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            group_id: "com.example".to_string(),
            java_version: "17".to_string(),
            spring_boot_version: "3.1.0".to_string(),
            server_port: 8080,
            database: DatabaseBackend::default(),
            datasource: DatasourceSettings::default(),
        }
    }
}

/// Vue frontend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendSettings {
    /// Base URL the generated components call
    pub api_base_url: String,

    /// Port of the Vite dev server
    pub dev_port: u16,

    /// Page and shell title; defaults to the project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            dev_port: 5173,
            title: None,
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Project settings
    #[serde(default)]
    pub project: ProjectSettings,

    /// Backend settings
    #[serde(default)]
    pub backend: BackendSettings,

    /// Frontend settings
    #[serde(default)]
    pub frontend: FrontendSettings,
}

impl GeneratorConfig {
    /// Load configuration
    ///
    /// Reads `explicit` when given, otherwise `./ovelha.toml` if present, and
    /// lets `OVELHA_*` environment variables override both.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail type conversion
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        match explicit {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local = Path::new(LOCAL_CONFIG_FILE);
                if local.exists() {
                    figment = figment.merge(Toml::file(local));
                }
            }
        }

        figment = figment.merge(Env::prefixed("OVELHA_").split("__").lowercase(true));

        Ok(figment.extract()?)
    }

    /// Load configuration from a TOML string layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid configuration
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::string(input))
            .extract()?;
        Ok(config)
    }

    /// Project name: the configured override, else the model file stem
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::Path;
    /// # use ovelha::config::GeneratorConfig;
    /// let config = GeneratorConfig::default();
    /// assert_eq!(config.project_name(Path::new("models/petshop.json")), "petshop");
    /// ```
    #[must_use]
    pub fn project_name(&self, source: &Path) -> String {
        self.project
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| {
                source
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .filter(|stem| !stem.is_empty())
            })
            .unwrap_or_else(|| "app".to_string())
    }

    /// Java package for generated sources, e.g. `com.example.petshop`
    #[must_use]
    pub fn base_package(&self, project_name: &str) -> String {
        let artifact = crate::scaffold::TemplateHelpers::java_identifier(project_name).to_lowercase();
        if artifact.is_empty() {
            self.backend.group_id.clone()
        } else {
            format!("{}.{artifact}", self.backend.group_id)
        }
    }

    /// Datasource URL, falling back to the backend default
    #[must_use]
    pub fn datasource_url(&self, project_name: &str) -> String {
        self.backend.datasource.url.clone().unwrap_or_else(|| {
            let database_name = crate::scaffold::TemplateHelpers::table_name(project_name);
            self.backend.database.default_url(&database_name)
        })
    }

    /// Title shown by the frontend shell
    #[must_use]
    pub fn frontend_title(&self, project_name: &str) -> String {
        self.frontend
            .title
            .clone()
            .unwrap_or_else(|| project_name.to_string())
    }
}
