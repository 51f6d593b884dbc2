//! On-disk project layout
//!
//! A layout is a fixed map from logical directory to path for one target
//! mode. All directories are created once, before any artifact is written.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenerateError, Result};

/// Generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetMode {
    /// Spring Boot persistence/service/API stack
    Backend,
    /// Vue CRUD frontend
    Frontend,
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend => f.write_str("backend"),
            Self::Frontend => f.write_str("frontend"),
        }
    }
}

/// Logical directory of a generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayoutDir {
    /// Project root (build descriptor lives here)
    Root,
    /// Base package source directory (application entry point)
    Sources,
    /// Entity package
    Model,
    /// Repository package
    Repository,
    /// Service package
    Service,
    /// Controller package
    Controller,
    /// Exception package
    Exception,
    /// Runtime resources
    Resources,
    /// Test sources
    TestSources,
    /// Frontend `src/`
    FrontendSrc,
    /// Frontend `src/components/`
    Components,
}

/// Kind of generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// `pom.xml` / `package.json`
    BuildDescriptor,
    /// `application.properties` / `.env`
    RuntimeConfig,
    /// Spring Boot application class
    EntryPoint,
    /// Shared not-found exception
    NotFoundError,
    /// JPA entity
    Entity,
    /// Spring Data repository
    Repository,
    /// Service layer
    Service,
    /// REST controller
    Controller,
    /// `index.html`
    HostPage,
    /// `vite.config.js`
    BundlerConfig,
    /// `App.vue`
    Shell,
    /// `router.js`
    Router,
    /// `main.js`
    Bootstrap,
    /// Per-class form-and-list component
    Component,
}

impl ArtifactKind {
    /// Directory this artifact kind is written into for a mode
    #[must_use]
    pub const fn dir(self, mode: TargetMode) -> LayoutDir {
        match self {
            Self::RuntimeConfig => match mode {
                TargetMode::Backend => LayoutDir::Resources,
                TargetMode::Frontend => LayoutDir::Root,
            },
            Self::BuildDescriptor | Self::HostPage | Self::BundlerConfig => LayoutDir::Root,
            Self::EntryPoint => LayoutDir::Sources,
            Self::NotFoundError => LayoutDir::Exception,
            Self::Entity => LayoutDir::Model,
            Self::Repository => LayoutDir::Repository,
            Self::Service => LayoutDir::Service,
            Self::Controller => LayoutDir::Controller,
            Self::Shell | Self::Router | Self::Bootstrap => LayoutDir::FrontendSrc,
            Self::Component => LayoutDir::Components,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BuildDescriptor => "build descriptor",
            Self::RuntimeConfig => "runtime config",
            Self::EntryPoint => "entry point",
            Self::NotFoundError => "not-found error",
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Controller => "controller",
            Self::HostPage => "host page",
            Self::BundlerConfig => "bundler config",
            Self::Shell => "shell",
            Self::Router => "router",
            Self::Bootstrap => "bootstrap",
            Self::Component => "component",
        };
        f.write_str(label)
    }
}

/// Directory map for one generated project
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    dirs: BTreeMap<LayoutDir, PathBuf>,
}

impl ProjectLayout {
    /// Maven layout under `<destination>/<project>/`
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::Path;
    /// # use ovelha::scaffold::{LayoutDir, ProjectLayout};
    /// let layout = ProjectLayout::backend(Path::new("out"), "shop", "com.example.shop");
    /// assert_eq!(
    ///     layout.dir(LayoutDir::Model),
    ///     Path::new("out/shop/src/main/java/com/example/shop/model")
    /// );
    /// ```
    #[must_use]
    pub fn backend(destination: &Path, project_name: &str, base_package: &str) -> Self {
        let root = destination.join(project_name);
        let package_path: PathBuf = base_package.split('.').collect();
        let sources = root.join("src/main/java").join(&package_path);

        let dirs = BTreeMap::from([
            (LayoutDir::Model, sources.join("model")),
            (LayoutDir::Repository, sources.join("repository")),
            (LayoutDir::Service, sources.join("service")),
            (LayoutDir::Controller, sources.join("controller")),
            (LayoutDir::Exception, sources.join("exception")),
            (LayoutDir::Resources, root.join("src/main/resources")),
            (LayoutDir::TestSources, root.join("src/test/java").join(&package_path)),
            (LayoutDir::Sources, sources),
            (LayoutDir::Root, root),
        ]);

        Self { dirs }
    }

    /// Vite layout under `<destination>/<project>/frontend/`
    #[must_use]
    pub fn frontend(destination: &Path, project_name: &str) -> Self {
        let root = destination.join(project_name).join("frontend");
        let src = root.join("src");

        let dirs = BTreeMap::from([
            (LayoutDir::Components, src.join("components")),
            (LayoutDir::FrontendSrc, src),
            (LayoutDir::Root, root),
        ]);

        Self { dirs }
    }

    /// Root directory of the emitted tree
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir(LayoutDir::Root)
    }

    /// Path of a logical directory
    ///
    /// Directories that do not belong to this layout's mode resolve to the
    /// project root.
    #[must_use]
    pub fn dir(&self, dir: LayoutDir) -> &Path {
        self.dirs
            .get(&dir)
            .or_else(|| self.dirs.get(&LayoutDir::Root))
            .map_or_else(|| Path::new("."), PathBuf::as_path)
    }

    /// All directories of this layout
    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.values().map(PathBuf::as_path)
    }

    /// Create a directory and its parents; succeeds if it already exists
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn ensure(path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|source| GenerateError::io(path, source))
    }

    /// Create every directory of this layout
    ///
    /// # Errors
    ///
    /// Returns the first directory creation failure
    pub fn ensure_all(&self) -> Result<()> {
        for dir in self.dirs() {
            Self::ensure(dir)?;
        }
        Ok(())
    }
}
