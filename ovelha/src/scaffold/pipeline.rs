//! Generation pipeline
//!
//! One pipeline per target mode. A run is linear: build the layout, emit the
//! fixed project files, then emit every per-class artifact in model order.
//! Rendering never touches the filesystem; [`GenerationPipeline::run`] is the
//! only step with side effects.

use std::fs;
use std::path::{Path, PathBuf};

use super::build_log::{BuildLog, BuildRecord, Outcome};
use super::context::{ClassContext, ProjectContext};
use super::layout::{ArtifactKind, ProjectLayout, TargetMode};
use super::type_mapper::TypeMapper;
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::model::{ClassDecl, Model};
use crate::templates::{self, TemplateRegistry};

/// A rendered artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Owning class, `None` for project-level files
    pub class_name: Option<String>,
    /// Path relative to the emitted root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// A class that produced no artifact of some kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedArtifact {
    /// Artifact kind that was not emitted
    pub kind: ArtifactKind,
    /// Class name
    pub class_name: String,
    /// Path relative to the emitted root that would have been written
    pub path: PathBuf,
    /// Why it was skipped
    pub reason: String,
}

/// One step of a rendered mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEntry {
    /// Artifact to write
    File(GeneratedFile),
    /// Artifact a class did not produce
    Skipped(SkippedArtifact),
}

/// Result of rendering a whole mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Fixed files, then per-class entries in model order
    pub entries: Vec<RenderEntry>,
}

impl RenderOutput {
    /// Files to write, in emission order
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.entries.iter().filter_map(|entry| match entry {
            RenderEntry::File(file) => Some(file),
            RenderEntry::Skipped(_) => None,
        })
    }

    /// Skipped artifacts, in model order
    pub fn skipped(&self) -> impl Iterator<Item = &SkippedArtifact> {
        self.entries.iter().filter_map(|entry| match entry {
            RenderEntry::File(_) => None,
            RenderEntry::Skipped(artifact) => Some(artifact),
        })
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Mode that ran
    pub mode: TargetMode,
    /// Root of the emitted tree
    pub root: PathBuf,
    /// Absolute paths written, in emission order
    pub written: Vec<PathBuf>,
    /// Classes skipped for lack of renderable content
    pub skipped: Vec<String>,
}

/// Generates one target mode from a model
pub struct GenerationPipeline<'a> {
    model: &'a Model,
    config: &'a GeneratorConfig,
    mode: TargetMode,
    project_name: String,
    mapper: TypeMapper,
}

impl<'a> GenerationPipeline<'a> {
    /// Create a pipeline
    #[must_use]
    pub fn new(
        model: &'a Model,
        config: &'a GeneratorConfig,
        mode: TargetMode,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            model,
            config,
            mode,
            project_name: project_name.into(),
            mapper: TypeMapper::new(model),
        }
    }

    /// Layout of this mode under `destination`
    #[must_use]
    pub fn layout(&self, destination: &Path) -> ProjectLayout {
        match self.mode {
            TargetMode::Backend => ProjectLayout::backend(
                destination,
                &self.project_name,
                &self.config.base_package(&self.project_name),
            ),
            TargetMode::Frontend => ProjectLayout::frontend(destination, &self.project_name),
        }
    }

    /// Render every artifact without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile or render
    pub fn render(&self) -> Result<RenderOutput> {
        let registry = TemplateRegistry::new(self.mode)?;
        let layout = self.layout(Path::new(""));
        let project = ProjectContext::new(self.model, self.config, &self.project_name);
        let mut output = RenderOutput::default();

        let fixed: &[ArtifactKind] = match self.mode {
            TargetMode::Backend => &templates::BACKEND_FIXED,
            TargetMode::Frontend => &templates::FRONTEND_FIXED,
        };
        for &kind in fixed {
            let file_name = self.fixed_file_name(kind, &project)?;
            output.entries.push(RenderEntry::File(GeneratedFile {
                kind,
                class_name: None,
                path: self.relative_path(&layout, kind, &file_name),
                content: registry.render(kind, &project)?,
                description: format!("{} {}", self.mode, kind),
            }));
        }

        for class in &self.model.classes {
            let context = ClassContext::new(class, &self.mapper, &project);
            for type_name in &context.unresolved {
                tracing::warn!(
                    class = %class.name,
                    type_name = %type_name,
                    "Unknown type mapped to the permissive default"
                );
            }

            match self.mode {
                TargetMode::Backend => {
                    for &kind in &templates::BACKEND_PER_CLASS {
                        let file = self.class_file(&registry, &layout, kind, &context)?;
                        output.entries.push(RenderEntry::File(file));
                    }
                }
                TargetMode::Frontend => {
                    if let Some(reason) = Self::component_skip_reason(class) {
                        let file_name = format!("{}.vue", context.component_name);
                        output.entries.push(RenderEntry::Skipped(SkippedArtifact {
                            kind: ArtifactKind::Component,
                            class_name: class.name.clone(),
                            path: self.relative_path(&layout, ArtifactKind::Component, &file_name),
                            reason,
                        }));
                    } else {
                        let file =
                            self.class_file(&registry, &layout, ArtifactKind::Component, &context)?;
                        output.entries.push(RenderEntry::File(file));
                    }
                }
            }
        }

        Ok(output)
    }

    /// Render and write every artifact under `destination`
    ///
    /// Directories are created before the first write. Existing files are
    /// fully overwritten. A failure leaves already written files in place.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or a directory or file cannot be
    /// written
    pub fn run(&self, destination: &Path, log: &mut dyn BuildLog) -> Result<GenerationReport> {
        tracing::info!(
            mode = %self.mode,
            project = %self.project_name,
            classes = self.model.classes.len(),
            "Generating project"
        );

        for diagnostic in self.model.diagnostics() {
            tracing::warn!(%diagnostic, "Model passed through unchanged");
        }

        let output = self.render()?;
        let layout = self.layout(destination);
        layout.ensure_all()?;

        let root = layout.root().to_path_buf();
        let mut written = Vec::with_capacity(output.files().count());
        let mut skipped = Vec::with_capacity(output.skipped().count());

        for entry in output.entries {
            match entry {
                RenderEntry::File(file) => {
                    let path = root.join(&file.path);
                    if let Some(parent) = path.parent() {
                        ProjectLayout::ensure(parent)?;
                    }
                    fs::write(&path, &file.content)
                        .map_err(|source| GenerateError::io(&path, source))?;
                    tracing::debug!(path = %path.display(), "Wrote {}", file.description);

                    log.record(BuildRecord {
                        kind: file.kind,
                        class_name: file.class_name,
                        path: path.clone(),
                        outcome: Outcome::Written,
                    });
                    written.push(path);
                }
                RenderEntry::Skipped(artifact) => {
                    log.record(BuildRecord {
                        kind: artifact.kind,
                        class_name: Some(artifact.class_name.clone()),
                        path: root.join(&artifact.path),
                        outcome: Outcome::Skipped {
                            reason: artifact.reason,
                        },
                    });
                    skipped.push(artifact.class_name);
                }
            }
        }

        tracing::info!(
            root = %root.display(),
            written = written.len(),
            skipped = skipped.len(),
            "Generation complete"
        );

        Ok(GenerationReport {
            mode: self.mode,
            root,
            written,
            skipped,
        })
    }

    fn class_file(
        &self,
        registry: &TemplateRegistry,
        layout: &ProjectLayout,
        kind: ArtifactKind,
        context: &ClassContext,
    ) -> Result<GeneratedFile> {
        let file_name = Self::class_file_name(kind, context);
        Ok(GeneratedFile {
            kind,
            class_name: Some(context.class_name.clone()),
            path: self.relative_path(layout, kind, &file_name),
            content: registry.render(kind, context)?,
            description: format!("{} {}", context.class_name, kind),
        })
    }

    fn component_skip_reason(class: &ClassDecl) -> Option<String> {
        if class.has_attributes() {
            None
        } else {
            Some(format!("class {} declares no attributes", class.name))
        }
    }

    fn relative_path(&self, layout: &ProjectLayout, kind: ArtifactKind, file_name: &str) -> PathBuf {
        let dir = layout.dir(kind.dir(self.mode));
        dir.strip_prefix(layout.root())
            .unwrap_or(dir)
            .join(file_name)
    }

    fn fixed_file_name(&self, kind: ArtifactKind, project: &ProjectContext) -> Result<String> {
        let name = match (self.mode, kind) {
            (TargetMode::Backend, ArtifactKind::EntryPoint) => {
                return Ok(format!("{}.java", project.application_class));
            }
            (TargetMode::Backend, ArtifactKind::BuildDescriptor) => "pom.xml",
            (TargetMode::Backend, ArtifactKind::RuntimeConfig) => "application.properties",
            (TargetMode::Backend, ArtifactKind::NotFoundError) => "ResourceNotFoundException.java",
            (TargetMode::Frontend, ArtifactKind::BuildDescriptor) => "package.json",
            (TargetMode::Frontend, ArtifactKind::RuntimeConfig) => ".env",
            (TargetMode::Frontend, ArtifactKind::HostPage) => "index.html",
            (TargetMode::Frontend, ArtifactKind::BundlerConfig) => "vite.config.js",
            (TargetMode::Frontend, ArtifactKind::Shell) => "App.vue",
            (TargetMode::Frontend, ArtifactKind::Bootstrap) => "main.js",
            (TargetMode::Frontend, ArtifactKind::Router) => "router.js",
            (mode, kind) => {
                return Err(GenerateError::Config(format!(
                    "{kind} is not a fixed {mode} file"
                )));
            }
        };
        Ok(name.to_string())
    }

    fn class_file_name(kind: ArtifactKind, context: &ClassContext) -> String {
        let class_name = &context.class_name;
        match kind {
            ArtifactKind::Repository => format!("{class_name}Repository.java"),
            ArtifactKind::Service => format!("{class_name}Service.java"),
            ArtifactKind::Controller => format!("{class_name}Controller.java"),
            ArtifactKind::Component => format!("{}.vue", context.component_name),
            _ => format!("{class_name}.java"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Feature, Parameter};
    use crate::scaffold::MemoryLog;
    use tempfile::tempdir;

    fn model() -> Model {
        Model::new(vec![
            ClassDecl::new(
                "Person",
                vec![
                    Feature::attribute("name", "text"),
                    Feature::attribute("age", "integer"),
                ],
            ),
            ClassDecl::new(
                "Marker",
                vec![Feature::method("ping", "void", vec![Parameter::new("n", "int")])],
            ),
        ])
    }

    fn paths(output: &RenderOutput) -> Vec<String> {
        output
            .files()
            .map(|file| file.path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_backend_render_order_and_paths() {
        let model = model();
        let config = GeneratorConfig::default();
        let pipeline = GenerationPipeline::new(&model, &config, TargetMode::Backend, "shop");
        let output = pipeline.render().unwrap();

        let base = "src/main/java/com/example/shop";
        assert_eq!(
            paths(&output),
            vec![
                "pom.xml".to_string(),
                "src/main/resources/application.properties".to_string(),
                format!("{base}/ShopApplication.java"),
                format!("{base}/exception/ResourceNotFoundException.java"),
                format!("{base}/model/Person.java"),
                format!("{base}/repository/PersonRepository.java"),
                format!("{base}/service/PersonService.java"),
                format!("{base}/controller/PersonController.java"),
                format!("{base}/model/Marker.java"),
                format!("{base}/repository/MarkerRepository.java"),
                format!("{base}/service/MarkerService.java"),
                format!("{base}/controller/MarkerController.java"),
            ]
        );
        assert_eq!(output.skipped().count(), 0);
    }

    #[test]
    fn test_frontend_skips_attribute_less_class() {
        let model = model();
        let config = GeneratorConfig::default();
        let pipeline = GenerationPipeline::new(&model, &config, TargetMode::Frontend, "shop");
        let output = pipeline.render().unwrap();

        assert_eq!(
            paths(&output),
            vec![
                "package.json",
                "index.html",
                "vite.config.js",
                ".env",
                "src/App.vue",
                "src/main.js",
                "src/router.js",
                "src/components/PersonForm.vue",
            ]
        );
        let skipped: Vec<_> = output.skipped().collect();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].class_name, "Marker");
        assert_eq!(skipped[0].kind, ArtifactKind::Component);
        assert!(matches!(output.entries.last(), Some(RenderEntry::Skipped(_))));
    }

    #[test]
    fn test_run_writes_and_logs() {
        let temp_dir = tempdir().unwrap();
        let model = model();
        let config = GeneratorConfig::default();
        let pipeline = GenerationPipeline::new(&model, &config, TargetMode::Frontend, "shop");

        let mut log = MemoryLog::new();
        let report = pipeline.run(temp_dir.path(), &mut log).unwrap();

        assert_eq!(report.root, temp_dir.path().join("shop/frontend"));
        assert_eq!(report.written.len(), 8);
        assert_eq!(report.skipped, vec!["Marker".to_string()]);
        assert_eq!(log.written().count(), 8);
        assert_eq!(log.skipped().count(), 1);

        for path in &report.written {
            assert!(path.is_file(), "missing {}", path.display());
        }
        assert!(!report.root.join("src/components/MarkerForm.vue").exists());
    }

    #[test]
    fn test_run_logs_in_model_order() {
        let temp_dir = tempdir().unwrap();
        let model = Model::new(vec![
            ClassDecl::new("Tag", vec![]),
            ClassDecl::new("Person", vec![Feature::attribute("name", "text")]),
        ]);
        let config = GeneratorConfig::default();
        let pipeline = GenerationPipeline::new(&model, &config, TargetMode::Frontend, "shop");

        let mut log = MemoryLog::new();
        pipeline.run(temp_dir.path(), &mut log).unwrap();

        let per_class: Vec<_> = log
            .records()
            .iter()
            .filter_map(|record| {
                let written = matches!(record.outcome, Outcome::Written);
                record.class_name.as_deref().map(|name| (name, written))
            })
            .collect();
        assert_eq!(per_class, vec![("Tag", false), ("Person", true)]);
    }

    #[test]
    fn test_run_fails_when_destination_is_a_file() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let model = model();
        let config = GeneratorConfig::default();
        let pipeline = GenerationPipeline::new(&model, &config, TargetMode::Backend, "shop");

        let result = pipeline.run(&blocker, &mut MemoryLog::new());
        assert!(matches!(result, Err(GenerateError::Io { .. })));
    }
}
