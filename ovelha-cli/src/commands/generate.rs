//! Backend and frontend generation commands

use anyhow::{Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use ovelha::config::{DatabaseBackend, GeneratorConfig};
use ovelha::model::Model;
use ovelha::scaffold::{GenerationPipeline, GenerationReport, TargetMode, TracingLog};

use crate::GenerateArgs;

static SUCCESS: Emoji = Emoji("✓ ", "");

/// Default output directory name, created next to the model file
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Generate one target mode from a model file
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    mode: TargetMode,
    args: GenerateArgs,
    database: Option<DatabaseBackend>,
}

impl GenerateCommand {
    /// Backend generation
    #[must_use]
    pub const fn backend(args: GenerateArgs) -> Self {
        Self {
            mode: TargetMode::Backend,
            args,
            database: None,
        }
    }

    /// Frontend generation
    #[must_use]
    pub const fn frontend(args: GenerateArgs) -> Self {
        Self {
            mode: TargetMode::Frontend,
            args,
            database: None,
        }
    }

    /// Override the configured database backend
    #[must_use]
    pub fn with_database(mut self, database: Option<DatabaseBackend>) -> Self {
        self.database = database;
        self
    }

    /// Output directory: `-d` when given, else `<source dir>/generated`
    #[must_use]
    pub fn destination(&self) -> PathBuf {
        self.args.destination.clone().unwrap_or_else(|| {
            self.args
                .source
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_OUTPUT_DIR)
        })
    }

    /// Load configuration and apply command line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn load_config(&self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::load(self.args.config.as_deref())
            .context("Failed to load configuration")?;
        if let Some(database) = self.database {
            config.backend.database = database;
        }
        Ok(config)
    }

    /// Load the model and run the pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model file cannot be read or parsed
    /// - The configuration is invalid
    /// - A directory or file cannot be written
    pub fn run(&self) -> Result<GenerationReport> {
        let source = &self.args.source;
        let model = Model::load(source)
            .with_context(|| format!("Failed to load model: {}", source.display()))?;
        let config = self.load_config()?;
        let project_name = config.project_name(source);

        let destination = self.destination();
        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            project = %project_name,
            "Resolved generation inputs"
        );

        let pipeline = GenerationPipeline::new(&model, &config, self.mode, project_name);
        pipeline.run(&destination, &mut TracingLog).with_context(|| {
            format!(
                "Failed to generate {} into {}",
                self.mode,
                destination.display()
            )
        })
    }

    /// Execute the command
    ///
    /// Prints a single success line naming the emitted root.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails
    pub fn execute(&self) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(format!("Generating {}...", self.mode));

        let result = self.run();
        spinner.finish_and_clear();
        let report = result?;

        println!(
            "{}{} {}",
            SUCCESS,
            style(format!("{} generated at", capitalized(self.mode))).green().bold(),
            style(report.root.display()).cyan()
        );

        Ok(())
    }
}

fn capitalized(mode: TargetMode) -> &'static str {
    match mode {
        TargetMode::Backend => "Backend",
        TargetMode::Frontend => "Frontend",
    }
}
