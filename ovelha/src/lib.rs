//! ovelha: Spring Boot and Vue scaffolds from a domain model
//!
//! The engine takes an already validated model (classes with typed attributes
//! and method signatures) and emits two independent trees:
//!
//! - **backend**: a Maven project with one entity, repository, service and
//!   REST controller per class
//! - **frontend**: a Vite project with one form-and-list component per class,
//!   a navigation shell and a router table
//!
//! Both trees derive every shared name (route segments in particular) from the
//! same [`scaffold::TemplateHelpers`], so a controller at `/person` is always
//! called by a component and router entry at `/person`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ovelha::config::GeneratorConfig;
//! use ovelha::model::Model;
//! use ovelha::scaffold::{GenerationPipeline, TargetMode, TracingLog};
//! use std::path::Path;
//!
//! # fn main() -> ovelha::Result<()> {
//! let source = Path::new("petshop.json");
//! let model = Model::load(source)?;
//! let config = GeneratorConfig::load(None)?;
//! let project = config.project_name(source);
//!
//! let pipeline = GenerationPipeline::new(&model, &config, TargetMode::Backend, project);
//! let report = pipeline.run(Path::new("generated"), &mut TracingLog)?;
//! println!("{}", report.root.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod scaffold;
pub mod templates;

pub use error::{GenerateError, Result};
