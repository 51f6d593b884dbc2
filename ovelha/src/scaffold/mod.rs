//! Scaffold generation
//!
//! Naming, type mapping, layout, template contexts and the pipeline that ties
//! them together.

pub mod build_log;
pub mod context;
pub mod helpers;
pub mod layout;
pub mod pipeline;
pub mod type_mapper;

pub use build_log::{BuildLog, BuildRecord, MemoryLog, Outcome, TracingLog};
pub use context::{ClassContext, FieldContext, MethodContext, NavEntry, ProjectContext};
pub use helpers::TemplateHelpers;
pub use layout::{ArtifactKind, LayoutDir, ProjectLayout, TargetMode};
pub use pipeline::{
    GeneratedFile, GenerationPipeline, GenerationReport, RenderEntry, RenderOutput, SkippedArtifact,
};
pub use type_mapper::{Stack, TargetType, TypeKind, TypeMapper};
