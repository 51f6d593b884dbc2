//! Artifact templates
//!
//! Every artifact kind of a target mode has exactly one Handlebars template.
//! All templates are compiled once into a [`TemplateRegistry`]; rendering is a
//! pure function of the template and its typed context.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{GenerateError, Result};
use crate::scaffold::{ArtifactKind, TargetMode};

pub mod backend;
pub mod frontend;

/// Artifact kinds emitted by the backend mode, in emission order
pub const BACKEND_FIXED: [ArtifactKind; 4] = [
    ArtifactKind::BuildDescriptor,
    ArtifactKind::RuntimeConfig,
    ArtifactKind::EntryPoint,
    ArtifactKind::NotFoundError,
];

/// Per-class backend artifact kinds, in emission order
pub const BACKEND_PER_CLASS: [ArtifactKind; 4] = [
    ArtifactKind::Entity,
    ArtifactKind::Repository,
    ArtifactKind::Service,
    ArtifactKind::Controller,
];

/// Artifact kinds emitted by the frontend mode, in emission order
pub const FRONTEND_FIXED: [ArtifactKind; 7] = [
    ArtifactKind::BuildDescriptor,
    ArtifactKind::HostPage,
    ArtifactKind::BundlerConfig,
    ArtifactKind::RuntimeConfig,
    ArtifactKind::Shell,
    ArtifactKind::Bootstrap,
    ArtifactKind::Router,
];

/// Template source for an artifact kind in a mode
///
/// Returns `None` for kinds the mode never emits.
#[must_use]
pub const fn source(mode: TargetMode, kind: ArtifactKind) -> Option<&'static str> {
    match (mode, kind) {
        (TargetMode::Backend, ArtifactKind::BuildDescriptor) => Some(backend::POM_XML),
        (TargetMode::Backend, ArtifactKind::RuntimeConfig) => Some(backend::APPLICATION_PROPERTIES),
        (TargetMode::Backend, ArtifactKind::EntryPoint) => Some(backend::APPLICATION_JAVA),
        (TargetMode::Backend, ArtifactKind::NotFoundError) => Some(backend::NOT_FOUND_EXCEPTION),
        (TargetMode::Backend, ArtifactKind::Entity) => Some(backend::ENTITY),
        (TargetMode::Backend, ArtifactKind::Repository) => Some(backend::REPOSITORY),
        (TargetMode::Backend, ArtifactKind::Service) => Some(backend::SERVICE),
        (TargetMode::Backend, ArtifactKind::Controller) => Some(backend::CONTROLLER),
        (TargetMode::Frontend, ArtifactKind::BuildDescriptor) => Some(frontend::PACKAGE_JSON),
        (TargetMode::Frontend, ArtifactKind::RuntimeConfig) => Some(frontend::ENV_FILE),
        (TargetMode::Frontend, ArtifactKind::HostPage) => Some(frontend::INDEX_HTML),
        (TargetMode::Frontend, ArtifactKind::BundlerConfig) => Some(frontend::VITE_CONFIG_JS),
        (TargetMode::Frontend, ArtifactKind::Shell) => Some(frontend::APP_VUE),
        (TargetMode::Frontend, ArtifactKind::Bootstrap) => Some(frontend::MAIN_JS),
        (TargetMode::Frontend, ArtifactKind::Router) => Some(frontend::ROUTER_JS),
        (TargetMode::Frontend, ArtifactKind::Component) => Some(frontend::COMPONENT_VUE),
        _ => None,
    }
}

fn template_name(mode: TargetMode, kind: ArtifactKind) -> String {
    format!("{mode}/{kind}")
}

/// Compiled templates for one target mode
pub struct TemplateRegistry {
    mode: TargetMode,
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile every template of `mode`
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile
    pub fn new(mode: TargetMode) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generated sources are not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        let per_class: &[ArtifactKind] = match mode {
            TargetMode::Backend => &BACKEND_PER_CLASS,
            TargetMode::Frontend => &[ArtifactKind::Component],
        };
        let fixed: &[ArtifactKind] = match mode {
            TargetMode::Backend => &BACKEND_FIXED,
            TargetMode::Frontend => &FRONTEND_FIXED,
        };

        for &kind in fixed.iter().chain(per_class) {
            if let Some(template) = source(mode, kind) {
                handlebars
                    .register_template_string(&template_name(mode, kind), template)
                    .map_err(Box::new)?;
            }
        }

        Ok(Self { mode, handlebars })
    }

    /// Render an artifact from its context
    ///
    /// # Errors
    ///
    /// Returns an error if the kind has no template in this mode or the
    /// context is missing a field the template references
    pub fn render<T: Serialize>(&self, kind: ArtifactKind, context: &T) -> Result<String> {
        let name = template_name(self.mode, kind);
        if !self.handlebars.has_template(&name) {
            return Err(GenerateError::Config(format!(
                "no {kind} template for {} generation",
                self.mode
            )));
        }
        Ok(self.handlebars.render(&name, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::model::{ClassDecl, Feature, Model, Parameter};
    use crate::scaffold::{ClassContext, ProjectContext, TypeMapper};

    fn contexts() -> (ProjectContext, ClassContext) {
        let model = Model::new(vec![ClassDecl::new(
            "Person",
            vec![
                Feature::attribute("name", "text"),
                Feature::attribute("age", "integer"),
                Feature::attribute("active", "boolean"),
                Feature::method("greet", "text", vec![Parameter::new("other", "Person")]),
            ],
        )]);
        let project = ProjectContext::new(&model, &GeneratorConfig::default(), "people");
        let class = ClassContext::new(&model.classes[0], &TypeMapper::new(&model), &project);
        (project, class)
    }

    #[test]
    fn test_every_template_compiles() {
        assert!(TemplateRegistry::new(TargetMode::Backend).is_ok());
        assert!(TemplateRegistry::new(TargetMode::Frontend).is_ok());
    }

    #[test]
    fn test_fixed_kinds_have_sources() {
        for kind in BACKEND_FIXED.iter().chain(&BACKEND_PER_CLASS) {
            assert!(source(TargetMode::Backend, *kind).is_some(), "{kind}");
        }
        for kind in FRONTEND_FIXED.iter().chain(&[ArtifactKind::Component]) {
            assert!(source(TargetMode::Frontend, *kind).is_some(), "{kind}");
        }
        assert!(source(TargetMode::Frontend, ArtifactKind::Entity).is_none());
        assert!(source(TargetMode::Backend, ArtifactKind::Component).is_none());
    }

    #[test]
    fn test_render_unknown_kind_for_mode() {
        let registry = TemplateRegistry::new(TargetMode::Frontend).unwrap();
        let (_, class) = contexts();
        let result = registry.render(ArtifactKind::Entity, &class);
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }

    #[test]
    fn test_render_entity() {
        let registry = TemplateRegistry::new(TargetMode::Backend).unwrap();
        let (_, class) = contexts();
        let entity = registry.render(ArtifactKind::Entity, &class).unwrap();

        assert!(entity.contains("package com.example.people.model;"));
        assert!(entity.contains("@Table(name = \"person\")"));
        assert!(entity.contains("private Long id;"));
        assert!(entity.contains("private String name;"));
        assert!(entity.contains("private Integer age;"));
        assert!(entity.contains("public Boolean getActive()"));
        assert!(entity.contains("public void setAge(Integer age)"));
        assert!(entity.contains("public Person() {"));
        assert!(entity.contains("public String greet(Person other) {"));
        assert!(!entity.contains("ManyToOne"));
    }

    #[test]
    fn test_render_controller_routes() {
        let registry = TemplateRegistry::new(TargetMode::Backend).unwrap();
        let (_, class) = contexts();
        let controller = registry.render(ArtifactKind::Controller, &class).unwrap();

        assert!(controller.contains("@RequestMapping(\"/person\")"));
        assert!(controller.contains("@CrossOrigin(origins = \"http://localhost:5173\")"));
        assert!(controller.contains("@GetMapping(\"/{id}\")"));
        assert!(controller.contains("person.setId(null);"));
        assert!(controller.contains("person.setId(id);"));
        assert!(controller.contains("ResponseEntity.noContent().build()"));
    }

    #[test]
    fn test_render_pom_selects_driver() {
        let registry = TemplateRegistry::new(TargetMode::Backend).unwrap();
        let (mut project, _) = contexts();

        let pom = registry.render(ArtifactKind::BuildDescriptor, &project).unwrap();
        assert!(pom.contains("<artifactId>postgresql</artifactId>"));
        assert!(!pom.contains("<artifactId>h2</artifactId>"));

        project.is_postgres = false;
        let pom = registry.render(ArtifactKind::BuildDescriptor, &project).unwrap();
        assert!(pom.contains("<artifactId>h2</artifactId>"));
    }

    #[test]
    fn test_render_component() {
        let registry = TemplateRegistry::new(TargetMode::Frontend).unwrap();
        let (_, class) = contexts();
        let component = registry.render(ArtifactKind::Component, &class).unwrap();

        assert!(component.contains("v-model=\"formData.name\""));
        assert!(component.contains("v-model.number=\"formData.age\""));
        assert!(component.contains("type=\"checkbox\""));
        assert!(component.contains("const RESOURCE_URL = `${API_BASE}/person`;"));
        assert!(component.contains("({ name: '', age: null, active: false })"));
        assert!(component.contains("name: 'PersonForm'"));
        // methods are not part of the UI
        assert!(!component.contains("greet"));
        assert!(!component.contains("{{"));
    }

    #[test]
    fn test_render_router_and_shell() {
        let registry = TemplateRegistry::new(TargetMode::Frontend).unwrap();
        let (project, _) = contexts();

        let router = registry.render(ArtifactKind::Router, &project).unwrap();
        assert!(router.contains("path: '/person'"));
        assert!(router.contains("import('./components/PersonForm.vue')"));

        let shell = registry.render(ArtifactKind::Shell, &project).unwrap();
        assert!(shell.contains("to=\"/person\">Persons</router-link>"));
    }
}
