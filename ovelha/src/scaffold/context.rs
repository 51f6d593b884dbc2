//! Typed template parameters
//!
//! Each artifact is rendered from one of these records. They are computed
//! from the model and configuration only, never from previously generated
//! output, which keeps every artifact a pure function of its inputs.

use serde::Serialize;
use std::collections::BTreeSet;

use super::helpers::TemplateHelpers;
use super::type_mapper::{Stack, TargetType, TypeKind, TypeMapper};
use crate::config::{DatabaseBackend, GeneratorConfig};
use crate::model::{ClassDecl, MethodRef, Model, TypeRef};

/// Project-level parameters shared by the fixed files
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    /// Project name (source file stem unless overridden)
    pub project_name: String,
    /// Maven artifact / npm package name
    pub artifact_id: String,
    /// Maven group id
    pub group_id: String,
    /// Java base package
    pub base_package: String,
    /// Spring Boot application class
    pub application_class: String,
    /// Java release
    pub java_version: String,
    /// Spring Boot parent version
    pub spring_boot_version: String,
    /// Generated server port
    pub server_port: u16,
    /// Whether the PostgreSQL driver is used
    pub is_postgres: bool,
    /// JDBC URL
    pub datasource_url: String,
    /// JDBC driver class
    pub datasource_driver: String,
    /// Placeholder user name
    pub datasource_username: String,
    /// Placeholder password
    pub datasource_password: String,
    /// Base URL the frontend calls
    pub api_base_url: String,
    /// Vite dev server port
    pub dev_port: u16,
    /// Origin of the Vite dev server, allowed by controllers
    pub frontend_origin: String,
    /// Shell title
    pub title: String,
    /// Navigation and router entries, in model order
    pub classes: Vec<NavEntry>,
}

/// One navigation/router entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Class name
    pub class_name: String,
    /// Shared route segment
    pub route_segment: String,
    /// Plural display label
    pub plural_label: String,
    /// Component name (`<Class>Form`)
    pub component_name: String,
}

/// Per-class parameters
#[derive(Debug, Clone, Serialize)]
pub struct ClassContext {
    /// Class name
    pub class_name: String,
    /// Instance variable name
    pub variable: String,
    /// Shared route segment
    pub route_segment: String,
    /// Plural display label
    pub plural_label: String,
    /// Table name
    pub table_name: String,
    /// Component name (`<Class>Form`)
    pub component_name: String,
    /// Java base package
    pub base_package: String,
    /// Origin allowed by the controller
    pub frontend_origin: String,
    /// Fallback API base URL for components
    pub api_base_url: String,
    /// Java imports needed by the entity, sorted
    pub imports: Vec<String>,
    /// Whether any attribute references another entity
    pub has_relations: bool,
    /// Attributes in declaration order
    pub fields: Vec<FieldContext>,
    /// Method stubs in declaration order
    pub methods: Vec<MethodContext>,
    /// JavaScript literal of an empty form
    pub empty_form: String,
    /// Type names that fell back to the permissive default
    #[serde(skip)]
    pub unresolved: Vec<String>,
}

/// Per-attribute parameters
#[derive(Debug, Clone, Serialize)]
pub struct FieldContext {
    /// Attribute name
    pub name: String,
    /// Capitalized name for accessors
    pub capitalized: String,
    /// Form label
    pub label: String,
    /// Java type
    pub java_type: String,
    /// Whether the attribute references another entity
    pub is_entity: bool,
    /// HTML input type
    pub input_type: String,
    /// Whether the input is a checkbox
    pub is_checkbox: bool,
    /// `v-model` modifier, e.g. `.number`
    pub model_modifier: String,
    /// JavaScript default value
    pub default_value: String,
}

/// Per-method parameters
#[derive(Debug, Clone, Serialize)]
pub struct MethodContext {
    /// Method name
    pub name: String,
    /// Java return type
    pub return_type: String,
    /// Java parameter list, e.g. `String name, Integer age`
    pub parameters: String,
}

impl ProjectContext {
    /// Build project parameters
    ///
    /// Navigation entries only include classes that get a frontend component.
    #[must_use]
    pub fn new(model: &Model, config: &GeneratorConfig, project_name: &str) -> Self {
        let artifact = TemplateHelpers::java_identifier(project_name).to_lowercase();
        let artifact_id = if artifact.is_empty() {
            "app".to_string()
        } else {
            artifact
        };

        let classes = model
            .classes
            .iter()
            .filter(|class| class.has_attributes())
            .map(NavEntry::new)
            .collect();

        Self {
            project_name: project_name.to_string(),
            artifact_id,
            group_id: config.backend.group_id.clone(),
            base_package: config.base_package(project_name),
            application_class: TemplateHelpers::application_class(project_name),
            java_version: config.backend.java_version.clone(),
            spring_boot_version: config.backend.spring_boot_version.clone(),
            server_port: config.backend.server_port,
            is_postgres: config.backend.database == DatabaseBackend::Postgres,
            datasource_url: config.datasource_url(project_name),
            datasource_driver: config.backend.database.driver_class().to_string(),
            datasource_username: config.backend.datasource.username.clone(),
            datasource_password: config.backend.datasource.password.clone(),
            api_base_url: config.frontend.api_base_url.clone(),
            dev_port: config.frontend.dev_port,
            frontend_origin: format!("http://localhost:{}", config.frontend.dev_port),
            title: config.frontend_title(project_name),
            classes,
        }
    }
}

impl NavEntry {
    /// Build the entry for a class
    #[must_use]
    pub fn new(class: &ClassDecl) -> Self {
        Self {
            class_name: class.name.clone(),
            route_segment: TemplateHelpers::route_segment(&class.name),
            plural_label: TemplateHelpers::plural_label(&class.name),
            component_name: format!("{}Form", class.name),
        }
    }
}

impl ClassContext {
    /// Build per-class parameters
    #[must_use]
    pub fn new(class: &ClassDecl, mapper: &TypeMapper, project: &ProjectContext) -> Self {
        let mut imports = BTreeSet::new();
        let mut unresolved = Vec::new();

        let fields: Vec<FieldContext> = class
            .attributes()
            .map(|attribute| {
                let java = mapper.resolve(attribute.type_ref, Stack::SpringBoot);
                let vue = mapper.resolve(attribute.type_ref, Stack::Vue);

                if java.kind == TypeKind::Fallback {
                    unresolved.push(attribute.type_ref.to_string());
                }
                if let Some(import) = java.import {
                    imports.insert(import);
                }

                FieldContext {
                    name: attribute.name.to_string(),
                    capitalized: TemplateHelpers::capitalize(attribute.name),
                    label: TemplateHelpers::field_label(attribute.name),
                    java_type: java.name,
                    is_entity: java.kind == TypeKind::Entity,
                    input_type: vue.input.to_string(),
                    is_checkbox: vue.input == "checkbox",
                    model_modifier: if vue.input == "number" { ".number" } else { "" }.to_string(),
                    default_value: vue.default.to_string(),
                }
            })
            .collect();

        let methods = class
            .methods()
            .map(|method| Self::method(method, mapper, &mut imports, &mut unresolved))
            .collect();

        let empty_form = if fields.is_empty() {
            "{}".to_string()
        } else {
            let entries: Vec<String> = fields
                .iter()
                .map(|field| format!("{}: {}", field.name, field.default_value))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        };

        Self {
            class_name: class.name.clone(),
            variable: TemplateHelpers::lower_first(&class.name),
            route_segment: TemplateHelpers::route_segment(&class.name),
            plural_label: TemplateHelpers::plural_label(&class.name),
            table_name: TemplateHelpers::table_name(&class.name),
            component_name: format!("{}Form", class.name),
            base_package: project.base_package.clone(),
            frontend_origin: project.frontend_origin.clone(),
            api_base_url: project.api_base_url.clone(),
            imports: imports.into_iter().collect(),
            has_relations: fields.iter().any(|field| field.is_entity),
            fields,
            methods,
            empty_form,
            unresolved,
        }
    }

    fn method(
        method: MethodRef<'_>,
        mapper: &TypeMapper,
        imports: &mut BTreeSet<String>,
        unresolved: &mut Vec<String>,
    ) -> MethodContext {
        let mut note = |type_ref: &TypeRef, resolved: TargetType| {
            if resolved.kind == TypeKind::Fallback {
                unresolved.push(type_ref.to_string());
            }
            if let Some(import) = resolved.import {
                imports.insert(import);
            }
            resolved.name
        };

        let return_type = note(
            method.type_ref,
            mapper.resolve_return(method.type_ref, Stack::SpringBoot),
        );
        let parameters = method
            .parameters
            .iter()
            .map(|parameter| {
                let resolved = mapper.resolve(&parameter.type_ref, Stack::SpringBoot);
                format!("{} {}", note(&parameter.type_ref, resolved), parameter.name)
            })
            .collect::<Vec<_>>()
            .join(", ");

        MethodContext {
            name: method.name.to_string(),
            return_type,
            parameters,
        }
    }
}
