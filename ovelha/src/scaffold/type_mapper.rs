//! Type resolution for target stacks
//!
//! Maps a model-level type name to the native type of each target stack.
//! Resolution is total: class names map to the generated entity, primitives
//! map through a closed alias table, and anything else falls back to the
//! stack's most permissive representation instead of failing.
//!
//! # Primitive Aliases
//!
//! | Model alias                      | Java            | Vue input        |
//! |----------------------------------|-----------------|------------------|
//! | `text`, `string`, `char`         | `String`        | `text`           |
//! | `integer`, `int`                 | `Integer`       | `number`         |
//! | `long`, `bigint`                 | `Long`          | `number`         |
//! | `boolean`, `bool`                | `Boolean`       | `checkbox`       |
//! | `float`, `double`, `real`        | `Double`        | `number`         |
//! | `decimal`                        | `BigDecimal`    | `number`         |
//! | `date`                           | `LocalDate`     | `date`           |
//! | `datetime`                       | `LocalDateTime` | `datetime-local` |
//!
//! `void` is only accepted as a method return type, see
//! [`TypeMapper::resolve_return`].

use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::{Model, TypeRef};

/// Target generation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    /// Spring Boot (Java)
    SpringBoot,
    /// Vue 3 (JavaScript)
    Vue,
}

impl Stack {
    /// All supported stacks
    pub const ALL: [Self; 2] = [Self::SpringBoot, Self::Vue];
}

/// How a type reference was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Known primitive alias
    Primitive,
    /// Another class of the same model
    Entity,
    /// Unknown name degraded to the permissive default
    Fallback,
}

/// A resolved target-stack type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetType {
    /// Native type name
    pub name: String,
    /// Fully qualified import, when the type needs one
    pub import: Option<String>,
    /// Resolution outcome
    pub kind: TypeKind,
    /// HTML input type used by form components
    pub input: &'static str,
    /// Literal used to initialise and reset form state
    pub default: &'static str,
}

/// Closed set of primitive types the model language knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Primitive {
    Text,
    Integer,
    Long,
    Boolean,
    Double,
    Decimal,
    Date,
    DateTime,
    Void,
}

impl Primitive {
    fn parse(alias: &str) -> Option<Self> {
        match alias.trim().to_lowercase().as_str() {
            "text" | "string" | "char" => Some(Self::Text),
            "integer" | "int" => Some(Self::Integer),
            "long" | "bigint" => Some(Self::Long),
            "boolean" | "bool" => Some(Self::Boolean),
            "float" | "double" | "real" => Some(Self::Double),
            "decimal" => Some(Self::Decimal),
            "date" => Some(Self::Date),
            "datetime" => Some(Self::DateTime),
            "void" => Some(Self::Void),
            _ => None,
        }
    }

    const fn java(self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::Text => ("String", None),
            Self::Integer => ("Integer", None),
            Self::Long => ("Long", None),
            Self::Boolean => ("Boolean", None),
            Self::Double => ("Double", None),
            Self::Decimal => ("BigDecimal", Some("java.math.BigDecimal")),
            Self::Date => ("LocalDate", Some("java.time.LocalDate")),
            Self::DateTime => ("LocalDateTime", Some("java.time.LocalDateTime")),
            Self::Void => ("void", None),
        }
    }

    const fn vue(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Text | Self::Void => ("string", "text", "''"),
            Self::Integer | Self::Long | Self::Double | Self::Decimal => {
                ("number", "number", "null")
            }
            Self::Boolean => ("boolean", "checkbox", "false"),
            Self::Date => ("string", "date", "''"),
            Self::DateTime => ("string", "datetime-local", "''"),
        }
    }
}

/// Resolves model type names against a model's classes
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    classes: BTreeSet<String>,
}

impl TypeMapper {
    /// Create a mapper that knows the classes of `model`
    #[must_use]
    pub fn new(model: &Model) -> Self {
        Self {
            classes: model.classes.iter().map(|class| class.name.clone()).collect(),
        }
    }

    /// Resolve an attribute or parameter type for a stack
    ///
    /// An exact class name wins over a primitive alias, so a class called
    /// `Date` is referenced as that entity. `void` is not a value type and
    /// falls back.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ovelha::model::{Model, TypeRef};
    /// # use ovelha::scaffold::{Stack, TypeKind, TypeMapper};
    /// let mapper = TypeMapper::new(&Model::default());
    /// let resolved = mapper.resolve(&TypeRef::new("integer"), Stack::SpringBoot);
    /// assert_eq!(resolved.name, "Integer");
    ///
    /// let unknown = mapper.resolve(&TypeRef::new("Blob"), Stack::Vue);
    /// assert_eq!(unknown.kind, TypeKind::Fallback);
    /// ```
    #[must_use]
    pub fn resolve(&self, type_ref: &TypeRef, stack: Stack) -> TargetType {
        self.resolve_as(type_ref, stack, false)
    }

    /// Resolve a method return type, where `void` is allowed
    #[must_use]
    pub fn resolve_return(&self, type_ref: &TypeRef, stack: Stack) -> TargetType {
        self.resolve_as(type_ref, stack, true)
    }

    fn resolve_as(&self, type_ref: &TypeRef, stack: Stack, allow_void: bool) -> TargetType {
        let name = type_ref.as_str();

        if self.classes.contains(name) {
            return Self::entity(name, stack);
        }

        match Primitive::parse(name) {
            Some(Primitive::Void) if !allow_void => Self::fallback(stack),
            Some(primitive) => Self::primitive(primitive, stack),
            None => Self::fallback(stack),
        }
    }

    fn primitive(primitive: Primitive, stack: Stack) -> TargetType {
        match stack {
            Stack::SpringBoot => {
                let (name, import) = primitive.java();
                TargetType {
                    name: name.to_string(),
                    import: import.map(str::to_string),
                    kind: TypeKind::Primitive,
                    input: primitive.vue().1,
                    default: "null",
                }
            }
            Stack::Vue => {
                let (name, input, default) = primitive.vue();
                TargetType {
                    name: name.to_string(),
                    import: None,
                    kind: TypeKind::Primitive,
                    input,
                    default,
                }
            }
        }
    }

    fn entity(class_name: &str, stack: Stack) -> TargetType {
        match stack {
            Stack::SpringBoot => TargetType {
                name: class_name.to_string(),
                import: None,
                kind: TypeKind::Entity,
                input: "text",
                default: "null",
            },
            Stack::Vue => TargetType {
                name: "object".to_string(),
                import: None,
                kind: TypeKind::Entity,
                input: "text",
                default: "null",
            },
        }
    }

    fn fallback(stack: Stack) -> TargetType {
        let (name, default) = match stack {
            Stack::SpringBoot => ("String", "null"),
            Stack::Vue => ("string", "''"),
        };
        TargetType {
            name: name.to_string(),
            import: None,
            kind: TypeKind::Fallback,
            input: "text",
            default,
        }
    }
}
