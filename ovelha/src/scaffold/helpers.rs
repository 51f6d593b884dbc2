//! Naming conventions for code generation
//!
//! Every name that appears in more than one artifact is derived here, from the
//! class or feature name alone. Backend and frontend templates both call the
//! same functions, so a class's route segment is byte-identical across the
//! controller mapping, the router table and the component's API calls.

use convert_case::{Case, Casing};
use inflector::Inflector;

/// Naming helpers shared by all templates
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Lowercase the first character (instance and variable names)
    ///
    /// # Examples
    ///
    /// ```
    /// # use ovelha::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::lower_first("Person"), "person");
    /// assert_eq!(TemplateHelpers::lower_first("PetOwner"), "petOwner");
    /// ```
    #[must_use]
    pub fn lower_first(input: &str) -> String {
        let mut chars = input.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_lowercase().chain(chars).collect()
        })
    }

    /// Uppercase the first character (accessor and application class names)
    ///
    /// # Examples
    ///
    /// ```
    /// # use ovelha::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::capitalize("name"), "Name");
    /// assert_eq!(TemplateHelpers::capitalize("birthDate"), "BirthDate");
    /// ```
    #[must_use]
    pub fn capitalize(input: &str) -> String {
        let mut chars = input.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Lowercase path segment shared by backend routes and frontend router
    ///
    /// # Examples
    ///
    /// ```
    /// # use ovelha::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::route_segment("Person"), "person");
    /// assert_eq!(TemplateHelpers::route_segment("PetOwner"), "petowner");
    /// ```
    #[must_use]
    pub fn route_segment(class_name: &str) -> String {
        class_name.to_lowercase()
    }

    /// Plural display label using a simple suffix rule
    ///
    /// # Examples
    ///
    /// ```
    /// # use ovelha::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::plural_label("Pet"), "Pets");
    /// assert_eq!(TemplateHelpers::plural_label("Address"), "Addresses");
    /// assert_eq!(TemplateHelpers::plural_label("Category"), "Categories");
    /// ```
    #[must_use]
    pub fn plural_label(class_name: &str) -> String {
        let lower = class_name.to_lowercase();

        if ["s", "x", "z", "ch", "sh"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            return format!("{class_name}es");
        }

        let mut tail = lower.chars().rev();
        if let (Some('y'), Some(before)) = (tail.next(), tail.next()) {
            if !"aeiou".contains(before) {
                let stem = &class_name[..class_name.len() - 1];
                return format!("{stem}ies");
            }
        }

        format!("{class_name}s")
    }

    /// Human-readable label for a form field or table column
    ///
    /// # Examples
    ///
    /// ```
    /// # use ovelha::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::field_label("name"), "Name");
    /// assert_eq!(TemplateHelpers::field_label("birthDate"), "Birth Date");
    /// ```
    #[must_use]
    pub fn field_label(field_name: &str) -> String {
        let title = field_name.to_title_case();
        if title.is_empty() {
            Self::capitalize(field_name)
        } else {
            title
        }
    }

    /// Table name (`snake_case`)
    ///
    /// # Examples
    ///
    /// ```
    /// # use ovelha::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::table_name("Person"), "person");
    /// assert_eq!(TemplateHelpers::table_name("PetOwner"), "pet_owner");
    /// ```
    #[must_use]
    pub fn table_name(class_name: &str) -> String {
        class_name.to_case(Case::Snake)
    }

    /// Strip everything that cannot appear in a Java identifier
    ///
    /// # Examples
    ///
    /// ```
    /// # use ovelha::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::java_identifier("pet-shop_2"), "petshop2");
    /// ```
    #[must_use]
    pub fn java_identifier(input: &str) -> String {
        input.chars().filter(char::is_ascii_alphanumeric).collect()
    }

    /// Name of the synthesized Spring Boot application class
    ///
    /// # Examples
    ///
    /// ```
    /// # use ovelha::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::application_class("petshop"), "PetshopApplication");
    /// assert_eq!(TemplateHelpers::application_class("my-shop"), "MyshopApplication");
    /// ```
    #[must_use]
    pub fn application_class(project_name: &str) -> String {
        let base = Self::capitalize(&Self::java_identifier(project_name));
        if base.is_empty() {
            "Application".to_string()
        } else {
            format!("{base}Application")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(TemplateHelpers::lower_first("Person"), "person");
        assert_eq!(TemplateHelpers::lower_first("URL"), "uRL");
        assert_eq!(TemplateHelpers::lower_first(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(TemplateHelpers::capitalize("age"), "Age");
        assert_eq!(TemplateHelpers::capitalize("Age"), "Age");
        assert_eq!(TemplateHelpers::capitalize(""), "");
    }

    #[test]
    fn test_route_segment() {
        assert_eq!(TemplateHelpers::route_segment("Person"), "person");
        assert_eq!(TemplateHelpers::route_segment("HTTPRoute"), "httproute");
    }

    #[test]
    fn test_plural_label() {
        assert_eq!(TemplateHelpers::plural_label("Person"), "Persons");
        assert_eq!(TemplateHelpers::plural_label("Box"), "Boxes");
        assert_eq!(TemplateHelpers::plural_label("Church"), "Churches");
        assert_eq!(TemplateHelpers::plural_label("City"), "Cities");
        assert_eq!(TemplateHelpers::plural_label("Day"), "Days");
        assert_eq!(TemplateHelpers::plural_label("Y"), "Ys");
    }

    #[test]
    fn test_field_label() {
        assert_eq!(TemplateHelpers::field_label("age"), "Age");
        assert_eq!(TemplateHelpers::field_label("first_name"), "First Name");
    }

    #[test]
    fn test_table_name() {
        assert_eq!(TemplateHelpers::table_name("Pet"), "pet");
        assert_eq!(TemplateHelpers::table_name("PetOwner"), "pet_owner");
    }

    #[test]
    fn test_application_class() {
        assert_eq!(TemplateHelpers::application_class("shop"), "ShopApplication");
        assert_eq!(TemplateHelpers::application_class("--"), "Application");
    }

    proptest! {
        #[test]
        fn prop_route_segment_is_lowercase_and_stable(name in "[A-Za-z][A-Za-z0-9_]{0,24}") {
            let first = TemplateHelpers::route_segment(&name);
            prop_assert_eq!(&first, &TemplateHelpers::route_segment(&name));
            prop_assert_eq!(first.clone(), first.to_lowercase());
            prop_assert_eq!(first.len(), name.len());
        }

        #[test]
        fn prop_lower_first_then_capitalize_restores_ascii_names(name in "[A-Z][a-zA-Z0-9]{0,24}") {
            let restored = TemplateHelpers::capitalize(&TemplateHelpers::lower_first(&name));
            prop_assert_eq!(restored, name);
        }

        #[test]
        fn prop_plural_label_extends_name(name in "[A-Z][a-z]{0,16}") {
            let plural = TemplateHelpers::plural_label(&name);
            prop_assert!(plural.len() > name.len() - 1);
            prop_assert!(plural.ends_with('s'));
        }
    }
}
