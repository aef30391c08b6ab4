//! Localized field resolution
//!
//! Entities carry a base (Korean) value and an optional English variant.
//! English is used only when the variant is present and non-empty, so a
//! page never shows a blank name where a base value exists.

use crate::domain::entities::{Language, Project, Team};

/// An entity with a base name and an optional English name
pub trait LocalizedName {
    fn base_name(&self) -> &str;
    fn english_name(&self) -> Option<&str>;
}

/// An entity with a base description and an optional English description
pub trait LocalizedDescription {
    fn base_description(&self) -> &str;
    fn english_description(&self) -> Option<&str>;
}

impl LocalizedName for Project {
    fn base_name(&self) -> &str {
        &self.name
    }

    fn english_name(&self) -> Option<&str> {
        self.name_en.as_deref()
    }
}

impl LocalizedDescription for Project {
    fn base_description(&self) -> &str {
        &self.description
    }

    fn english_description(&self) -> Option<&str> {
        self.description_en.as_deref()
    }
}

impl LocalizedName for Team {
    fn base_name(&self) -> &str {
        &self.name
    }

    fn english_name(&self) -> Option<&str> {
        self.name_en.as_deref()
    }
}

impl LocalizedDescription for Team {
    fn base_description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    // Teams have no English description in the API schema
    fn english_description(&self) -> Option<&str> {
        None
    }
}

pub fn resolve_name<E: LocalizedName + ?Sized>(entity: &E, language: Language) -> &str {
    match language {
        Language::Ko => entity.base_name(),
        Language::En => prefer(entity.english_name(), entity.base_name()),
    }
}

pub fn resolve_description<E: LocalizedDescription + ?Sized>(
    entity: &E,
    language: Language,
) -> &str {
    match language {
        Language::Ko => entity.base_description(),
        Language::En => prefer(entity.english_description(), entity.base_description()),
    }
}

fn prefer<'a>(localized: Option<&'a str>, base: &'a str) -> &'a str {
    localized.filter(|s| !s.is_empty()).unwrap_or(base)
}
