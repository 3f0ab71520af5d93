//! Generation configuration.

use std::{fmt, str::FromStr};

use regex::{Regex, RegexBuilder};

use crate::{
    indent::Indent,
    naming::{camel_case, pascal_case, snake_case},
};

/// How relation edges surface in a record declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelationMode {
    /// Relations are ignored.
    #[default]
    None,
    /// One optional field per edge.
    Simple,
    /// All edges collected into a single `__links` union field.
    Links,
}

impl RelationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationMode::None => "none",
            RelationMode::Simple => "simple",
            RelationMode::Links => "links",
        }
    }
}

impl fmt::Display for RelationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RelationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(RelationMode::None),
            "simple" => Ok(RelationMode::Simple),
            "links" => Ok(RelationMode::Links),
            _ => Err(format!(
                "unknown relation mode '{}', expected 'none', 'simple', or 'links'",
                s
            )),
        }
    }
}

/// Identifier casing applied to generated column field names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnTransform {
    /// Keep the source spelling.
    #[default]
    None,
    Pascal,
    Snake,
    Camel,
}

impl ColumnTransform {
    /// Apply the transform to an identifier.
    pub fn apply(&self, name: &str) -> String {
        match self {
            ColumnTransform::None => name.to_string(),
            ColumnTransform::Pascal => pascal_case(name),
            ColumnTransform::Snake => snake_case(name),
            ColumnTransform::Camel => camel_case(name),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnTransform::None => "none",
            ColumnTransform::Pascal => "pascal_case",
            ColumnTransform::Snake => "snake_case",
            ColumnTransform::Camel => "camel_case",
        }
    }
}

impl fmt::Display for ColumnTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnTransform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ColumnTransform::None),
            "pascal_case" => Ok(ColumnTransform::Pascal),
            "snake_case" => Ok(ColumnTransform::Snake),
            "camel_case" => Ok(ColumnTransform::Camel),
            _ => Err(format!(
                "unknown column transform '{}', expected 'none', 'pascal_case', 'snake_case', or 'camel_case'",
                s
            )),
        }
    }
}

/// Immutable per-run configuration for one generation pass.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Tables whose name matches any pattern are omitted from output.
    /// Filtering is output-only: foreign keys still see the whole schema.
    pub exclude_tables: Vec<Regex>,
    pub one_to_one: RelationMode,
    pub one_to_many: RelationMode,
    pub column_transform: ColumnTransform,
    pub indent: Indent,
}

impl GeneratorConfig {
    /// Compile one case-insensitive exclusion pattern.
    pub fn exclude_pattern(pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(pattern).case_insensitive(true).build()
    }

    pub(crate) fn is_excluded(&self, table_name: &str) -> bool {
        self.exclude_tables.iter().any(|re| re.is_match(table_name))
    }
}
