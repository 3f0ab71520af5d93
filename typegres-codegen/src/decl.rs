//! Intermediate declaration model.
//!
//! The generator first maps the schema into these declarations, then each
//! declaration renders itself through the [`Formatter`]. Keeping the phases
//! apart lets relation resolution be tested without inspecting text.

use crate::formatter::Formatter;

/// `export enum` declaration for one schema enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: String,
    pub members: Vec<String>,
}

impl EnumDecl {
    pub fn emit(&self, f: &mut Formatter) {
        f.write_line(&format!("export enum {} {{", self.name));
        f.start_indent();
        for member in &self.members {
            f.write_line(&format!("{},", member));
        }
        f.end_indent();
        f.write_line("};");
        f.write_line("");
    }
}

/// One field of a record declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Rendered verbatim; column types are opaque to the generator.
    pub ty: String,
    pub optional: bool,
}

impl Field {
    fn emit(&self, f: &mut Formatter) {
        let marker = if self.optional { "?" } else { "" };
        f.write_line(&format!("{}{}: {},", self.name, marker, self.ty));
    }
}

/// Which side of a foreign key a link was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    One,
    Many,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::One => "one",
            RelationKind::Many => "many",
        }
    }
}

/// A resolved relation edge, rendered as one variant of the `__links` union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub kind: RelationKind,
    pub dest_table: String,
    pub dest_column: Vec<String>,
    pub src_column: Vec<String>,
}

impl Link {
    fn emit(&self, f: &mut Formatter) {
        f.write_line(&format!(
            "{{ type: '{}', destTable: '{}', destColumn: '{}', srcColumn: '{}' }}",
            self.kind.as_str(),
            self.dest_table,
            self.dest_column.join(","),
            self.src_column.join(","),
        ));
    }
}

/// `export type` declaration describing one table's row shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDecl {
    /// Generated type name (pascal-cased table name).
    pub type_name: String,
    /// Source table name, kept as the `__tableName` discriminant so a value
    /// is traceable back to its table at runtime.
    pub table_name: String,
    pub fields: Vec<Field>,
    /// Inline one-to-one reference fields, `simple` mode only.
    pub one_to_one_fields: Vec<Field>,
    /// Inline one-to-many collection fields, `simple` mode only.
    pub one_to_many_fields: Vec<Field>,
    /// Link union variants, `links` mode only.
    pub links: Vec<Link>,
}

impl RecordDecl {
    pub fn emit(&self, f: &mut Formatter) {
        f.write_line(&format!("export type {} = {{", self.type_name));
        f.start_indent();
        f.write_line(&format!("__tableName: '{}',", self.table_name));
        for field in &self.fields {
            field.emit(f);
        }
        for group in [&self.one_to_one_fields, &self.one_to_many_fields] {
            if !group.is_empty() {
                f.write_line("");
                for field in group {
                    field.emit(f);
                }
            }
        }
        if !self.links.is_empty() {
            f.write_line("__links:");
            f.start_indent();
            f.join(&self.links, " |", |f, link| link.emit(f));
            f.end_indent();
            // Trailing comma lands on the last variant's line.
            f.write(",");
        }
        f.end_indent();
        f.write_line("};");
        f.write_line("");
    }
}

/// Terminal union of every record type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDecl {
    pub name: String,
    pub variants: Vec<String>,
}

impl UnionDecl {
    pub fn emit(&self, f: &mut Formatter) {
        // An empty table set emits nothing at all, not a bare header.
        if self.variants.is_empty() {
            return;
        }
        f.write_line(&format!("export type {} =", self.name));
        f.start_indent();
        for (index, variant) in self.variants.iter().enumerate() {
            if index + 1 < self.variants.len() {
                f.write_line(&format!("{} |", variant));
            } else {
                f.write_line(variant);
            }
        }
        f.end_indent();
    }
}
