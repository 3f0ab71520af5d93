//! Schema-to-declaration mapping.

use typegres_schema::{ForeignKey, SchemaDescription, Table};

use crate::{
    config::{GeneratorConfig, RelationMode},
    decl::{EnumDecl, Field, Link, RecordDecl, RelationKind, UnionDecl},
    formatter::Formatter,
    naming::{pascal_case, pluralize, remove_id},
};

/// Declarations for one generation pass, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarations {
    pub enums: Vec<EnumDecl>,
    pub records: Vec<RecordDecl>,
    pub union: UnionDecl,
}

/// Maps a schema snapshot to TypeScript declarations.
///
/// A pure function of (schema, config): no validation, no I/O, no fallible
/// paths. Inconsistent input degrades silently — a foreign key naming an
/// unknown or excluded table yields a declaration referencing a type that
/// does not exist, and composite keys are skipped by simple one-to-one
/// resolution.
pub struct Generator<'a> {
    schema: &'a SchemaDescription,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a SchemaDescription, config: &'a GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Run the full pass and render the final text.
    pub fn generate(&self) -> String {
        let decls = self.declarations();
        let mut formatter = Formatter::new(self.config.indent);
        for decl in &decls.enums {
            decl.emit(&mut formatter);
        }
        for decl in &decls.records {
            decl.emit(&mut formatter);
        }
        decls.union.emit(&mut formatter);
        formatter.finish()
    }

    /// Build the intermediate declarations without rendering them.
    pub fn declarations(&self) -> Declarations {
        let enums = self
            .schema
            .enums
            .iter()
            .map(|(name, members)| EnumDecl {
                name: name.clone(),
                members: members.clone(),
            })
            .collect();

        // Exclusion filters output only. Relation resolution below still
        // sees every foreign key, so a kept table may reference an excluded
        // type.
        let tables: Vec<&Table> = self
            .schema
            .tables
            .iter()
            .filter(|table| !self.config.is_excluded(&table.table_name))
            .collect();

        let records = tables.iter().map(|table| self.record(table)).collect();

        let union = UnionDecl {
            name: "Tables".to_string(),
            variants: tables
                .iter()
                .map(|table| pascal_case(&table.table_name))
                .collect(),
        };

        Declarations {
            enums,
            records,
            union,
        }
    }

    fn record(&self, table: &Table) -> RecordDecl {
        let transform = self.config.column_transform;

        let fields = table
            .columns
            .iter()
            .map(|col| Field {
                name: transform.apply(&col.name),
                ty: col.ty.clone(),
                optional: col.nullable,
            })
            .collect();

        let mut one_to_one_fields = Vec::new();
        let mut one_to_many_fields = Vec::new();
        let mut links = Vec::new();

        match self.config.one_to_one {
            RelationMode::None => {}
            RelationMode::Simple => {
                one_to_one_fields = self
                    .one_to_one_refs(table)
                    .map(|fk| Field {
                        name: transform.apply(remove_id(&fk.from_column[0])),
                        // Referenced table name passes through raw; a dangling
                        // reference is the caller's problem.
                        ty: fk.to_table.clone(),
                        optional: true,
                    })
                    .collect();
            }
            RelationMode::Links => {
                links.extend(self.one_to_one_refs(table).map(|fk| Link {
                    kind: RelationKind::One,
                    dest_table: fk.to_table.clone(),
                    dest_column: fk.to_column.clone(),
                    src_column: fk.from_column.clone(),
                }));
            }
        }

        match self.config.one_to_many {
            RelationMode::None => {}
            RelationMode::Simple => {
                one_to_many_fields = self
                    .one_to_many_refs(table)
                    .map(|fk| Field {
                        name: pluralize(&transform.apply(&fk.from_table)),
                        ty: format!("{}[]", fk.from_table),
                        optional: true,
                    })
                    .collect();
            }
            RelationMode::Links => {
                links.extend(self.one_to_many_refs(table).map(|fk| Link {
                    kind: RelationKind::Many,
                    dest_table: fk.from_table.clone(),
                    dest_column: fk.from_column.clone(),
                    src_column: fk.to_column.clone(),
                }));
            }
        }

        RecordDecl {
            type_name: pascal_case(&table.table_name),
            table_name: table.table_name.clone(),
            fields,
            one_to_one_fields,
            one_to_many_fields,
            links,
        }
    }

    /// Foreign keys leaving `table`. Only single-column keys resolve as
    /// one-to-one.
    fn one_to_one_refs(&self, table: &Table) -> impl Iterator<Item = &ForeignKey> {
        let name = table.table_name.clone();
        self.schema
            .foreign_keys
            .iter()
            .filter(move |fk| fk.from_table == name && fk.is_single_column())
    }

    /// Foreign keys arriving at `table`, composite keys included.
    fn one_to_many_refs(&self, table: &Table) -> impl Iterator<Item = &ForeignKey> {
        let name = table.table_name.clone();
        self.schema
            .foreign_keys
            .iter()
            .filter(move |fk| fk.to_table == name)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::config::ColumnTransform;

    fn schema() -> SchemaDescription {
        SchemaDescription::from_str(
            r#"{
                "tables": [
                    { "table_name": "users", "columns": [{ "name": "id", "type": "number" }] },
                    {
                        "table_name": "posts",
                        "columns": [
                            { "name": "id", "type": "number" },
                            { "name": "user_id", "type": "number" }
                        ]
                    }
                ],
                "foreign_keys": [
                    {
                        "from_table": "posts",
                        "from_column": ["user_id"],
                        "to_table": "users",
                        "to_column": ["id"]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    fn declarations(config: &GeneratorConfig) -> Declarations {
        let schema = schema();
        Generator::new(&schema, config).declarations()
    }

    #[test]
    fn test_records_match_filtered_tables() {
        let decls = declarations(&GeneratorConfig::default());
        let names: Vec<&str> = decls.records.iter().map(|r| r.type_name.as_str()).collect();
        assert_eq!(names, ["Users", "Posts"]);
        assert_eq!(decls.union.variants, ["Users", "Posts"]);
    }

    #[test]
    fn test_no_relation_fields_by_default() {
        let decls = declarations(&GeneratorConfig::default());
        for record in &decls.records {
            assert!(record.one_to_one_fields.is_empty());
            assert!(record.one_to_many_fields.is_empty());
            assert!(record.links.is_empty());
        }
    }

    #[test]
    fn test_one_to_one_simple_strips_id_suffix() {
        let config = GeneratorConfig {
            one_to_one: RelationMode::Simple,
            ..Default::default()
        };
        let decls = declarations(&config);
        let posts = &decls.records[1];
        assert_eq!(posts.one_to_one_fields.len(), 1);
        let field = &posts.one_to_one_fields[0];
        assert_eq!(field.name, "user");
        assert_eq!(field.ty, "users");
        assert!(field.optional);
        // The referenced side gains nothing in one-to-one mode.
        assert!(decls.records[0].one_to_one_fields.is_empty());
    }

    #[test]
    fn test_one_to_many_simple_pluralizes_source_table() {
        let config = GeneratorConfig {
            one_to_many: RelationMode::Simple,
            ..Default::default()
        };
        let decls = declarations(&config);
        let users = &decls.records[0];
        assert_eq!(users.one_to_many_fields.len(), 1);
        let field = &users.one_to_many_fields[0];
        assert_eq!(field.name, "postses");
        assert_eq!(field.ty, "posts[]");
        assert!(field.optional);
    }

    #[test]
    fn test_one_to_one_links() {
        let config = GeneratorConfig {
            one_to_one: RelationMode::Links,
            ..Default::default()
        };
        let decls = declarations(&config);
        let posts = &decls.records[1];
        assert!(posts.one_to_one_fields.is_empty());
        assert_eq!(
            posts.links,
            vec![Link {
                kind: RelationKind::One,
                dest_table: "users".into(),
                dest_column: vec!["id".into()],
                src_column: vec!["user_id".into()],
            }]
        );
    }

    #[test]
    fn test_one_to_many_links() {
        let config = GeneratorConfig {
            one_to_many: RelationMode::Links,
            ..Default::default()
        };
        let decls = declarations(&config);
        let users = &decls.records[0];
        assert_eq!(
            users.links,
            vec![Link {
                kind: RelationKind::Many,
                dest_table: "posts".into(),
                dest_column: vec!["user_id".into()],
                src_column: vec!["id".into()],
            }]
        );
    }

    #[test]
    fn test_composite_keys_skipped_in_simple_one_to_one() {
        let schema = SchemaDescription::from_str(
            r#"{
                "tables": [
                    { "table_name": "orders", "columns": [] },
                    { "table_name": "order_lines", "columns": [] }
                ],
                "foreign_keys": [
                    {
                        "from_table": "order_lines",
                        "from_column": ["order_id", "region"],
                        "to_table": "orders",
                        "to_column": ["id", "region"]
                    }
                ]
            }"#,
        )
        .unwrap();
        let config = GeneratorConfig {
            one_to_one: RelationMode::Simple,
            one_to_many: RelationMode::Simple,
            ..Default::default()
        };
        let decls = Generator::new(&schema, &config).declarations();
        // Composite key: skipped for one-to-one, kept for one-to-many.
        assert!(decls.records[1].one_to_one_fields.is_empty());
        assert_eq!(decls.records[0].one_to_many_fields.len(), 1);
        assert_eq!(decls.records[0].one_to_many_fields[0].ty, "order_lines[]");
    }

    #[test]
    fn test_column_transform_applies_to_relation_field_names() {
        let config = GeneratorConfig {
            one_to_one: RelationMode::Simple,
            column_transform: ColumnTransform::Pascal,
            ..Default::default()
        };
        let decls = declarations(&config);
        let posts = &decls.records[1];
        assert_eq!(posts.fields[1].name, "UserId");
        assert_eq!(posts.one_to_one_fields[0].name, "User");
    }

    #[test]
    fn test_exclusion_keeps_relations_dangling() {
        let config = GeneratorConfig {
            exclude_tables: vec![GeneratorConfig::exclude_pattern("^users$").unwrap()],
            one_to_one: RelationMode::Simple,
            ..Default::default()
        };
        let decls = declarations(&config);
        let names: Vec<&str> = decls.records.iter().map(|r| r.type_name.as_str()).collect();
        assert_eq!(names, ["Posts"]);
        assert_eq!(decls.union.variants, ["Posts"]);
        // The relation still points at the excluded type.
        assert_eq!(decls.records[0].one_to_one_fields[0].ty, "users");
    }

    #[test]
    fn test_dangling_foreign_key_passes_through() {
        let schema = SchemaDescription::from_str(
            r#"{
                "tables": [{ "table_name": "posts", "columns": [] }],
                "foreign_keys": [
                    {
                        "from_table": "posts",
                        "from_column": ["ghost_id"],
                        "to_table": "ghosts",
                        "to_column": ["id"]
                    }
                ]
            }"#,
        )
        .unwrap();
        let config = GeneratorConfig {
            one_to_one: RelationMode::Simple,
            ..Default::default()
        };
        let decls = Generator::new(&schema, &config).declarations();
        assert_eq!(decls.records[0].one_to_one_fields[0].ty, "ghosts");
    }
}
