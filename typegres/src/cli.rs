//! Command-line interface.

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::{CommandFactory, Parser};
use eyre::{Context, Result, bail};
use regex::Regex;
use typegres_codegen::{ColumnTransform, Generator, GeneratorConfig, Indent, RelationMode};
use typegres_schema::SchemaDescription;

/// Extension trait for exiting on snapshot errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typegres_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "typegres")]
#[command(version)]
#[command(about = "Generate TypeScript types from a database schema snapshot")]
pub(crate) struct Cli {
    /// Path to the schema snapshot JSON, or '-' to read stdin
    #[arg(value_name = "SCHEMA", required_unless_present = "completions")]
    schema: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Exclude tables matching a pattern (case-insensitive regex, repeatable)
    #[arg(long = "exclude-table", value_name = "PATTERN", value_parser = parse_exclude_pattern)]
    exclude_table: Vec<Regex>,

    /// How to surface one-to-one relations
    #[arg(long = "one2one-relations", value_name = "MODE", default_value_t = RelationMode::None)]
    one2one_relations: RelationMode,

    /// How to surface one-to-many relations
    #[arg(long = "one2many-relations", value_name = "MODE", default_value_t = RelationMode::None)]
    one2many_relations: RelationMode,

    /// Casing applied to generated column names
    #[arg(long = "column-transform", value_name = "TRANSFORM", default_value_t = ColumnTransform::None)]
    column_transform: ColumnTransform,

    /// Indentation unit: 2, 4, 8, or 'tab'
    #[arg(long, value_name = "UNIT", default_value = "4")]
    indent: Indent,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        if let Some(shell) = self.completions {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "typegres", &mut io::stdout());
            return Ok(());
        }

        let path = match &self.schema {
            Some(path) => path,
            // clap enforces the argument when --completions is absent
            None => bail!("missing schema snapshot path"),
        };
        let schema = load_schema(path)?;

        let config = GeneratorConfig {
            exclude_tables: self.exclude_table.clone(),
            one_to_one: self.one2one_relations,
            one_to_many: self.one2many_relations,
            column_transform: self.column_transform,
            indent: self.indent,
        };

        let output = Generator::new(&schema, &config).generate();

        match &self.output {
            Some(path) => fs::write(path, &output)
                .wrap_err_with(|| format!("failed to write '{}'", path.display()))?,
            None => io::stdout()
                .write_all(output.as_bytes())
                .wrap_err("failed to write to stdout")?,
        }

        Ok(())
    }
}

fn load_schema(path: &Path) -> Result<SchemaDescription> {
    if path == Path::new("-") {
        let mut src = String::new();
        io::stdin()
            .read_to_string(&mut src)
            .wrap_err("failed to read schema from stdin")?;
        Ok(SchemaDescription::parse(&src, "<stdin>").unwrap_or_exit())
    } else {
        Ok(SchemaDescription::open(path).unwrap_or_exit())
    }
}

fn parse_exclude_pattern(pattern: &str) -> Result<Regex, String> {
    GeneratorConfig::exclude_pattern(pattern).map_err(|e| e.to_string())
}
