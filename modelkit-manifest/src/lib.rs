//! Configuration and schema input for the modelkit model builder.
//!
//! - [`Config`] is read from `modelkit.toml` and passed explicitly to the
//!   build pipeline.
//! - [`Schema`] is the ordered set of model definitions read from YAML.
//! - [`Error`] is the error taxonomy shared by every modelkit crate.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod schema;

pub use config::{
    BuilderOptions, Config, ConfigFile, DEFAULT_AUTHOR, DEFAULT_PROJECT_NAME, GeneratorConfig,
    PathsConfig, PluginConfig, ProjectConfig,
};
pub use error::{Error, Result, SourceContext};
pub use schema::{
    ModelDefinition, PLUGIN_PACKAGE_SUFFIX, SCHEMA_GLOBALS, Schema, SchemaLoader, SchemaSource,
    YamlSchemaLoader, parse_models, prepare_schema, schema_sources,
};
