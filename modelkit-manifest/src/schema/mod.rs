//! YAML model schema.
//!
//! A schema is an ordered mapping of model name to model definition. Only the
//! parts the model builder needs are typed (the `package` attribute); the
//! rest of each definition is kept as raw YAML.

mod loader;
mod prepare;

use indexmap::IndexMap;
pub use loader::{SchemaLoader, YamlSchemaLoader, parse_models};
pub use prepare::{SchemaSource, prepare_schema, schema_sources};
use serde_yaml::Mapping;

/// Top-level schema keys that apply to every model in a file rather than
/// declaring a model of their own.
pub const SCHEMA_GLOBALS: &[&str] = &[
    "connection",
    "attributes",
    "templates",
    "actAs",
    "options",
    "package",
    "package_custom_path",
    "inheritance",
    "detect_relations",
];

/// Suffix appended to a plugin name to form the package of its models.
pub const PLUGIN_PACKAGE_SUFFIX: &str = ".lib.model.doctrine";

/// A single model as declared in the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDefinition {
    name: String,
    attributes: Mapping,
}

impl ModelDefinition {
    pub fn new(name: impl Into<String>, attributes: Mapping) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// The model (record type) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw definition.
    pub fn attributes(&self) -> &Mapping {
        &self.attributes
    }

    /// The `package` attribute, e.g. `sfGuardPlugin.lib.model.doctrine`.
    pub fn package(&self) -> Option<&str> {
        self.attributes.get("package").and_then(|v| v.as_str())
    }

    /// The package text before its first `.`.
    ///
    /// `None` when the model has no package. A package without a dot yields
    /// an empty segment.
    pub fn plugin_segment(&self) -> Option<&str> {
        self.package()
            .map(|package| package.find('.').map_or("", |idx| &package[..idx]))
    }
}

/// Ordered collection of model definitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    models: IndexMap<String, ModelDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from definitions keyed by model name, keeping order.
    pub fn from_models(models: IndexMap<String, Mapping>) -> Self {
        let models = models
            .into_iter()
            .map(|(name, attributes)| {
                let definition = ModelDefinition::new(name.clone(), attributes);
                (name, definition)
            })
            .collect();
        Self { models }
    }

    /// Add a model, replacing any previous definition with the same name.
    pub fn insert(&mut self, definition: ModelDefinition) {
        self.models.insert(definition.name.clone(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
        self.models.get(name)
    }

    /// Iterate models in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelDefinition> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
