use std::path::Path;

use indexmap::IndexMap;
use log::{debug, warn};
use serde_yaml::{Mapping, Value};

use super::{SCHEMA_GLOBALS, Schema};
use crate::{Error, Result, error::SourceContext};

/// Loads a model schema from a path.
///
/// The build pipeline only depends on this trait so it can be driven by an
/// in-memory schema in tests.
pub trait SchemaLoader {
    fn load(&self, path: &Path) -> Result<Schema>;
}

/// Loads a single YAML schema document from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSchemaLoader;

impl SchemaLoader for YamlSchemaLoader {
    fn load(&self, path: &Path) -> Result<Schema> {
        if !path.is_file() {
            return Err(Box::new(Error::SchemaNotFound {
                path: path.to_path_buf(),
            }));
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let models = parse_models(&content, path)?;
        debug!("Loaded {} models from {}", models.len(), path.display());
        Ok(Schema::from_models(models))
    }
}

/// Parse a schema document into model definitions.
///
/// Schema globals are removed from the top level and merged into every
/// model, with the model's own keys taking precedence.
pub fn parse_models(content: &str, path: &Path) -> Result<IndexMap<String, Mapping>> {
    let ctx = SourceContext::new(content, path.display().to_string());
    let document: Value = serde_yaml::from_str(content).map_err(|e| ctx.schema_error(e))?;

    let document = match document {
        Value::Null => return Ok(IndexMap::new()),
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(Box::new(Error::InvalidSchema {
                path: path.to_path_buf(),
                message: "expected a mapping of model names to definitions".to_string(),
            }));
        }
    };

    let mut globals = Mapping::new();
    let mut declared = Vec::new();

    for (key, value) in document {
        let Some(name) = key.as_str() else {
            warn!("Skipping non-string schema key in {}", ctx.filename());
            continue;
        };

        if SCHEMA_GLOBALS.contains(&name) {
            globals.insert(key, value);
            continue;
        }

        match value {
            Value::Mapping(definition) => declared.push((name.to_string(), definition)),
            _ => warn!("Skipping '{}' in {}: not a model definition", name, ctx.filename()),
        }
    }

    let models = declared
        .into_iter()
        .map(|(name, definition)| {
            let mut merged = globals.clone();
            for (key, value) in definition {
                merged.insert(key, value);
            }
            (name, merged)
        })
        .collect();

    Ok(models)
}
