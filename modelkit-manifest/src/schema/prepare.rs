//! Merging project and plugin schema files into a single document.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;
use serde_yaml::{Mapping, Value};

use super::{PLUGIN_PACKAGE_SUFFIX, Schema, parse_models};
use crate::{Error, PluginConfig, Result};

/// A schema file and the plugin it belongs to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
    pub path: PathBuf,
    pub plugin: Option<String>,
}

/// Resolve every schema file for a project, plugin schemas first.
///
/// Each location may be a single file or a directory whose `*.yml` and
/// `*.yaml` files are read in name order.
pub fn schema_sources(project_schema: &Path, plugins: &[PluginConfig]) -> Result<Vec<SchemaSource>> {
    let mut sources = Vec::new();

    for plugin in plugins {
        for path in schema_files(&plugin.schema)? {
            sources.push(SchemaSource {
                path,
                plugin: Some(plugin.name.clone()),
            });
        }
    }

    for path in schema_files(project_schema)? {
        sources.push(SchemaSource { path, plugin: None });
    }

    Ok(sources)
}

fn schema_files(location: &Path) -> Result<Vec<PathBuf>> {
    if location.is_file() {
        return Ok(vec![location.to_path_buf()]);
    }
    if !location.is_dir() {
        return Err(Box::new(Error::SchemaNotFound {
            path: location.to_path_buf(),
        }));
    }

    let entries = std::fs::read_dir(location).map_err(|e| Error::read(location, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::read(location, e))?.path();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yml" || ext == "yaml");
        if is_yaml && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Merge all sources into one schema and write it to `output`.
///
/// Definitions of the same model are deep-merged in source order. A model
/// first seen in a plugin schema without a `package` is assigned to that
/// plugin.
pub fn prepare_schema(sources: &[SchemaSource], output: &Path) -> Result<Schema> {
    let mut merged: IndexMap<String, Mapping> = IndexMap::new();

    for source in sources {
        let content =
            std::fs::read_to_string(&source.path).map_err(|e| Error::read(&source.path, e))?;
        let models = parse_models(&content, &source.path)?;
        debug!(
            "Merging {} models from {}",
            models.len(),
            source.path.display()
        );

        for (name, definition) in models {
            let entry = merged.entry(name).or_default();
            deep_merge(entry, definition);

            if let Some(plugin) = &source.plugin {
                if !entry.contains_key("package") {
                    entry.insert(
                        Value::from("package"),
                        Value::from(format!("{plugin}{PLUGIN_PACKAGE_SUFFIX}")),
                    );
                }
            }
        }
    }

    let document: Mapping = merged
        .iter()
        .map(|(name, definition)| (Value::from(name.as_str()), Value::Mapping(definition.clone())))
        .collect();
    let yaml = serde_yaml::to_string(&document).map_err(|e| {
        Box::new(Error::InvalidSchema {
            path: output.to_path_buf(),
            message: e.to_string(),
        })
    })?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;
    }
    std::fs::write(output, yaml).map_err(|e| Error::write(output, e))?;

    Ok(Schema::from_models(merged))
}

fn deep_merge(base: &mut Mapping, overlay: Mapping) {
    for (key, value) in overlay {
        if let Value::Mapping(incoming) = value {
            if let Some(Value::Mapping(existing)) = base.get_mut(&key) {
                deep_merge(existing, incoming);
                continue;
            }
            base.insert(key, Value::Mapping(incoming));
        } else {
            base.insert(key, value);
        }
    }
}
