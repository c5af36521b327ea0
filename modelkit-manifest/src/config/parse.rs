//! Configuration parsing from files and strings.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use super::{BuilderOptions, Config, GeneratorConfig, PathsConfig, PluginConfig, ProjectConfig};
use crate::{Error, Result, error::SourceContext};

const DEFAULT_PREPARED_SCHEMA: &str = "cache/modelkit/schema.yml";

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    project: ProjectConfig,
    #[serde(default)]
    paths: RawPaths,
    #[serde(default)]
    builder: BuilderOptions,
    #[serde(default)]
    generator: RawGenerator,
    #[serde(default)]
    plugins: Vec<PluginConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPaths {
    models: Option<PathBuf>,
    schema: Option<PathBuf>,
    prepared_schema: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RawGenerator {
    command: Option<String>,
    #[serde(default)]
    args: Vec<String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "modelkit.toml", Path::new("."))
    }
}

impl Config {
    /// Parse configuration content, resolving paths against `root`.
    pub fn from_str_with_root(content: &str, filename: &str, root: &Path) -> Result<Self> {
        parse_config(content, filename, root)
    }
}

/// Directory that relative configuration paths are resolved against.
pub(crate) fn project_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn parse_config(content: &str, filename: &str, root: &Path) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawConfig = toml::from_str(content).map_err(|e| ctx.config_error(e))?;

    let models = raw.paths.models.ok_or_else(|| ctx.missing_key("paths.models"))?;
    let schema = raw.paths.schema.ok_or_else(|| ctx.missing_key("paths.schema"))?;
    let prepared_schema = raw
        .paths
        .prepared_schema
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PREPARED_SCHEMA));
    let command = raw
        .generator
        .command
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ctx.missing_key("generator.command"))?;

    let plugins = raw
        .plugins
        .into_iter()
        .map(|plugin| PluginConfig {
            schema: root.join(plugin.schema),
            name: plugin.name,
        })
        .collect();

    Ok(Config {
        project: raw.project,
        paths: PathsConfig {
            models: root.join(models),
            schema: root.join(schema),
            prepared_schema: root.join(prepared_schema),
        },
        builder: raw.builder,
        generator: GeneratorConfig {
            command,
            args: raw.generator.args,
        },
        plugins,
    })
}
