//! Project configuration read from modelkit.toml.

mod builder;
mod file;
mod parse;

use std::path::PathBuf;

pub use builder::BuilderOptions;
pub use file::ConfigFile;
use serde::Deserialize;

/// Fallback for `##PACKAGE##` when the project has no name.
pub const DEFAULT_PROJECT_NAME: &str = "symfony";

/// Fallback for `##NAME##` when the project has no author.
pub const DEFAULT_AUTHOR: &str = "Your name here";

/// Fully resolved configuration for a build-model run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project properties used for token replacement
    pub project: ProjectConfig,

    /// Filesystem locations, resolved against the project root
    pub paths: PathsConfig,

    /// Options shared with the model generator
    pub builder: BuilderOptions,

    /// External model generator invocation
    pub generator: GeneratorConfig,

    /// Plugins contributing schema files
    pub plugins: Vec<PluginConfig>,
}

/// Project properties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    pub name: Option<String>,
    pub author: Option<String>,
}

impl ProjectConfig {
    /// Project name, or the framework default when unset.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME)
    }

    /// Project author, or a placeholder when unset.
    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or(DEFAULT_AUTHOR)
    }
}

#[derive(Debug, Clone)]
pub struct PathsConfig {
    /// Root directory of generated model classes
    pub models: PathBuf,
    /// Project schema file or directory of schema files
    pub schema: PathBuf,
    /// Where the merged schema is written before generation
    pub prepared_schema: PathBuf,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Program to run
    pub command: String,
    /// Arguments, with `{placeholder}` expansion applied at run time
    pub args: Vec<String>,
}

/// A plugin whose schema files are merged into the project schema.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginConfig {
    pub name: String,
    pub schema: PathBuf,
}
