//! External schema-to-model importer.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use log::{debug, info};
use modelkit_manifest::{BuilderOptions, Error, GeneratorConfig, Result};

/// Format tag passed to the importer for YAML schemas.
pub const SCHEMA_FORMAT: &str = "yml";

/// Everything the importer needs to materialize model classes.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    /// Prepared schema document
    pub schema: &'a Path,
    /// Schema format tag
    pub format: &'a str,
    /// Output root for model classes
    pub models: &'a Path,
    pub options: &'a BuilderOptions,
    pub application: Option<&'a str>,
    pub env: &'a str,
}

/// Generates model classes from a schema.
pub trait ModelGenerator {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<()>;
}

/// Runs an external importer command and waits for it to exit.
///
/// Arguments may contain `{schema}`, `{format}`, `{models}`, `{suffix}`,
/// `{base_dir}`, `{application}` and `{env}` placeholders.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl CommandGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            program: config.command.clone(),
            args: config.args.clone(),
            current_dir: None,
        }
    }

    /// Run the importer from `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Arguments with placeholders substituted.
    pub fn expand_args(&self, request: &GenerateRequest<'_>) -> Vec<String> {
        let schema = request.schema.display().to_string();
        let models = request.models.display().to_string();
        let substitutions = [
            ("{schema}", schema.as_str()),
            ("{format}", request.format),
            ("{models}", models.as_str()),
            ("{suffix}", request.options.suffix.as_str()),
            ("{base_dir}", request.options.base_classes_directory.as_str()),
            ("{application}", request.application.unwrap_or_default()),
            ("{env}", request.env),
        ];

        self.args
            .iter()
            .map(|arg| {
                substitutions
                    .iter()
                    .fold(arg.clone(), |acc, (placeholder, value)| {
                        acc.replace(placeholder, value)
                    })
            })
            .collect()
    }
}

impl ModelGenerator for CommandGenerator {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<()> {
        let args = self.expand_args(request);
        info!("Running model generator: {} {}", self.program, args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(&args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|e| Error::generation(&self.program, format!("failed to run: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            debug!("generator: {}", line);
        }

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::generation(
                &self.program,
                format!("{}\n{}", output.status, stderr.trim_end()),
            ))
        }
    }
}
