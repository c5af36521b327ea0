use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for modelkit operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the content and filename of a parsed document so parse errors can
/// point at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a schema parse error from a yaml error.
    pub fn schema_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source.location().map(|loc| SourceSpan::from(loc.index()));
        Box::new(Error::SchemaParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a missing configuration key error.
    pub fn missing_key(&self, key: &str) -> Box<Error> {
        Box::new(Error::Configuration {
            key: key.to_string(),
            filename: self.filename.clone(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to {action} '{path}'")]
    #[diagnostic(code(modelkit::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema not found at '{path}'")]
    #[diagnostic(
        code(modelkit::schema_not_found),
        help("check 'paths.schema' and the [[plugins]] entries in modelkit.toml")
    )]
    SchemaNotFound { path: PathBuf },

    #[error("failed to parse schema")]
    #[diagnostic(code(modelkit::schema_parse))]
    SchemaParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid schema '{path}': {message}")]
    #[diagnostic(code(modelkit::invalid_schema))]
    InvalidSchema { path: PathBuf, message: String },

    #[error("failed to parse configuration")]
    #[diagnostic(code(modelkit::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required configuration key '{key}'")]
    #[diagnostic(code(modelkit::configuration), help("set '{key}' in {filename}"))]
    Configuration { key: String, filename: String },

    #[error("model generator '{command}' failed: {message}")]
    #[diagnostic(code(modelkit::generation))]
    Generation { command: String, message: String },

    #[error("invalid file pattern '{pattern}': {message}")]
    #[diagnostic(code(modelkit::invalid_pattern))]
    InvalidPattern { pattern: String, message: String },
}

impl Error {
    /// Create a read error for the given path
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            action: "read",
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Create a write error for the given path
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            action: "write",
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Create a generation error
    pub fn generation(command: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Generation {
            command: command.into(),
            message: message.into(),
        })
    }
}
