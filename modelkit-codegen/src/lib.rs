//! Post-processing of generated Doctrine model classes.
//!
//! # Module Organization
//!
//! - [`annotate`] - `@method` accessor documentation for base classes
//! - [`tokens`] - ordered literal token replacement
//! - [`finder`] - file enumeration capability and its walkdir implementation
//! - [`generator`] - the external model generator capability
//! - [`build`] - the build-model pipeline tying the above together

pub mod annotate;
pub mod build;
pub mod file;
pub mod finder;
pub mod generator;
pub mod naming;
pub mod paths;
pub mod tokens;

pub use annotate::{
    AccessorDocAnnotator, AccessorDocLine, AccessorDocs, AccessorKind, PropertyDeclaration,
    PropertyTags,
};
pub use build::{AnnotatedFile, BuildOutcome, DEFAULT_ENV, ModelBuilder};
pub use file::SourceFile;
pub use finder::{EntryKind, FileFinder, FindFilter, VCS_DIRS, WalkdirFinder};
pub use generator::{CommandGenerator, GenerateRequest, ModelGenerator, SCHEMA_FORMAT};
pub use naming::camelize;
pub use tokens::{TokenMap, replace_tokens};
