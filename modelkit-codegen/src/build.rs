//! The build-model pipeline.
//!
//! 1. snapshot existing stub classes
//! 2. merge project and plugin schemas into the prepared schema
//! 3. run the model generator
//! 4. document magic accessors in every base class
//! 5. replace tokens in new stub classes, then in all base classes

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use log::{debug, info};
use modelkit_manifest::{Config, Result, SchemaLoader, prepare_schema, schema_sources};

use crate::{
    annotate::AccessorDocAnnotator,
    file::SourceFile,
    finder::{FileFinder, FindFilter},
    generator::{GenerateRequest, ModelGenerator, SCHEMA_FORMAT},
    paths::{base_class_path, subpackage_name},
    tokens::{SUBPACKAGE, TokenMap, replace_tokens},
};

/// Default environment name.
pub const DEFAULT_ENV: &str = "dev";

/// A base class that received accessor documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedFile {
    pub model: String,
    pub path: PathBuf,
    /// Number of `@method` lines added
    pub accessors: usize,
}

/// What a build-model run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Merged schema handed to the generator
    pub prepared_schema: PathBuf,
    /// Number of models in the schema
    pub model_count: usize,
    /// Base classes that received accessor documentation
    pub annotated: Vec<AnnotatedFile>,
    /// Base classes without property tags
    pub unannotated: Vec<PathBuf>,
    /// Stub classes created by this run
    pub new_stubs: Vec<PathBuf>,
    /// Base classes that went through token replacement
    pub base_classes: Vec<PathBuf>,
}

/// Runs the build-model task against explicit configuration.
pub struct ModelBuilder<'a> {
    config: &'a Config,
    finder: &'a dyn FileFinder,
    loader: &'a dyn SchemaLoader,
    generator: &'a dyn ModelGenerator,
    application: Option<String>,
    env: String,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(
        config: &'a Config,
        finder: &'a dyn FileFinder,
        loader: &'a dyn SchemaLoader,
        generator: &'a dyn ModelGenerator,
    ) -> Self {
        Self {
            config,
            finder,
            loader,
            generator,
            application: None,
            env: DEFAULT_ENV.to_string(),
        }
    }

    /// Set the application the task runs for.
    pub fn application(mut self, application: Option<&str>) -> Self {
        self.application = application.map(str::to_string);
        self
    }

    /// Set the environment the task runs in.
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    /// Run every step. The first failure aborts the run.
    pub fn run(&self) -> Result<BuildOutcome> {
        info!("generating model classes");

        let paths = &self.config.paths;
        let options = &self.config.builder;
        let stub_filter = FindFilter::files()
            .name(options.stub_pattern())
            .prune(&options.base_classes_directory);

        let before = self.finder.find(&paths.models, &stub_filter)?;

        let sources = schema_sources(&paths.schema, &self.config.plugins)?;
        prepare_schema(&sources, &paths.prepared_schema)?;

        self.generator.generate(&GenerateRequest {
            schema: &paths.prepared_schema,
            format: SCHEMA_FORMAT,
            models: &paths.models,
            options,
            application: self.application.as_deref(),
            env: &self.env,
        })?;

        let mut outcome = BuildOutcome {
            prepared_schema: paths.prepared_schema.clone(),
            ..BuildOutcome::default()
        };
        self.annotate_base_classes(&mut outcome)?;

        let tokens = TokenMap::for_project(&self.config.project);

        let after = self.finder.find(&paths.models, &stub_filter)?;
        outcome.new_stubs = after.difference(&before).cloned().collect();
        replace_tokens(outcome.new_stubs.iter().map(PathBuf::as_path), "", "", &tokens)?;

        outcome.base_classes = self.base_class_files(&paths.models)?.into_iter().collect();
        replace_tokens(
            outcome.base_classes.iter().map(PathBuf::as_path),
            "",
            "",
            &tokens,
        )?;

        info!(
            "{} base classes documented, {} new stub classes",
            outcome.annotated.len(),
            outcome.new_stubs.len()
        );
        Ok(outcome)
    }

    fn annotate_base_classes(&self, outcome: &mut BuildOutcome) -> Result<()> {
        let options = &self.config.builder;
        let annotator = AccessorDocAnnotator::new(&options.collection_type);
        let schema = self.loader.load(&self.config.paths.prepared_schema)?;
        outcome.model_count = schema.len();

        for model in schema.iter() {
            let path = base_class_path(&self.config.paths.models, model, options);
            let mut file = SourceFile::open(&path)?;

            let Some(docs) = annotator.annotate_file(&mut file, model.name()) else {
                debug!("No property tags in {}", path.display());
                outcome.unannotated.push(path);
                continue;
            };

            let subpackage = subpackage_name(model, &options.subpackage_strip);
            let content = TokenMap::new()
                .with(SUBPACKAGE, subpackage)
                .apply(file.content());
            file.set_content(content);
            file.save()?;

            debug!("Documented {} accessors in {}", docs.len(), path.display());
            outcome.annotated.push(AnnotatedFile {
                model: model.name().to_string(),
                path,
                accessors: docs.len(),
            });
        }

        Ok(())
    }

    fn base_class_files(&self, models: &Path) -> Result<BTreeSet<PathBuf>> {
        let options = &self.config.builder;
        let base_dirs = self.finder.find(
            models,
            &FindFilter::dirs().name(&options.base_classes_directory),
        )?;
        self.finder
            .find_in(&base_dirs, &FindFilter::files().name(options.base_pattern()))
    }
}
