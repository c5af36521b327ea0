//! Build-model operation - generate, document and clean model classes.

use std::path::Path;

use modelkit_codegen::{CommandGenerator, ModelBuilder, WalkdirFinder};
use modelkit_manifest::{ConfigFile, Result, YamlSchemaLoader};

use crate::reports::BuildReport;

/// Options for the build-model operation.
pub struct BuildModelOptions<'a> {
    /// Application the task runs for.
    pub application: Option<&'a str>,
    /// Environment the task runs in.
    pub env: &'a str,
}

/// Execute the build-model operation.
///
/// The generator runs from the project root so relative arguments in
/// `modelkit.toml` resolve the same way as its paths.
pub fn build_model(config_file: &ConfigFile, opts: BuildModelOptions) -> Result<BuildReport> {
    let config = config_file.config();
    let generator = CommandGenerator::new(&config.generator).current_dir(config_file.root());

    let outcome = ModelBuilder::new(config, &WalkdirFinder, &YamlSchemaLoader, &generator)
        .application(opts.application)
        .env(opts.env)
        .run()?;

    Ok(BuildReport::from_outcome(outcome, config_file.root()))
}

/// Display form of `path`, relative to `root` when it lies below it.
pub(crate) fn display_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.display().to_string()
}
