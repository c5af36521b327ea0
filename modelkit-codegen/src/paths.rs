//! Locations and names derived from a model definition.

use std::path::{Path, PathBuf};

use modelkit_manifest::{BuilderOptions, ModelDefinition};

/// Subpackage of base classes that belong to no plugin.
pub const BASE_SUBPACKAGE: &str = r"model\base";

/// Path of the generated base class for `model`.
///
/// Models with a package live under a directory named after the package's
/// plugin segment: `<models>/<segment>/<base dir>/Base<Model><suffix>`.
pub fn base_class_path(models: &Path, model: &ModelDefinition, options: &BuilderOptions) -> PathBuf {
    let mut path = models.to_path_buf();
    if let Some(segment) = model.plugin_segment().filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(&options.base_classes_directory);
    path.push(options.base_file_name(model.name()));
    path
}

/// Documentation subpackage for a model's base class.
///
/// The plugin segment with every `strip` string removed, lowercased, gives
/// `model\<name>\base`; models outside a plugin get `model\base`.
pub fn subpackage_name(model: &ModelDefinition, strip: &[String]) -> String {
    let mut name = model.plugin_segment().unwrap_or_default().to_string();
    for s in strip.iter().filter(|s| !s.is_empty()) {
        name = name.replace(s.as_str(), "");
    }

    if name.is_empty() {
        BASE_SUBPACKAGE.to_string()
    } else {
        format!(r"model\{}\base", name.to_lowercase())
    }
}
