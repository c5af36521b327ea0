use serde::Deserialize;

/// Options shared between the model generator and the post-processing steps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// File name suffix of every generated class
    pub suffix: String,

    /// Directory name holding regenerated base classes
    pub base_classes_directory: String,

    /// Declared type that marks a one-to-many relation container
    pub collection_type: String,

    /// Strings removed from a plugin name when deriving its subpackage
    pub subpackage_strip: Vec<String>,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            suffix: ".class.php".to_string(),
            base_classes_directory: "base".to_string(),
            collection_type: "Doctrine_Collection".to_string(),
            subpackage_strip: vec!["orangehrm".to_string(), "Plugin".to_string()],
        }
    }
}

impl BuilderOptions {
    /// Glob matching customizable stub files.
    pub fn stub_pattern(&self) -> String {
        format!("*{}", self.suffix)
    }

    /// Glob matching regenerated base class files.
    pub fn base_pattern(&self) -> String {
        format!("Base*{}", self.suffix)
    }

    /// File name of the base class for a model.
    pub fn base_file_name(&self, model: &str) -> String {
        format!("Base{}{}", model, self.suffix)
    }
}
