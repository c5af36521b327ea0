//! Build-model command report data structures.

use std::path::Path;

use modelkit_codegen::BuildOutcome;

use super::output::{Output, Report};
use crate::ops::build_model::display_path;

/// A base class that received accessor documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentedClass {
    pub path: String,
    pub accessors: usize,
}

/// Report data from a build-model run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Merged schema handed to the generator.
    pub prepared_schema: String,
    /// Number of models in the schema.
    pub model_count: usize,
    /// Base classes that received accessor documentation.
    pub documented: Vec<DocumentedClass>,
    /// Base classes without property tags.
    pub undocumented: Vec<String>,
    /// Stub classes created by this run.
    pub new_stubs: Vec<String>,
    /// Number of base classes that went through token replacement.
    pub cleaned: usize,
}

impl BuildReport {
    /// Build a report with paths shown relative to the project root.
    pub fn from_outcome(outcome: BuildOutcome, root: &Path) -> Self {
        Self {
            prepared_schema: display_path(&outcome.prepared_schema, root),
            model_count: outcome.model_count,
            documented: outcome
                .annotated
                .iter()
                .map(|file| DocumentedClass {
                    path: display_path(&file.path, root),
                    accessors: file.accessors,
                })
                .collect(),
            undocumented: outcome
                .unannotated
                .iter()
                .map(|path| display_path(path, root))
                .collect(),
            new_stubs: outcome
                .new_stubs
                .iter()
                .map(|path| display_path(path, root))
                .collect(),
            cleaned: outcome.base_classes.len(),
        }
    }
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Schema", &self.prepared_schema);
        out.key_value("Models", &self.model_count.to_string());

        if !self.documented.is_empty() {
            out.newline();
            out.section("Documented accessors");
            for class in &self.documented {
                out.list_item(&format!("{} ({} methods)", class.path, class.accessors));
            }
        }

        if !self.undocumented.is_empty() {
            out.newline();
            out.section("No properties");
            for path in &self.undocumented {
                out.list_item(path);
            }
        }

        if !self.new_stubs.is_empty() {
            out.newline();
            out.section("New classes");
            for path in &self.new_stubs {
                out.added_item(path);
            }
        }

        out.newline();
        out.preformatted(&format!("Cleaned {} base classes.", self.cleaned));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use modelkit_codegen::AnnotatedFile;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    fn outcome() -> BuildOutcome {
        BuildOutcome {
            prepared_schema: PathBuf::from("/srv/app/cache/schema.yml"),
            model_count: 2,
            annotated: vec![AnnotatedFile {
                model: "Employee".to_string(),
                path: PathBuf::from("/srv/app/lib/model/doctrine/base/BaseEmployee.class.php"),
                accessors: 6,
            }],
            unannotated: vec![PathBuf::from(
                "/srv/app/lib/model/doctrine/base/BaseCountry.class.php",
            )],
            new_stubs: vec![PathBuf::from("/srv/app/lib/model/doctrine/Employee.class.php")],
            base_classes: vec![
                PathBuf::from("/srv/app/lib/model/doctrine/base/BaseCountry.class.php"),
                PathBuf::from("/srv/app/lib/model/doctrine/base/BaseEmployee.class.php"),
            ],
        }
    }

    #[test]
    fn test_render_full_report() {
        let report = BuildReport::from_outcome(outcome(), Path::new("/srv/app"));
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Schema: cache/schema.yml",
                "Models: 2",
                "",
                "Documented accessors:",
                "  - lib/model/doctrine/base/BaseEmployee.class.php (6 methods)",
                "",
                "No properties:",
                "  - lib/model/doctrine/base/BaseCountry.class.php",
                "",
                "New classes:",
                "  + lib/model/doctrine/Employee.class.php",
                "",
                "Cleaned 2 base classes.",
            ]
        );
    }

    #[test]
    fn test_render_empty_sections_skipped() {
        let report = BuildReport {
            prepared_schema: "cache/schema.yml".to_string(),
            ..BuildReport::default()
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            ["Schema: cache/schema.yml", "Models: 0", "", "Cleaned 0 base classes."]
        );
    }
}
