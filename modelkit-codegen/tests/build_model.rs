//! End-to-end tests for the build-model pipeline against a temporary project.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use modelkit_codegen::{GenerateRequest, ModelBuilder, ModelGenerator, WalkdirFinder};
use modelkit_manifest::{Config, Error, Result, YamlSchemaLoader};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const CONFIG: &str = r#"
[project]
name = "orangehrm"
author = "Jane Doe"

[paths]
models = "lib/model/doctrine"
schema = "config/doctrine/schema.yml"
prepared_schema = "cache/schema.yml"

[builder]
subpackage_strip = ["orangehrm", "Plugin"]

[generator]
command = "php"

[[plugins]]
name = "orangehrmPimPlugin"
schema = "plugins/orangehrmPimPlugin/config/doctrine"
"#;

const PROJECT_SCHEMA: &str = r#"
Employee:
  tableName: hs_hr_employee
  columns:
    emp_number: { type: integer, primary: true }
Country:
  tableName: hs_hr_country
"#;

const PLUGIN_SCHEMA: &str = r#"
JobTitle:
  tableName: ohrm_job_title
"#;

const BASE_EMPLOYEE: &str = "<?php

/**
 * BaseEmployee
 *
 * @property integer $emp_number
 * @property string $firstName
 *
 * @package    ##PACKAGE##
 * @subpackage ##SUBPACKAGE##
 * @author     ##NAME## <##EMAIL##>
 */
abstract class BaseEmployee extends sfDoctrineRecord
{
}
";

const BASE_COUNTRY: &str = "<?php

/**
 * BaseCountry
 *
 * @package    ##PACKAGE##
 * @subpackage ##SUBPACKAGE##
 * @author     ##NAME## <##EMAIL##>
 */
abstract class BaseCountry extends sfDoctrineRecord
{
}
";

const BASE_JOB_TITLE: &str = "<?php

/**
 * BaseJobTitle
 *
 * @property string $name
 *
 * @package    ##PACKAGE##
 * @subpackage ##SUBPACKAGE##
 * @author     ##NAME## <##EMAIL##>
 */
abstract class BaseJobTitle extends sfDoctrineRecord
{
}
";

const STUB_TEMPLATE: &str = "<?php

/**
 * MODEL
 *
 * @package    ##PACKAGE##
 * @subpackage ##SUBPACKAGE##
 * @author     ##NAME## <##EMAIL##>
 */
class MODEL extends BaseMODEL
{

}
";

const EXISTING_STUB: &str = "<?php

/**
 * @package ##PACKAGE##
 */
class Country extends BaseCountry
{

}
";

/// Writes the files a Doctrine import would produce, without touching
/// stubs that already exist.
#[derive(Default)]
struct FakeGenerator {
    files: Vec<(&'static str, String)>,
    schemas: RefCell<Vec<String>>,
}

impl FakeGenerator {
    fn doctrine() -> Self {
        let stub = |model: &str| STUB_TEMPLATE.replace("MODEL", model);
        Self {
            files: vec![
                ("base/BaseEmployee.class.php", BASE_EMPLOYEE.to_string()),
                ("base/BaseCountry.class.php", BASE_COUNTRY.to_string()),
                (
                    "orangehrmPimPlugin/base/BaseJobTitle.class.php",
                    BASE_JOB_TITLE.to_string(),
                ),
                ("Employee.class.php", stub("Employee")),
                ("Country.class.php", stub("Country")),
                ("orangehrmPimPlugin/JobTitle.class.php", stub("JobTitle")),
            ],
            schemas: RefCell::default(),
        }
    }
}

impl ModelGenerator for FakeGenerator {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<()> {
        let schema = fs::read_to_string(request.schema).map_err(|e| Error::read(request.schema, e))?;
        self.schemas.borrow_mut().push(schema);

        for (rel, content) in &self.files {
            let path = request.models.join(rel);
            if path.exists() {
                continue;
            }
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
        }
        Ok(())
    }
}

struct Project {
    temp: TempDir,
    config: Config,
}

impl Project {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        write(root, "config/doctrine/schema.yml", PROJECT_SCHEMA);
        write(
            root,
            "plugins/orangehrmPimPlugin/config/doctrine/schema.yml",
            PLUGIN_SCHEMA,
        );
        write(root, "lib/model/doctrine/Country.class.php", EXISTING_STUB);

        let config = Config::from_str_with_root(CONFIG, "modelkit.toml", root).unwrap();
        Self { temp, config }
    }

    fn models(&self) -> PathBuf {
        self.temp.path().join("lib/model/doctrine")
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.models().join(rel)).unwrap()
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_build_model_outcome() {
    let project = Project::new();
    let generator = FakeGenerator::doctrine();

    let outcome = ModelBuilder::new(&project.config, &WalkdirFinder, &YamlSchemaLoader, &generator)
        .run()
        .unwrap();

    let models = project.models();
    assert_eq!(outcome.model_count, 3);
    assert_eq!(
        outcome.prepared_schema,
        project.temp.path().join("cache/schema.yml")
    );

    let annotated: Vec<(&str, usize)> = outcome
        .annotated
        .iter()
        .map(|a| (a.model.as_str(), a.accessors))
        .collect();
    assert_eq!(annotated, [("JobTitle", 2), ("Employee", 4)]);
    assert_eq!(outcome.unannotated, [models.join("base/BaseCountry.class.php")]);
    assert_eq!(
        outcome.new_stubs,
        [
            models.join("Employee.class.php"),
            models.join("orangehrmPimPlugin/JobTitle.class.php"),
        ]
    );
    assert_eq!(
        outcome.base_classes,
        [
            models.join("base/BaseCountry.class.php"),
            models.join("base/BaseEmployee.class.php"),
            models.join("orangehrmPimPlugin/base/BaseJobTitle.class.php"),
        ]
    );
}

#[test]
fn test_generator_receives_merged_schema() {
    let project = Project::new();
    let generator = FakeGenerator::doctrine();

    ModelBuilder::new(&project.config, &WalkdirFinder, &YamlSchemaLoader, &generator)
        .run()
        .unwrap();

    let schemas = generator.schemas.borrow();
    assert_eq!(schemas.len(), 1);
    let merged: serde_yaml::Value = serde_yaml::from_str(&schemas[0]).unwrap();
    let names: Vec<&str> = merged
        .as_mapping()
        .unwrap()
        .keys()
        .filter_map(|k| k.as_str())
        .collect();
    assert_eq!(names, ["JobTitle", "Employee", "Country"]);
    assert_eq!(
        merged["JobTitle"]["package"].as_str(),
        Some("orangehrmPimPlugin.lib.model.doctrine")
    );
}

#[test]
fn test_base_classes_documented_and_tokens_replaced() {
    let project = Project::new();
    let generator = FakeGenerator::doctrine();

    ModelBuilder::new(&project.config, &WalkdirFinder, &YamlSchemaLoader, &generator)
        .run()
        .unwrap();

    assert_eq!(
        project.read("base/BaseEmployee.class.php"),
        r#"<?php

/**
 * BaseEmployee
 *
 * @property integer $emp_number
 * @property string $firstName
 * 
 * @method integer  getEmpNumber() Returns the current record's "emp_number" value
 * @method string   getFirstName() Returns the current record's "firstName" value
 * @method Employee setEmpNumber() Sets the current record's "emp_number" value
 * @method Employee setFirstName() Sets the current record's "firstName" value
 *
 * @package    orangehrm
 * @subpackage model\base
 * @author     Jane Doe
 */
abstract class BaseEmployee extends sfDoctrineRecord
{
}
"#
    );

    let job_title = project.read("orangehrmPimPlugin/base/BaseJobTitle.class.php");
    assert!(job_title.contains(r#" * @method string   getName() Returns the current record's "name" value"#));
    assert!(job_title.contains(r#" * @method JobTitle setName() Sets the current record's "name" value"#));
    assert!(job_title.contains(r" * @subpackage model\pim\base"));

    // No property tags, so only the project-wide subpackage applies
    let country = project.read("base/BaseCountry.class.php");
    assert!(!country.contains("@method"));
    assert!(country.contains(" * @subpackage model\n"));
    assert!(country.contains(" * @author     Jane Doe\n"));
}

#[test]
fn test_new_stubs_get_tokens_and_compact_body() {
    let project = Project::new();
    let generator = FakeGenerator::doctrine();

    ModelBuilder::new(&project.config, &WalkdirFinder, &YamlSchemaLoader, &generator)
        .run()
        .unwrap();

    assert_eq!(
        project.read("Employee.class.php"),
        "<?php

/**
 * Employee
 *
 * @package    orangehrm
 * @subpackage model
 * @author     Jane Doe
 */
class Employee extends BaseEmployee
{
}

"
    );
    assert!(
        project
            .read("orangehrmPimPlugin/JobTitle.class.php")
            .contains("class JobTitle extends BaseJobTitle\n{\n}\n")
    );
}

#[test]
fn test_existing_stub_untouched() {
    let project = Project::new();
    let generator = FakeGenerator::doctrine();

    ModelBuilder::new(&project.config, &WalkdirFinder, &YamlSchemaLoader, &generator)
        .run()
        .unwrap();

    assert_eq!(project.read("Country.class.php"), EXISTING_STUB);
}

#[test]
fn test_missing_base_class_aborts() {
    let project = Project::new();
    let generator = FakeGenerator::default();

    let err = ModelBuilder::new(&project.config, &WalkdirFinder, &YamlSchemaLoader, &generator)
        .run()
        .unwrap_err();

    match *err {
        Error::Io { path, .. } => assert_eq!(
            path,
            project.models().join("orangehrmPimPlugin/base/BaseJobTitle.class.php")
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_project_schema_aborts_before_generation() {
    let project = Project::new();
    fs::remove_file(project.temp.path().join("config/doctrine/schema.yml")).unwrap();
    let generator = FakeGenerator::doctrine();

    let err = ModelBuilder::new(&project.config, &WalkdirFinder, &YamlSchemaLoader, &generator)
        .run()
        .unwrap_err();

    assert!(matches!(*err, Error::SchemaNotFound { .. }));
    assert!(generator.schemas.borrow().is_empty());
    assert!(!project.models().join("base").exists());
}
