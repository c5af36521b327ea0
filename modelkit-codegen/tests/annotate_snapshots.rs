//! Snapshot tests for accessor documentation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use modelkit_codegen::AccessorDocAnnotator;

const BASE_EMPLOYEE: &str = r#"<?php

/**
 * BaseEmployee
 * 
 * This class has been auto-generated by the Doctrine ORM Framework
 * 
 * @property integer $emp_number
 * @property string $firstName
 * @property Doctrine_Collection $addresses
 * 
 * @package    ##PACKAGE##
 * @subpackage ##SUBPACKAGE##
 * @author     ##NAME## <##EMAIL##>
 * @version    SVN: $Id: Builder.php 7490 2010-03-29 19:53:27Z jwage $
 */
abstract class BaseEmployee extends sfDoctrineRecord
{
    public function setTableDefinition()
    {
        $this->setTableName('hs_hr_employee');
    }
}
"#;

#[test]
fn test_base_employee_annotated() {
    let annotator = AccessorDocAnnotator::new("Doctrine_Collection");
    let (annotated, docs) = annotator
        .annotate("Employee", BASE_EMPLOYEE)
        .expect("BaseEmployee declares properties");

    assert_eq!(docs.len(), 6);
    insta::assert_snapshot!(annotated, @r#"
<?php

/**
 * BaseEmployee
 * 
 * This class has been auto-generated by the Doctrine ORM Framework
 * 
 * @property integer $emp_number
 * @property string $firstName
 * @property Doctrine_Collection $addresses
 * 
 * @method integer             getEmpNumber() Returns the current record's "emp_number" value
 * @method string              getFirstName() Returns the current record's "firstName" value
 * @method Doctrine_Collection getAddresses() Returns the current record's "addresses" collection
 * @method Employee            setEmpNumber() Sets the current record's "emp_number" value
 * @method Employee            setFirstName() Sets the current record's "firstName" value
 * @method Employee            setAddresses() Sets the current record's "addresses" collection
 * 
 * @package    ##PACKAGE##
 * @subpackage ##SUBPACKAGE##
 * @author     ##NAME## <##EMAIL##>
 * @version    SVN: $Id: Builder.php 7490 2010-03-29 19:53:27Z jwage $
 */
abstract class BaseEmployee extends sfDoctrineRecord
{
    public function setTableDefinition()
    {
        $this->setTableName('hs_hr_employee');
    }
}
"#);
}

#[test]
fn test_base_class_without_properties_untouched() {
    let annotator = AccessorDocAnnotator::new("Doctrine_Collection");
    let source = "<?php\n\n/**\n * BaseLog\n */\nabstract class BaseLog extends sfDoctrineRecord\n{\n}\n";
    assert!(annotator.annotate("Log", source).is_none());
}
