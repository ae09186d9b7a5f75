use common::types::{EntityName, FullyQualifiedEntityName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestPlatform {
    OpenMetadata,
    GreatExpectations,
    Dbt,
    Deequ,
    Soda,
    Other,
}

/// Level a test definition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestEntityType {
    Table,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestParameterDataType {
    Number,
    Int,
    String,
    Boolean,
    Array,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseParameterDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<TestParameterDataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl TestCaseParameterDefinition {
    pub fn new(name: impl Into<String>, data_type: TestParameterDataType) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            data_type: Some(data_type),
            description: None,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseParameterValue {
    pub name: String,
    pub value: String,
}

impl TestCaseParameterValue {
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestDefinitionRequest {
    pub name: EntityName,
    pub description: String,
    pub entity_type: TestEntityType,
    pub test_platforms: Vec<TestPlatform>,
    pub parameter_definition: Vec<TestCaseParameterDefinition>,
}

/// Suite bound to the single entity ("executable" suite) it tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestSuiteRequest {
    pub name: EntityName,
    pub description: String,
    pub executable_entity_reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestCaseRequest {
    pub name: EntityName,
    /// `<#E::table::svc.db.schema.table>`-style link to the tested entity.
    pub entity_link: String,
    pub test_suite: FullyQualifiedEntityName,
    pub test_definition: FullyQualifiedEntityName,
    pub parameter_values: Vec<TestCaseParameterValue>,
}

/// Format an entity link for a table, optionally narrowed to one column.
pub fn table_entity_link(table: &FullyQualifiedEntityName, column: Option<&str>) -> String {
    match column {
        Some(col) => format!("<#E::table::{table}::columns::{col}>"),
        None => format!("<#E::table::{table}>"),
    }
}
