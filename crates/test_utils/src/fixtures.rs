//! Single-shape fixtures that need no kind dispatch.

use catalog::{
    CreateTeamRequest, CreateTestCaseRequest, CreateTestDefinitionRequest, CreateTestSuiteRequest,
    CreateUserRequest, TeamType, TestCaseParameterDefinition, TestCaseParameterValue,
    TestEntityType, TestPlatform,
};
use common::types::{EntityName, FullyQualifiedEntityName};

use crate::names::generate_name;

pub const FIXTURE_EMAIL_DOMAIN: &str = "getcollate.io";

/// User with an email derived from its name unless one is given.
pub fn get_create_user_entity(name: Option<EntityName>, email: Option<String>) -> CreateUserRequest {
    let name = name.unwrap_or_else(generate_name);
    let email = email.unwrap_or_else(|| format!("{}@{}", name, FIXTURE_EMAIL_DOMAIN));
    CreateUserRequest {
        name,
        email,
        display_name: None,
        is_admin: false,
    }
}

pub fn get_create_team_entity(name: Option<EntityName>, users: Vec<String>) -> CreateTeamRequest {
    CreateTeamRequest {
        name: name.unwrap_or_else(generate_name),
        team_type: TeamType::Group,
        users,
    }
}

pub fn get_create_test_definition(
    parameter_definition: Vec<TestCaseParameterDefinition>,
    entity_type: TestEntityType,
    name: Option<EntityName>,
    description: Option<String>,
) -> CreateTestDefinitionRequest {
    CreateTestDefinitionRequest {
        name: name.unwrap_or_else(generate_name),
        description: description.unwrap_or_else(|| generate_name().into_inner()),
        entity_type,
        test_platforms: vec![TestPlatform::GreatExpectations],
        parameter_definition,
    }
}

pub fn get_create_test_suite(
    executable_entity_reference: impl Into<String>,
    name: Option<EntityName>,
    description: Option<String>,
) -> CreateTestSuiteRequest {
    CreateTestSuiteRequest {
        name: name.unwrap_or_else(generate_name),
        description: description.unwrap_or_else(|| generate_name().into_inner()),
        executable_entity_reference: executable_entity_reference.into(),
    }
}

pub fn get_create_test_case(
    entity_link: impl Into<String>,
    test_suite: FullyQualifiedEntityName,
    test_definition: FullyQualifiedEntityName,
    parameter_values: Vec<TestCaseParameterValue>,
    name: Option<EntityName>,
) -> CreateTestCaseRequest {
    CreateTestCaseRequest {
        name: name.unwrap_or_else(generate_name),
        entity_link: entity_link.into(),
        test_suite,
        test_definition,
        parameter_values,
    }
}
