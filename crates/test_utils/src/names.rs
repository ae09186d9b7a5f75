use common::types::EntityName;
use uuid::Uuid;

/// Fresh random name for a test asset.
pub fn generate_name() -> EntityName {
    EntityName::new(Uuid::new_v4().to_string())
}
