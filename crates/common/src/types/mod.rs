pub mod error;
pub mod names;

pub use error::NameError;
pub use names::{quote_name, EntityName, FullyQualifiedEntityName, FQN_SEPARATOR};
