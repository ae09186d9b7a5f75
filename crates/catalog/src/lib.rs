pub mod kinds;
pub mod models;
pub mod requests;

pub use kinds::{EntityKind, ServiceKind};
pub use models::*;
pub use requests::{CreateRequest, EntityRequest, ServiceRequest};
