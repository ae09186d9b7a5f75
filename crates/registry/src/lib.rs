pub mod error;
mod mem;

pub use error::{RegistryError, RegistryResult};
pub use mem::TypeRegistry;
