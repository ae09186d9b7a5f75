pub mod data;
pub mod quality;
pub mod services;
pub mod teams;

pub use data::*;
pub use quality::*;
pub use services::*;
pub use teams::*;
