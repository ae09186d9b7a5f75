pub mod diagnostics;

pub use diagnostics::DiagnosticMessage;
