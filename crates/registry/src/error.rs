use common::error::diagnostics::DiagnosticMessage;
use thiserror::Error;

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// No builder was registered for the requested kind. This is a missing
    /// fixture definition, not a runtime condition to recover from.
    #[error("unregistered type '{kind}' in {registry} registry: {context}")]
    UnregisteredType {
        kind: String,
        registry: &'static str,
        context: DiagnosticMessage,
    },
}

impl RegistryError {
    #[track_caller]
    pub fn unregistered(kind: impl Into<String>, registry: &'static str) -> Self {
        let kind = kind.into();
        let message = format!(
            "Create request for {kind} has not yet been implemented. \
             Register a builder for it in the {registry} registry."
        );
        Self::UnregisteredType {
            kind,
            registry,
            context: DiagnosticMessage::new(message),
        }
    }

    /// Name of the kind that failed to resolve.
    pub fn kind(&self) -> &str {
        match self {
            Self::UnregisteredType { kind, .. } => kind,
        }
    }
}
