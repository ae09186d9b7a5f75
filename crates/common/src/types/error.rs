use crate::error::diagnostics::DiagnosticMessage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NameError {
    #[error("invalid entity name '{name}': {context}")]
    EmbeddedQuote {
        name: String,
        context: DiagnosticMessage,
    },
}

impl NameError {
    #[track_caller]
    pub fn embedded_quote(name: impl Into<String>) -> Self {
        let name = name.into();
        let message = format!(
            "Entity name {name} contains a double quote and cannot be part of a fully qualified name"
        );
        Self::EmbeddedQuote {
            name,
            context: DiagnosticMessage::new(message),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::EmbeddedQuote { name, .. } => name,
        }
    }
}
