use crate::types::error::NameError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::Deref;

pub const FQN_SEPARATOR: char = '.';
const QUOTE: char = '"';

/// Name of a single catalog entity, e.g. a table or a service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for EntityName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for EntityName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Dot separated path locating an entity inside the catalog, e.g.
/// `service.database.schema.table`.
///
/// A part that itself contains the separator is wrapped in double quotes so
/// the path can be split back into its parts unambiguously. Names with an
/// embedded quote cannot be represented and are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullyQualifiedEntityName(String);

impl FullyQualifiedEntityName {
    /// Join `parts` into a FQN, quoting any part containing the separator.
    #[track_caller]
    pub fn build<I, S>(parts: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let quoted = parts
            .into_iter()
            .map(|p| quote_name(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(quoted.join(&FQN_SEPARATOR.to_string())))
    }

    /// Extend this FQN with a child entity name.
    #[track_caller]
    pub fn child(&self, name: &EntityName) -> Result<Self, NameError> {
        Ok(Self(format!(
            "{}{}{}",
            self.0,
            FQN_SEPARATOR,
            quote_name(name)?
        )))
    }

    /// Split back into the unquoted parts.
    ///
    /// A quote only opens at the start of a part and only closes right
    /// before a separator or the end; anywhere else it is kept as text.
    pub fn parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = self.0.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                QUOTE if !in_quotes && current.is_empty() => in_quotes = true,
                QUOTE if in_quotes && matches!(chars.peek(), None | Some(&FQN_SEPARATOR)) => {
                    in_quotes = false
                }
                FQN_SEPARATOR if !in_quotes => parts.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        parts.push(current);
        parts
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FullyQualifiedEntityName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FullyQualifiedEntityName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FullyQualifiedEntityName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl TryFrom<&EntityName> for FullyQualifiedEntityName {
    type Error = NameError;

    #[track_caller]
    fn try_from(value: &EntityName) -> Result<Self, Self::Error> {
        Self::build([value.as_str()])
    }
}

/// Quote `name` for use as one FQN part.
///
/// `"plain"` without a separator inside is unquoted, `"a.b"` is kept as is.
#[track_caller]
pub fn quote_name(name: &str) -> Result<String, NameError> {
    let inner = name
        .strip_prefix(QUOTE)
        .and_then(|n| n.strip_suffix(QUOTE))
        .unwrap_or(name);
    if inner.contains(QUOTE) {
        return Err(NameError::embedded_quote(name));
    }
    if inner.contains(FQN_SEPARATOR) {
        Ok(format!("{QUOTE}{inner}{QUOTE}"))
    } else {
        Ok(inner.to_string())
    }
}
