use crate::error::{RegistryError, RegistryResult};
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tracing::debug;

/// Maps a kind tag to the builder producing its default create request.
///
/// Populated once while fixtures are set up, then only read. The latest
/// `register` for a kind wins; there is no duplicate detection. A `lookup`
/// miss is always an [`RegistryError::UnregisteredType`], never a fallback
/// to some other builder.
pub struct TypeRegistry<K, B> {
    label: &'static str,
    builders: HashMap<K, B>,
}

impl<K, B> TypeRegistry<K, B>
where
    K: Copy + Eq + Hash + Ord + Display,
{
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            builders: HashMap::new(),
        }
    }

    /// Store `builder` under `kind`, returning whatever it replaced.
    pub fn register(&mut self, kind: K, builder: B) -> Option<B> {
        debug!(registry = self.label, %kind, "registering builder");
        self.builders.insert(kind, builder)
    }

    /// Chained form of [`register`](Self::register) for static initialisers.
    pub fn with(mut self, kind: K, builder: B) -> Self {
        self.register(kind, builder);
        self
    }

    #[track_caller]
    pub fn lookup(&self, kind: K) -> RegistryResult<&B> {
        match self.builders.get(&kind) {
            Some(builder) => Ok(builder),
            None => Err(RegistryError::unregistered(kind.to_string(), self.label)),
        }
    }

    pub fn contains(&self, kind: K) -> bool {
        self.builders.contains_key(&kind)
    }

    /// Registered kinds in sorted order.
    pub fn kinds(&self) -> Vec<K> {
        let mut kinds: Vec<K> = self.builders.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<K, B> Debug for TypeRegistry<K, B>
where
    K: Copy + Eq + Hash + Ord + Display + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("label", &self.label)
            .field("kinds", &self.kinds())
            .finish()
    }
}
