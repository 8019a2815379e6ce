//! Directive registry: one binder per directive kind.

use std::fmt;

use indexmap::IndexMap;

use super::binders::ParameterBinder;
use crate::directive::DirectiveKind;
use crate::error::ConfigError;

/// Maps each directive kind to the binder responsible for it.
///
/// Built once at engine construction and read-only for the engine's
/// lifetime; there is no removal operation.
#[derive(Default)]
pub struct DirectiveRegistry {
    binders: IndexMap<DirectiveKind, Box<dyn ParameterBinder>>,
}

impl DirectiveRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binder under its kind. Fails if the kind is already taken.
    pub fn register(&mut self, binder: Box<dyn ParameterBinder>) -> Result<(), ConfigError> {
        let kind = binder.kind();
        if self.binders.contains_key(&kind) {
            return Err(ConfigError::DuplicateDirective(kind));
        }
        self.binders.insert(kind, binder);
        Ok(())
    }

    /// A registry preloaded with a known-distinct binder set.
    pub(crate) fn preloaded(binders: Vec<Box<dyn ParameterBinder>>) -> Self {
        let mut registry = Self::new();
        for binder in binders {
            registry.binders.insert(binder.kind(), binder);
        }
        registry
    }

    /// The binder registered for `kind`, if any.
    pub fn lookup(&self, kind: DirectiveKind) -> Option<&dyn ParameterBinder> {
        self.binders.get(&kind).map(Box::as_ref)
    }

    /// Whether a binder is registered for `kind`.
    pub fn contains(&self, kind: DirectiveKind) -> bool {
        self.binders.contains_key(&kind)
    }

    /// The number of registered kinds.
    pub fn len(&self) -> usize {
        self.binders.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.binders.is_empty()
    }
}

impl fmt::Debug for DirectiveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectiveRegistry")
            .field("kinds", &self.binders.keys().collect::<Vec<_>>())
            .finish()
    }
}
