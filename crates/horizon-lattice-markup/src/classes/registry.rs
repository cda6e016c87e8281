//! Compile-scoped class registry.

use std::collections::{HashMap, HashSet};

use super::{canonicalize, class_hash};
use crate::logging::targets;

/// Where a generated class rule lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassScope {
    /// Top-level utility rules.
    Base,
    /// Rules inside the media query with this text.
    Media(String),
}

impl ClassScope {
    /// Identity is per scope: the same declarations in a media query hash
    /// differently from the same declarations at top level.
    fn hash_input(&self, canonical: &str) -> String {
        match self {
            Self::Base => canonical.to_string(),
            Self::Media(query) => format!("{query}|{canonical}"),
        }
    }
}

/// Result of registering a declaration set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Class name bound to the declaration set.
    pub class_name: String,
    /// Whether this call created the binding, so the caller should emit a
    /// rule for it.
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RegistryKey {
    scope: ClassScope,
    canonical: String,
}

/// Maps canonical declaration strings to generated class names.
///
/// Created fresh for every compile. Within one registry the same
/// (scope, canonical string) pair always yields the same name, and a name
/// bound to one pair is never handed out for another.
#[derive(Debug, Clone)]
pub struct ClassRegistry {
    prefix: String,
    by_key: HashMap<RegistryKey, String>,
    taken: HashSet<String>,
}

impl ClassRegistry {
    /// Create an empty registry generating names with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            by_key: HashMap::new(),
            taken: HashSet::new(),
        }
    }

    /// Register a declaration string, returning its class name.
    pub fn register(&mut self, scope: &ClassScope, declarations: &str) -> Registration {
        let key = RegistryKey {
            scope: scope.clone(),
            canonical: canonicalize(declarations),
        };

        if let Some(existing) = self.by_key.get(&key) {
            return Registration {
                class_name: existing.clone(),
                is_new: false,
            };
        }

        let base = format!("{}{}", self.prefix, class_hash(&scope.hash_input(&key.canonical)));
        let mut class_name = base.clone();
        let mut suffix = 0;
        while self.taken.contains(&class_name) {
            suffix += 1;
            class_name = format!("{base}-{suffix}");
        }
        if suffix > 0 {
            tracing::debug!(
                target: targets::CLASSES,
                "Class name {} already bound, using {}",
                base,
                class_name
            );
        }

        tracing::trace!(
            target: targets::CLASSES,
            "Registered {} for '{}' in {:?}",
            class_name,
            key.canonical,
            key.scope
        );

        self.taken.insert(class_name.clone());
        self.by_key.insert(key, class_name.clone());
        Registration {
            class_name,
            is_new: true,
        }
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether no classes are registered.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Bind a name directly, for exercising collision handling.
    #[cfg(test)]
    fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_string());
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new("n-")
    }
}
