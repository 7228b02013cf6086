use crate::prelude::*;
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, RwLock},
};

///
/// TypeDescriptorRepository
///
/// Lookup-or-register store for resolved logical types. The interior lock
/// keeps concurrent reads plus occasional cache-fill writes safe; that
/// safety is this repository's contract, not the resolvers'.
///

#[derive(Debug, Default)]
pub struct TypeDescriptorRepository {
    types: RwLock<BTreeMap<String, Arc<TypeDescriptor>>>,
}

impl TypeDescriptorRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.read().get(name).map(Arc::clone)
    }

    /// Register a descriptor under its qualified name. Idempotent: the first
    /// registration wins and every caller shares the same handle.
    pub fn register(&self, name: impl Into<String>) -> Arc<TypeDescriptor> {
        let name = name.into();
        let mut types = self.write();

        Arc::clone(
            types
                .entry(name.clone())
                .or_insert_with(|| Arc::new(TypeDescriptor::new(name))),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, Arc<TypeDescriptor>>> {
        self.types
            .read()
            .expect("type repository RwLock poisoned while acquiring read lock")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, Arc<TypeDescriptor>>> {
        self.types
            .write()
            .expect("type repository RwLock poisoned while acquiring write lock")
    }
}

///
/// BindingContext
///
/// Read-only service bundle threaded explicitly through every resolution
/// call: naming/qualification, the type-descriptor repository, and any
/// context-level cascade vocabulary extensions. Never ambient state.
///

#[derive(Debug, Default)]
pub struct BindingContext {
    default_namespace: Option<String>,
    types: TypeDescriptorRepository,
    cascade_aliases: BTreeMap<String, BTreeSet<CascadeAction>>,
}

impl BindingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace unqualified type names resolve against.
    #[must_use]
    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn default_namespace(&self) -> Option<&str> {
        self.default_namespace.as_deref()
    }

    #[must_use]
    pub const fn types(&self) -> &TypeDescriptorRepository {
        &self.types
    }

    /// Qualify a type name: names already carrying a namespace separator pass
    /// through unchanged, bare names join the default namespace when one is
    /// set.
    #[must_use]
    pub fn qualify_type_name(&self, name: &str) -> String {
        if name.contains('.') {
            return name.to_string();
        }

        match &self.default_namespace {
            Some(namespace) => format!("{namespace}.{name}"),
            None => name.to_string(),
        }
    }

    /// Extend the cascade vocabulary with an alias token expanding to a fixed
    /// action set.
    pub fn register_cascade_alias(
        &mut self,
        token: impl Into<String>,
        actions: impl IntoIterator<Item = CascadeAction>,
    ) {
        self.cascade_aliases
            .insert(token.into(), actions.into_iter().collect());
    }

    #[must_use]
    pub fn cascade_alias(&self, token: &str) -> Option<&BTreeSet<CascadeAction>> {
        self.cascade_aliases.get(token)
    }
}
