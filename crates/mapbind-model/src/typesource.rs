use std::sync::Arc;

///
/// TypeDescriptor
///
/// Resolved logical-type handle. Instances are registered in and shared from
/// the binding context's type-descriptor repository, so consumers hold them
/// behind `Arc`.
///

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct TypeDescriptor {
    pub name: String,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

///
/// TypeParameter
///
/// Explicit type-parameter hint attached to a type source.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeParameter {
    pub name: String,
    pub value: String,
}

///
/// TypeSource
///
/// Logical/referenced type of one attribute. `name` records the qualified
/// type name even when the descriptor lookup missed, so a later pipeline
/// stage can resolve it lazily; an empty source defers fully to
/// convention-based inference at bind time.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeSource {
    name: Option<String>,
    descriptor: Option<Arc<TypeDescriptor>>,
    parameters: Vec<TypeParameter>,
}

impl TypeSource {
    /// Fully deferred: no explicit type information was declared.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            name: None,
            descriptor: None,
            parameters: Vec::new(),
        }
    }

    /// Named type, resolved or deferred depending on whether the repository
    /// lookup hit.
    #[must_use]
    pub fn named(name: impl Into<String>, descriptor: Option<Arc<TypeDescriptor>>) -> Self {
        Self {
            name: Some(name.into()),
            descriptor,
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<TypeParameter>) -> Self {
        self.parameters = parameters;
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn descriptor(&self) -> Option<&Arc<TypeDescriptor>> {
        self.descriptor.as_ref()
    }

    #[must_use]
    pub fn parameters(&self) -> &[TypeParameter] {
        &self.parameters
    }

    /// True when no explicit type information was declared at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.descriptor.is_none()
    }

    /// True when a name was declared but the descriptor lookup missed.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        self.name.is_some() && self.descriptor.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_defers_everything() {
        let source = TypeSource::empty();

        assert!(source.is_empty());
        assert!(!source.is_deferred());
        assert_eq!(source.name(), None);
    }

    #[test]
    fn named_source_records_name_on_lookup_miss() {
        let source = TypeSource::named("com.acme.Employee", None);

        assert!(!source.is_empty());
        assert!(source.is_deferred());
        assert_eq!(source.name(), Some("com.acme.Employee"));
        assert!(source.descriptor().is_none());
    }

    #[test]
    fn resolved_source_shares_descriptor() {
        let descriptor = Arc::new(TypeDescriptor::new("com.acme.Employee"));
        let source = TypeSource::named("com.acme.Employee", Some(Arc::clone(&descriptor)));

        assert!(!source.is_deferred());
        assert_eq!(source.descriptor().unwrap().name, "com.acme.Employee");
    }
}
