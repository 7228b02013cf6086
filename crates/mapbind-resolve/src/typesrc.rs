use crate::prelude::*;

/// Resolve the logical/referenced type of one attribute.
///
/// An explicit class reference is qualified against the binding context and
/// looked up in the type-descriptor repository. A lookup miss is not a
/// failure; the qualified name is still recorded so the type can be resolved
/// lazily later in the pipeline. No reference at all produces an empty
/// source, deferring fully to convention-based inference at bind time.
#[must_use]
pub fn resolve_type_source(class_ref: Option<&str>, ctx: &BindingContext) -> TypeSource {
    match class_ref {
        Some(name) if !name.is_empty() => {
            let qualified = ctx.qualify_type_name(name);
            let descriptor = ctx.types().lookup(&qualified);

            TypeSource::named(qualified, descriptor)
        }
        _ => TypeSource::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_reference_defers_to_convention() {
        let ctx = BindingContext::new();

        assert!(resolve_type_source(None, &ctx).is_empty());
        assert!(resolve_type_source(Some(""), &ctx).is_empty());
    }

    #[test]
    fn lookup_miss_records_qualified_name() {
        let ctx = BindingContext::new().with_default_namespace("com.acme");

        let source = resolve_type_source(Some("Employee"), &ctx);

        assert!(source.is_deferred());
        assert_eq!(source.name(), Some("com.acme.Employee"));
    }

    #[test]
    fn lookup_hit_attaches_shared_descriptor() {
        let ctx = BindingContext::new().with_default_namespace("com.acme");
        let registered = ctx.types().register("com.acme.Employee");

        let source = resolve_type_source(Some("Employee"), &ctx);

        assert!(!source.is_deferred());
        assert!(std::sync::Arc::ptr_eq(source.descriptor().unwrap(), &registered));
    }

    #[test]
    fn qualified_reference_passes_through() {
        let ctx = BindingContext::new().with_default_namespace("com.acme");

        let source = resolve_type_source(Some("other.pkg.Employee"), &ctx);

        assert_eq!(source.name(), Some("other.pkg.Employee"));
    }
}
