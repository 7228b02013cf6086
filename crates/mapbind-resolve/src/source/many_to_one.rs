use crate::{
    container::ContainerContext,
    descriptor::ManyToOneDescriptor,
    error::ResolveError,
    prelude::*,
    source::to_one::{ToOneParts, ToOneProfile, resolve_to_one},
};

/// Variant capabilities of a many-to-one: the owning side always references
/// the parent's key, and the foreign key never cascades deletes.
const PROFILE: ToOneProfile = ToOneProfile {
    nature: SingularAttributeNature::ManyToOne,
    foreign_key_direction: ForeignKeyDirection::ToParent,
    cascade_delete_enabled: false,
    requires_immediate_fetch: false,
    allow_empty_value_sources: false,
};

impl ToOneAttributeSource {
    /// Resolve one `many-to-one` descriptor into an immutable attribute
    /// source. The natural-id mutability flag is propagated from the
    /// container, not re-derived here.
    pub fn many_to_one(
        container: &ContainerContext,
        descriptor: &ManyToOneDescriptor,
        containing_table: &str,
        natural_id_mutability: NaturalIdMutability,
        ctx: &BindingContext,
    ) -> Result<Self, ResolveError> {
        resolve_to_one(
            PROFILE,
            ToOneParts {
                name: &descriptor.name,
                access: descriptor.access.as_deref(),
                class: descriptor.class.as_deref(),
                entity_name: descriptor.entity_name.as_deref(),
                column_attribute: descriptor.column_attribute.as_deref(),
                formula_attribute: descriptor.formula_attribute.as_deref(),
                columns: &descriptor.columns,
                formulas: &descriptor.formulas,
                not_null: descriptor.not_null,
                unique: descriptor.unique,
                optimistic_lock: descriptor.optimistic_lock,
                insert: descriptor.insert,
                update: descriptor.update,
                fetch: descriptor.fetch.as_deref(),
                lazy: descriptor.lazy.as_deref(),
                outer_join: descriptor.outer_join.as_deref(),
                not_found: descriptor.not_found.as_deref(),
                foreign_key: descriptor.foreign_key.as_deref(),
                cascade: descriptor.cascade.as_deref(),
                property_ref: descriptor.property_ref.as_deref(),
                meta: &descriptor.meta,
            },
            container,
            containing_table,
            natural_id_mutability,
            ctx,
        )
    }
}
