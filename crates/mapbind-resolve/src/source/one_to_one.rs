use crate::{
    container::ContainerContext,
    descriptor::OneToOneDescriptor,
    error::ResolveError,
    prelude::*,
    source::to_one::{ToOneParts, ToOneProfile, resolve_to_one},
};

impl ToOneAttributeSource {
    /// Resolve one `one-to-one` descriptor into an immutable attribute
    /// source.
    ///
    /// A one-to-one maps no columns of its own: only formulas contribute
    /// relational values and an empty sequence is legal. The key direction
    /// follows the `constrained` flag (a constrained side owns a foreign key
    /// to its target) and the association is inherently unique.
    pub fn one_to_one(
        container: &ContainerContext,
        descriptor: &OneToOneDescriptor,
        containing_table: &str,
        natural_id_mutability: NaturalIdMutability,
        ctx: &BindingContext,
    ) -> Result<Self, ResolveError> {
        let profile = ToOneProfile {
            nature: SingularAttributeNature::OneToOne,
            foreign_key_direction: if descriptor.constrained {
                ForeignKeyDirection::ToParent
            } else {
                ForeignKeyDirection::FromParent
            },
            cascade_delete_enabled: false,
            requires_immediate_fetch: false,
            allow_empty_value_sources: true,
        };

        resolve_to_one(
            profile,
            ToOneParts {
                name: &descriptor.name,
                access: descriptor.access.as_deref(),
                class: descriptor.class.as_deref(),
                entity_name: descriptor.entity_name.as_deref(),
                column_attribute: None,
                formula_attribute: descriptor.formula_attribute.as_deref(),
                columns: &[],
                formulas: &descriptor.formulas,
                not_null: None,
                unique: true,
                optimistic_lock: true,
                insert: true,
                update: true,
                fetch: descriptor.fetch.as_deref(),
                lazy: descriptor.lazy.as_deref(),
                outer_join: descriptor.outer_join.as_deref(),
                not_found: None,
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
