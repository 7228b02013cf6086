//! The attribute source family: normalized, immutable records assembled from
//! raw descriptors, exposed to the downstream binder through read-only
//! contracts.

pub mod many_to_one;
pub mod one_to_one;
pub mod to_one;


pub use to_one::{ToOneAttributeSource, ToOneProfile};

use crate::prelude::*;
use std::collections::BTreeSet;

///
/// SingularAttributeSource
///
/// Read-only contract shared by every singular attribute source variant.
/// No mutation API; absence of an optional descriptor field surfaces as
/// `None`, never as an error or a default-valued field.
///

pub trait SingularAttributeSource {
    fn name(&self) -> &str;
    fn attribute_path(&self) -> &AttributePath;
    fn attribute_role(&self) -> &AttributeRole;
    fn nature(&self) -> SingularAttributeNature;

    fn type_source(&self) -> &TypeSource;
    fn property_accessor_name(&self) -> Option<&str>;
    fn natural_id_mutability(&self) -> NaturalIdMutability;

    fn containing_table_name(&self) -> &str;
    /// Ordered relational-value sources; order matches descriptor document
    /// order.
    fn relational_value_sources(&self) -> &[RelationalValueSource];

    fn are_values_included_in_insert_by_default(&self) -> bool;
    fn are_values_included_in_update_by_default(&self) -> bool;
    fn are_values_nullable_by_default(&self) -> bool;
    fn is_included_in_optimistic_locking(&self) -> bool;

    fn tooling_hints(&self) -> &[ToolingHint];
}

///
/// AssociationAttributeSource
///
/// Association-specific extension of the singular contract for the to-one
/// family. Fetch/lazy/outer-join selections stay raw tokens here; a later
/// global-default-resolution stage applies factory-wide defaults when
/// absent.
///

pub trait AssociationAttributeSource: SingularAttributeSource {
    fn cascade_styles(&self) -> &BTreeSet<CascadeAction>;

    fn fetch_selection(&self) -> Option<&str>;
    fn lazy_selection(&self) -> Option<&str>;
    fn outer_join_selection(&self) -> Option<&str>;
    fn requires_immediate_fetch(&self) -> bool;

    /// Qualified class name when an explicit class was declared, else the
    /// explicit entity name; `None` defers disambiguation to the binder.
    fn referenced_entity_name(&self) -> Option<&str>;
    /// Non-PK target property a `property-ref` association joins to.
    fn referenced_property_name(&self) -> Option<&str>;

    fn explicit_foreign_key_name(&self) -> Option<&str>;
    fn foreign_key_direction(&self) -> ForeignKeyDirection;
    fn is_unique(&self) -> bool;
    fn is_ignore_not_found(&self) -> bool;
    fn is_cascade_delete_enabled(&self) -> bool;
}
