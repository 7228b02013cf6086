use crate::{
    cascade::interpret_cascades,
    container::ContainerContext,
    descriptor::{ColumnDescriptor, ToolingHintDescriptor},
    error::ResolveError,
    prelude::*,
    source::{AssociationAttributeSource, SingularAttributeSource},
    typesrc::resolve_type_source,
    value::{ValueSourcesConfig, build_value_sources},
};
use std::collections::BTreeSet;

///
/// ToOneProfile
///
/// Variant capabilities for the to-one family. Each variant fixes these
/// before the shared resolution runs; nothing here is read from the
/// descriptor.
///

#[derive(Clone, Copy, Debug)]
pub struct ToOneProfile {
    pub nature: SingularAttributeNature,
    pub foreign_key_direction: ForeignKeyDirection,
    pub cascade_delete_enabled: bool,
    pub requires_immediate_fetch: bool,
    pub allow_empty_value_sources: bool,
}

///
/// ToOneParts
///
/// Raw descriptor bits a variant feeds into the shared resolution. Each
/// variant fills in only what its descriptor surface carries.
///

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToOneParts<'a> {
    pub name: &'a str,
    pub access: Option<&'a str>,
    pub class: Option<&'a str>,
    pub entity_name: Option<&'a str>,

    pub column_attribute: Option<&'a str>,
    pub formula_attribute: Option<&'a str>,
    pub columns: &'a [ColumnDescriptor],
    pub formulas: &'a [String],

    pub not_null: Option<bool>,
    pub unique: bool,
    pub optimistic_lock: bool,
    pub insert: bool,
    pub update: bool,

    pub fetch: Option<&'a str>,
    pub lazy: Option<&'a str>,
    pub outer_join: Option<&'a str>,
    pub not_found: Option<&'a str>,

    pub foreign_key: Option<&'a str>,
    pub cascade: Option<&'a str>,
    pub property_ref: Option<&'a str>,
    pub meta: &'a [ToolingHintDescriptor],
}

///
/// ToOneAttributeSource
///
/// Normalized to-one association attribute: identity, type source, value
/// sources, cascade set, and association semantics in one immutable record.
/// Constructed once per descriptor node during the containing entity's
/// resolution pass; all-or-nothing, never published partially.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ToOneAttributeSource {
    name: String,
    path: AttributePath,
    role: AttributeRole,
    nature: SingularAttributeNature,

    type_source: TypeSource,
    containing_table: String,
    value_sources: Vec<RelationalValueSource>,
    cascade_styles: BTreeSet<CascadeAction>,

    property_accessor: Option<String>,
    natural_id_mutability: NaturalIdMutability,

    fetch_selection: Option<String>,
    lazy_selection: Option<String>,
    outer_join_selection: Option<String>,
    requires_immediate_fetch: bool,

    referenced_entity_name: Option<String>,
    referenced_property_name: Option<String>,

    foreign_key_name: Option<String>,
    foreign_key_direction: ForeignKeyDirection,
    cascade_delete_enabled: bool,

    unique: bool,
    ignore_not_found: bool,
    optimistic_lock: bool,
    include_in_insert_by_default: bool,
    include_in_update_by_default: bool,
    nullable_by_default: bool,

    tooling_hints: Vec<ToolingHint>,
}

/// Shared resolution for the to-one family.
///
/// Sub-resolutions run in a fixed order (value sources, type source, cascade
/// set) and the record is assembled only once all of them succeeded.
pub(crate) fn resolve_to_one(
    profile: ToOneProfile,
    parts: ToOneParts<'_>,
    container: &ContainerContext,
    containing_table: &str,
    natural_id_mutability: NaturalIdMutability,
    ctx: &BindingContext,
) -> Result<ToOneAttributeSource, ResolveError> {
    let path = container
        .attribute_path(parts.name)
        .map_err(|_| ResolveError::empty_attribute_name(container.path_base().clone()))?;
    let role = container
        .attribute_role(parts.name)
        .map_err(|_| ResolveError::empty_attribute_name(container.path_base().clone()))?;

    let nullable_by_default = !parts.not_null.unwrap_or(false);

    let value_sources = build_value_sources(
        &ValueSourcesConfig {
            attribute_name: parts.name,
            containing_table,
            column_attribute: parts.column_attribute,
            formula_attribute: parts.formula_attribute,
            columns: parts.columns,
            formulas: parts.formulas,
            nullable_by_default,
            included_in_insert_by_default: parts.insert,
            included_in_update_by_default: parts.update,
            allow_empty: profile.allow_empty_value_sources,
        },
        &path,
    )?;

    let type_source = resolve_type_source(parts.class, ctx);
    let cascade_styles = interpret_cascades(parts.cascade, ctx, &path)?;

    // explicit class takes precedence over an explicit entity name
    let referenced_entity_name = match parts.class {
        Some(class) if !class.is_empty() => Some(ctx.qualify_type_name(class)),
        _ => parts.entity_name.map(ToString::to_string),
    };

    let ignore_not_found = parts
        .not_found
        .is_some_and(|token| token.eq_ignore_ascii_case("ignore"));

    Ok(ToOneAttributeSource {
        name: parts.name.to_string(),
        path,
        role,
        nature: profile.nature,
        type_source,
        containing_table: containing_table.to_string(),
        value_sources,
        cascade_styles,
        property_accessor: parts.access.map(ToString::to_string),
        natural_id_mutability,
        fetch_selection: parts.fetch.map(ToString::to_string),
        lazy_selection: parts.lazy.map(ToString::to_string),
        outer_join_selection: parts.outer_join.map(ToString::to_string),
        requires_immediate_fetch: profile.requires_immediate_fetch,
        referenced_entity_name,
        referenced_property_name: parts.property_ref.map(ToString::to_string),
        foreign_key_name: parts.foreign_key.map(ToString::to_string),
        foreign_key_direction: profile.foreign_key_direction,
        cascade_delete_enabled: profile.cascade_delete_enabled,
        unique: parts.unique,
        ignore_not_found,
        optimistic_lock: parts.optimistic_lock,
        include_in_insert_by_default: parts.insert,
        include_in_update_by_default: parts.update,
        nullable_by_default,
        tooling_hints: parts.meta.iter().map(ToolingHintDescriptor::to_hint).collect(),
    })
}

impl SingularAttributeSource for ToOneAttributeSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute_path(&self) -> &AttributePath {
        &self.path
    }

    fn attribute_role(&self) -> &AttributeRole {
        &self.role
    }

    fn nature(&self) -> SingularAttributeNature {
        self.nature
    }

    fn type_source(&self) -> &TypeSource {
        &self.type_source
    }

    fn property_accessor_name(&self) -> Option<&str> {
        self.property_accessor.as_deref()
    }

    fn natural_id_mutability(&self) -> NaturalIdMutability {
        self.natural_id_mutability
    }

    fn containing_table_name(&self) -> &str {
        &self.containing_table
    }

    fn relational_value_sources(&self) -> &[RelationalValueSource] {
        &self.value_sources
    }

    fn are_values_included_in_insert_by_default(&self) -> bool {
        self.include_in_insert_by_default
    }

    fn are_values_included_in_update_by_default(&self) -> bool {
        self.include_in_update_by_default
    }

    fn are_values_nullable_by_default(&self) -> bool {
        self.nullable_by_default
    }

    fn is_included_in_optimistic_locking(&self) -> bool {
        self.optimistic_lock
    }

    fn tooling_hints(&self) -> &[ToolingHint] {
        &self.tooling_hints
    }
}

impl AssociationAttributeSource for ToOneAttributeSource {
    fn cascade_styles(&self) -> &BTreeSet<CascadeAction> {
        &self.cascade_styles
    }

    fn fetch_selection(&self) -> Option<&str> {
        self.fetch_selection.as_deref()
    }

    fn lazy_selection(&self) -> Option<&str> {
        self.lazy_selection.as_deref()
    }

    fn outer_join_selection(&self) -> Option<&str> {
        self.outer_join_selection.as_deref()
    }

    fn requires_immediate_fetch(&self) -> bool {
        self.requires_immediate_fetch
    }

    fn referenced_entity_name(&self) -> Option<&str> {
        self.referenced_entity_name.as_deref()
    }

    fn referenced_property_name(&self) -> Option<&str> {
        self.referenced_property_name.as_deref()
    }

    fn explicit_foreign_key_name(&self) -> Option<&str> {
        self.foreign_key_name.as_deref()
    }

    fn foreign_key_direction(&self) -> ForeignKeyDirection {
        self.foreign_key_direction
    }

    fn is_unique(&self) -> bool {
        self.unique
    }

    fn is_ignore_not_found(&self) -> bool {
        self.ignore_not_found
    }

    fn is_cascade_delete_enabled(&self) -> bool {
        self.cascade_delete_enabled
    }
}
