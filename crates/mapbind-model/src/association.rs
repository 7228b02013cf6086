use crate::prelude::*;

///
/// ForeignKeyDirection
///
/// Which side of a to-one relationship owns the referencing key. A
/// many-to-one always points to the parent; a one-to-one depends on which
/// side is constrained.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ForeignKeyDirection {
    FromParent,
    ToParent,
}

///
/// SingularAttributeNature
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum SingularAttributeNature {
    ManyToOne,
    OneToOne,
}

///
/// NaturalIdMutability
///
/// Whether the attribute participates in its entity's natural id, and if so
/// whether that natural id may change. Propagated from the container during
/// resolution, never re-derived per attribute.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum NaturalIdMutability {
    Immutable,
    Mutable,

    #[default]
    NotNaturalId,
}
