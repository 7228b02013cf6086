use crate::prelude::*;
use thiserror::Error as ThisError;

///
/// ResolveError
///
/// Resolution failures for one attribute. Every variant carries the
/// offending attribute path so callers can report precisely which attribute
/// of which entity is malformed. Structural variants abort resolution of the
/// enclosing entity; an invalid cascade token is recoverable at the entity
/// level if the caller chooses to skip the attribute.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    /// Both explicit column and formula lists are populated.
    #[error("attribute '{path}' declares both explicit columns and formulas")]
    ColumnsAndFormulas { path: AttributePath },

    /// Neither a shorthand nor any explicit list maps this attribute to a
    /// relational value.
    #[error("attribute '{path}' maps no relational value")]
    MissingRelationalMapping { path: AttributePath },

    /// The descriptor's local attribute name is empty.
    #[error("empty attribute name under container '{path}'")]
    EmptyAttributeName { path: AttributePath },

    /// The cascade specification contains an unrecognized token.
    #[error("attribute '{path}' declares unknown cascade token '{token}'")]
    InvalidCascadeToken { path: AttributePath, token: String },
}

impl ResolveError {
    // Construct the both-kinds contradiction error.
    pub(crate) const fn columns_and_formulas(path: AttributePath) -> Self {
        Self::ColumnsAndFormulas { path }
    }

    // Construct the no-relational-value error.
    pub(crate) const fn missing_relational_mapping(path: AttributePath) -> Self {
        Self::MissingRelationalMapping { path }
    }

    // Construct the empty-local-name error for a container base path.
    pub(crate) const fn empty_attribute_name(path: AttributePath) -> Self {
        Self::EmptyAttributeName { path }
    }

    // Construct one unknown-cascade-token error.
    pub(crate) fn invalid_cascade_token(path: AttributePath, token: impl Into<String>) -> Self {
        Self::InvalidCascadeToken {
            path,
            token: token.into(),
        }
    }

    /// The attribute path the failure is attached to. For an empty attribute
    /// name this is the container's base path.
    #[must_use]
    pub const fn path(&self) -> &AttributePath {
        match self {
            Self::ColumnsAndFormulas { path }
            | Self::MissingRelationalMapping { path }
            | Self::EmptyAttributeName { path }
            | Self::InvalidCascadeToken { path, .. } => path,
        }
    }

    /// Structural errors indicate a malformed or self-contradictory
    /// descriptor and are fatal for the enclosing entity.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        !matches!(self, Self::InvalidCascadeToken { .. })
    }
}
