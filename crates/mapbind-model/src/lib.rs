//! Resolved-model vocabulary for mapping resolution: attribute identities,
//! relational value sources, cascade actions, type sources, and association
//! semantics. Pure data; all resolution logic lives in `mapbind-resolve`.

pub mod association;
pub mod cascade;
pub mod hints;
pub mod path;
pub mod relational;
pub mod typesource;

use crate::path::PathError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        association::{ForeignKeyDirection, NaturalIdMutability, SingularAttributeNature},
        cascade::CascadeAction,
        hints::ToolingHint,
        path::{AttributePath, AttributeRole},
        relational::{ColumnSource, FormulaSource, RelationalValueSource},
        typesource::{TypeDescriptor, TypeParameter, TypeSource},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    PathError(#[from] PathError),
}
