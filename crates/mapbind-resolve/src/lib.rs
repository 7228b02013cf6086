//! Resolution engine: converts raw association-mapping descriptors into the
//! normalized attribute source model of `mapbind-model`, applying the layered
//! defaulting rules (explicit descriptor value, container default, global
//! convention) a downstream binder depends on.

pub mod cascade;
pub mod container;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod resolve;
pub mod source;
pub mod typesrc;
pub mod value;

use crate::error::ResolveError;
use mapbind_model::path::PathError;
use thiserror::Error as ThisError;

///
/// Prelude
///
/// Domain vocabulary only; no resolvers or helpers are re-exported here.
///

pub mod prelude {
    pub use mapbind_model::prelude::*;

    pub use crate::{
        container::ContainerContext,
        context::BindingContext,
        descriptor::AttributeDescriptor,
        source::{AssociationAttributeSource, SingularAttributeSource, ToOneAttributeSource},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    PathError(#[from] PathError),

    #[error(transparent)]
    ResolveError(#[from] ResolveError),
}
