use crate::prelude::*;
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// PathError
///

#[derive(Debug, ThisError)]
pub enum PathError {
    #[error("empty path segment under '{base}'")]
    EmptySegment { base: String },
}

///
/// AttributePath
///
/// Dotted value-access identity of one attribute within its containing
/// entity/component hierarchy. Derived by appending the attribute's local
/// name to the container's path; immutable once built. Equality and hashing
/// are structural over the segment sequence.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct AttributePath {
    segments: Vec<String>,
}

impl AttributePath {
    /// The empty base path an entity container contributes to its attributes.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Append one local name, producing the child path.
    /// Fails only on an empty local name.
    pub fn append(&self, local_name: &str) -> Result<Self, PathError> {
        if local_name.is_empty() {
            return Err(PathError::EmptySegment {
                base: self.to_string(),
            });
        }

        let mut segments = self.segments.clone();
        segments.push(local_name.to_string());

        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, i.e. the attribute's local name. `None` for the root.
    #[must_use]
    pub fn local_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

///
/// AttributeRole
///
/// Structurally identical to [`AttributePath`] but scoped to role-based
/// lookups (override resolution); a distinct type so the two can never be
/// conflated.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct AttributeRole {
    segments: Vec<String>,
}

impl AttributeRole {
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Append one local name, producing the child role.
    /// Fails only on an empty local name.
    pub fn append(&self, local_name: &str) -> Result<Self, PathError> {
        if local_name.is_empty() {
            return Err(PathError::EmptySegment {
                base: self.to_string(),
            });
        }

        let mut segments = self.segments.clone();
        segments.push(local_name.to_string());

        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn local_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Display for AttributeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
