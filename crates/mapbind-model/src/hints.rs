use crate::prelude::*;
use std::ops::Not;

///
/// ToolingHint
///
/// Arbitrary key/value annotation carried through resolution for downstream
/// tooling. Opaque to the engine.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ToolingHint {
    pub name: String,
    pub value: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub inheritable: bool,
}
