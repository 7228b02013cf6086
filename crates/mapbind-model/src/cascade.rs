use crate::prelude::*;
use derive_more::{Display, FromStr};

///
/// CascadeAction
///
/// One lifecycle action propagated from an owning entity to an associated
/// entity. Interpreted cascade specifications are flattened, deduplicated
/// sets of these; the `all`/`none` shorthands are expanded by the
/// interpreter, never stored.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum CascadeAction {
    Detach,
    Lock,
    Merge,
    Persist,
    Refresh,
    Remove,
    Replicate,
}

impl CascadeAction {
    /// The full known action set, in sorted order. `all` expands to this at
    /// interpretation time.
    pub const ALL: [Self; 7] = [
        Self::Detach,
        Self::Lock,
        Self::Merge,
        Self::Persist,
        Self::Refresh,
        Self::Remove,
        Self::Replicate,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_tokens() {
        assert_eq!("persist".parse::<CascadeAction>().unwrap(), CascadeAction::Persist);
        assert_eq!("merge".parse::<CascadeAction>().unwrap(), CascadeAction::Merge);
        assert!("bogus".parse::<CascadeAction>().is_err());
    }

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(CascadeAction::ALL.len(), 7);
        assert!(CascadeAction::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
