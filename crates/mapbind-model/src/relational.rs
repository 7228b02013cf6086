use crate::prelude::*;
use std::ops::Not;

///
/// RelationalValueSource
///
/// A column or SQL formula that supplies/receives an attribute's persisted
/// value. An attribute carries an ordered, kind-homogeneous sequence of
/// these; order must match descriptor document order.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RelationalValueSource {
    Column(ColumnSource),
    Formula(FormulaSource),
}

impl RelationalValueSource {
    #[must_use]
    pub const fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }

    #[must_use]
    pub const fn is_formula(&self) -> bool {
        matches!(self, Self::Formula(_))
    }

    #[must_use]
    pub const fn as_column(&self) -> Option<&ColumnSource> {
        match self {
            Self::Column(column) => Some(column),
            Self::Formula(_) => None,
        }
    }

    #[must_use]
    pub const fn as_formula(&self) -> Option<&FormulaSource> {
        match self {
            Self::Column(_) => None,
            Self::Formula(formula) => Some(formula),
        }
    }

    /// Logical name of the table this value lives in.
    #[must_use]
    pub fn containing_table(&self) -> &str {
        match self {
            Self::Column(column) => &column.containing_table,
            Self::Formula(formula) => &formula.containing_table,
        }
    }
}

///
/// ColumnSource
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ColumnSource {
    pub name: String,
    pub containing_table: String,
    pub nullable: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub unique: bool,

    pub included_in_insert: bool,
    pub included_in_update: bool,
}

///
/// FormulaSource
///
/// Raw SQL fragment evaluated in place of a column.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FormulaSource {
    pub expression: String,
    pub containing_table: String,
}
