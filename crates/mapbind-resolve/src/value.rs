use crate::{descriptor::ColumnDescriptor, error::ResolveError, prelude::*};

///
/// ValueSourcesConfig
///
/// Explicit value-source inputs for one attribute, passed by value into the
/// resolver. The shape is fixed at compile time per call site; variants fill
/// in only the fields their descriptor surface carries.
///

#[derive(Clone, Debug)]
pub struct ValueSourcesConfig<'a> {
    /// Local attribute name; the column name of last resort when the
    /// shorthand is the empty "use default" marker.
    pub attribute_name: &'a str,
    /// Logical name of the containing table, inherited by every produced
    /// source.
    pub containing_table: &'a str,

    /// Attribute-level single-column shorthand.
    pub column_attribute: Option<&'a str>,
    /// Attribute-level single-formula shorthand.
    pub formula_attribute: Option<&'a str>,
    /// Explicit column elements, in document order.
    pub columns: &'a [ColumnDescriptor],
    /// Explicit formula strings, in document order.
    pub formulas: &'a [String],

    pub nullable_by_default: bool,
    pub included_in_insert_by_default: bool,
    pub included_in_update_by_default: bool,

    /// Variants that map no relational values of their own (one-to-one) may
    /// legally resolve to an empty sequence.
    pub allow_empty: bool,
}

/// Resolve the ordered relational-value sources for one attribute.
///
/// Precedence: the kind-contradiction checks run first regardless of other
/// field values, then the attribute-level shorthands, then the explicit
/// lists. Produced order matches descriptor document order.
pub fn build_value_sources(
    config: &ValueSourcesConfig<'_>,
    path: &AttributePath,
) -> Result<Vec<RelationalValueSource>, ResolveError> {
    if !config.columns.is_empty() && !config.formulas.is_empty() {
        return Err(ResolveError::columns_and_formulas(path.clone()));
    }
    if config.column_attribute.is_some() && config.formula_attribute.is_some() {
        return Err(ResolveError::columns_and_formulas(path.clone()));
    }

    if let Some(column_name) = config.column_attribute {
        // empty shorthand marker means "use the attribute's local name"
        let name = if column_name.is_empty() {
            config.attribute_name
        } else {
            column_name
        };

        return Ok(vec![RelationalValueSource::Column(ColumnSource {
            name: name.to_string(),
            containing_table: config.containing_table.to_string(),
            nullable: config.nullable_by_default,
            unique: false,
            included_in_insert: config.included_in_insert_by_default,
            included_in_update: config.included_in_update_by_default,
        })]);
    }

    if let Some(expression) = config.formula_attribute {
        return Ok(vec![RelationalValueSource::Formula(FormulaSource {
            expression: expression.to_string(),
            containing_table: config.containing_table.to_string(),
        })]);
    }

    if !config.columns.is_empty() {
        let sources = config
            .columns
            .iter()
            .map(|column| {
                RelationalValueSource::Column(ColumnSource {
                    name: column.name.clone(),
                    containing_table: config.containing_table.to_string(),
                    nullable: column
                        .not_null
                        .map_or(config.nullable_by_default, |not_null| !not_null),
                    unique: column.unique.unwrap_or(false),
                    included_in_insert: column
                        .insert
                        .unwrap_or(config.included_in_insert_by_default),
                    included_in_update: column
                        .update
                        .unwrap_or(config.included_in_update_by_default),
                })
            })
            .collect();

        return Ok(sources);
    }

    if !config.formulas.is_empty() {
        let sources = config
            .formulas
            .iter()
            .map(|expression| {
                RelationalValueSource::Formula(FormulaSource {
                    expression: expression.clone(),
                    containing_table: config.containing_table.to_string(),
                })
            })
            .collect();

        return Ok(sources);
    }

    if config.allow_empty {
        return Ok(Vec::new());
    }

    Err(ResolveError::missing_relational_mapping(path.clone()))
}
