use crate::prelude::*;

///
/// AttributeDescriptor
///
/// One association attribute of a containing entity's descriptor tree, as
/// handed over by the out-of-scope descriptor parser. Absent optional fields
/// are first-class values, never errors.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeDescriptor {
    ManyToOne(ManyToOneDescriptor),
    OneToOne(OneToOneDescriptor),
}

impl AttributeDescriptor {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ManyToOne(descriptor) => &descriptor.name,
            Self::OneToOne(descriptor) => &descriptor.name,
        }
    }
}

///
/// ManyToOneDescriptor
///
/// Raw `many-to-one` association descriptor. The column/formula shorthand
/// attributes and the explicit element lists are all optional; the value
/// source resolver enforces which combinations are legal.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ManyToOneDescriptor {
    pub name: String,
    pub access: Option<String>,
    pub class: Option<String>,
    pub entity_name: Option<String>,

    pub column_attribute: Option<String>,
    pub formula_attribute: Option<String>,
    pub columns: Vec<ColumnDescriptor>,
    pub formulas: Vec<String>,

    pub not_null: Option<bool>,
    pub unique: bool,
    pub optimistic_lock: bool,
    pub insert: bool,
    pub update: bool,

    pub fetch: Option<String>,
    pub lazy: Option<String>,
    pub outer_join: Option<String>,
    pub not_found: Option<String>,

    pub foreign_key: Option<String>,
    pub cascade: Option<String>,
    pub property_ref: Option<String>,
    pub meta: Vec<ToolingHintDescriptor>,
}

impl Default for ManyToOneDescriptor {
    fn default() -> Self {
        Self {
            name: String::new(),
            access: None,
            class: None,
            entity_name: None,
            column_attribute: None,
            formula_attribute: None,
            columns: Vec::new(),
            formulas: Vec::new(),
            not_null: None,
            unique: false,
            // descriptor-schema defaults
            optimistic_lock: true,
            insert: true,
            update: true,
            fetch: None,
            lazy: None,
            outer_join: None,
            not_found: None,
            foreign_key: None,
            cascade: None,
            property_ref: None,
            meta: Vec::new(),
        }
    }
}

///
/// OneToOneDescriptor
///
/// Raw `one-to-one` association descriptor. Maps no columns of its own;
/// only formulas may contribute relational values.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OneToOneDescriptor {
    pub name: String,
    pub access: Option<String>,
    pub class: Option<String>,
    pub entity_name: Option<String>,

    pub formula_attribute: Option<String>,
    pub formulas: Vec<String>,

    /// A constrained one-to-one owns a foreign key to its target.
    pub constrained: bool,

    pub fetch: Option<String>,
    pub lazy: Option<String>,
    pub outer_join: Option<String>,

    pub foreign_key: Option<String>,
    pub cascade: Option<String>,
    pub property_ref: Option<String>,
    pub meta: Vec<ToolingHintDescriptor>,
}

///
/// ColumnDescriptor
///
/// One explicit column element. Unset flags inherit the attribute-level
/// defaults during resolution.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ColumnDescriptor {
    pub name: String,
    pub not_null: Option<bool>,
    pub unique: Option<bool>,
    pub insert: Option<bool>,
    pub update: Option<bool>,
}

///
/// ToolingHintDescriptor
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ToolingHintDescriptor {
    pub name: String,
    pub value: String,
    pub inheritable: bool,
}

impl ToolingHintDescriptor {
    /// Normalize into the model-side hint carried on resolved sources.
    #[must_use]
    pub fn to_hint(&self) -> ToolingHint {
        ToolingHint {
            name: self.name.clone(),
            value: self.value.clone(),
            inheritable: self.inheritable,
        }
    }
}
