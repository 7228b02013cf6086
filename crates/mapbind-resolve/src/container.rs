use crate::prelude::*;
use mapbind_model::path::PathError;

///
/// ContainerContext
///
/// Identity bases the containing entity or component contributes to each of
/// its attributes. The path base addresses values; the role base addresses
/// role-scoped lookups such as override resolution.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContainerContext {
    path_base: AttributePath,
    role_base: AttributeRole,
}

impl ContainerContext {
    /// Container for an entity root: empty path base, role base anchored at
    /// the entity name.
    pub fn for_entity(entity_name: &str) -> Result<Self, PathError> {
        Ok(Self {
            path_base: AttributePath::root(),
            role_base: AttributeRole::root().append(entity_name)?,
        })
    }

    /// Container for a component nested under this one.
    pub fn nested(&self, local_name: &str) -> Result<Self, PathError> {
        Ok(Self {
            path_base: self.path_base.append(local_name)?,
            role_base: self.role_base.append(local_name)?,
        })
    }

    pub fn attribute_path(&self, local_name: &str) -> Result<AttributePath, PathError> {
        self.path_base.append(local_name)
    }

    pub fn attribute_role(&self, local_name: &str) -> Result<AttributeRole, PathError> {
        self.role_base.append(local_name)
    }

    #[must_use]
    pub const fn path_base(&self) -> &AttributePath {
        &self.path_base
    }

    #[must_use]
    pub const fn role_base(&self) -> &AttributeRole {
        &self.role_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_container_anchors_roles_at_entity_name() {
        let container = ContainerContext::for_entity("Employee").unwrap();

        assert_eq!(container.attribute_path("manager").unwrap().to_string(), "manager");
        assert_eq!(
            container.attribute_role("manager").unwrap().to_string(),
            "Employee.manager"
        );
    }

    #[test]
    fn nested_container_extends_both_bases() {
        let container = ContainerContext::for_entity("Employee")
            .unwrap()
            .nested("address")
            .unwrap();

        assert_eq!(
            container.attribute_path("city").unwrap().to_string(),
            "address.city"
        );
        assert_eq!(
            container.attribute_role("city").unwrap().to_string(),
            "Employee.address.city"
        );
    }

    #[test]
    fn empty_entity_name_is_rejected() {
        assert!(ContainerContext::for_entity("").is_err());
    }
}
