use crate::{error::ResolveError, prelude::*};
use log::debug;

///
/// CascadeErrorPolicy
///
/// What an invalid cascade token does to the enclosing entity's pass.
/// Structural errors always abort regardless of policy.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CascadeErrorPolicy {
    #[default]
    Abort,
    SkipAttribute,
}

///
/// ResolutionOutcome
///
/// Sources resolved by one entity pass, plus the attribute-level failures
/// the policy chose to skip (each still carries its attribute path).
///

#[derive(Debug, Default)]
pub struct ResolutionOutcome {
    pub sources: Vec<ToOneAttributeSource>,
    pub skipped: Vec<ResolveError>,
}

/// Resolve every association attribute of one container in a single
/// top-down pass, in descriptor document order.
///
/// Sibling attributes have no ordering dependency on each other; the order
/// here only mirrors the document. Nothing partial is ever published: an
/// aborting error discards the attribute it came from, and skipped
/// attributes contribute no source at all.
pub fn resolve_attributes(
    container: &ContainerContext,
    descriptors: &[AttributeDescriptor],
    containing_table: &str,
    natural_id_mutability: NaturalIdMutability,
    ctx: &BindingContext,
    policy: CascadeErrorPolicy,
) -> Result<ResolutionOutcome, ResolveError> {
    let mut outcome = ResolutionOutcome::default();

    for descriptor in descriptors {
        let resolved = match descriptor {
            AttributeDescriptor::ManyToOne(many_to_one) => ToOneAttributeSource::many_to_one(
                container,
                many_to_one,
                containing_table,
                natural_id_mutability,
                ctx,
            ),
            AttributeDescriptor::OneToOne(one_to_one) => ToOneAttributeSource::one_to_one(
                container,
                one_to_one,
                containing_table,
                natural_id_mutability,
                ctx,
            ),
        };

        match resolved {
            Ok(source) => {
                debug!(
                    "resolved attribute '{}' in table '{containing_table}'",
                    source.attribute_path()
                );
                outcome.sources.push(source);
            }
            Err(err) if err.is_structural() || policy == CascadeErrorPolicy::Abort => {
                return Err(err);
            }
            Err(err) => {
                debug!("skipping attribute '{}': {err}", err.path());
                outcome.skipped.push(err);
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ManyToOneDescriptor;

    fn descriptor(name: &str, cascade: Option<&str>) -> AttributeDescriptor {
        AttributeDescriptor::ManyToOne(ManyToOneDescriptor {
            name: name.to_string(),
            class: Some("Employee".to_string()),
            column_attribute: Some(String::new()),
            cascade: cascade.map(ToString::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn resolves_attributes_in_document_order() {
        let container = ContainerContext::for_entity("Employee").unwrap();
        let ctx = BindingContext::new();
        let descriptors = vec![descriptor("manager", None), descriptor("mentor", None)];

        let outcome = resolve_attributes(
            &container,
            &descriptors,
            "t_employee",
            NaturalIdMutability::default(),
            &ctx,
            CascadeErrorPolicy::Abort,
        )
        .unwrap();

        let names: Vec<&str> = outcome.sources.iter().map(SingularAttributeSource::name).collect();
        assert_eq!(names, ["manager", "mentor"]);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn skip_policy_collects_cascade_failures_and_continues() {
        let container = ContainerContext::for_entity("Employee").unwrap();
        let ctx = BindingContext::new();
        let descriptors = vec![
            descriptor("manager", Some("persist,bogus")),
            descriptor("mentor", Some("merge")),
        ];

        let outcome = resolve_attributes(
            &container,
            &descriptors,
            "t_employee",
            NaturalIdMutability::default(),
            &ctx,
            CascadeErrorPolicy::SkipAttribute,
        )
        .unwrap();

        assert_eq!(outcome.sources.len(), 1);
        assert_eq!(outcome.sources[0].name(), "mentor");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].path().to_string(), "manager");
    }

    #[test]
    fn abort_policy_stops_at_first_cascade_failure() {
        let container = ContainerContext::for_entity("Employee").unwrap();
        let ctx = BindingContext::new();
        let descriptors = vec![
            descriptor("manager", Some("bogus")),
            descriptor("mentor", None),
        ];

        let err = resolve_attributes(
            &container,
            &descriptors,
            "t_employee",
            NaturalIdMutability::default(),
            &ctx,
            CascadeErrorPolicy::Abort,
        )
        .unwrap_err();

        assert!(matches!(err, ResolveError::InvalidCascadeToken { .. }));
    }

    #[test]
    fn structural_errors_abort_even_under_skip_policy() {
        let container = ContainerContext::for_entity("Employee").unwrap();
        let ctx = BindingContext::new();
        let descriptors = vec![AttributeDescriptor::ManyToOne(ManyToOneDescriptor {
            name: "manager".to_string(),
            ..Default::default()
        })];

        let err = resolve_attributes(
            &container,
            &descriptors,
            "t_employee",
            NaturalIdMutability::default(),
            &ctx,
            CascadeErrorPolicy::SkipAttribute,
        )
        .unwrap_err();

        assert!(err.is_structural());
    }
}
