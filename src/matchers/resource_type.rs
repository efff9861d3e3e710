//! Matching a resource by its resource type.

use crate::assertions::matcher::Matcher;
use crate::resource::Resource;

/// Matcher for a resource type, exact or allowing derived types.
///
/// Created by [`resource_type`](super::resource_type) and
/// [`resource_type_or_derived`](super::resource_type_or_derived). The derived
/// mode asks the resource itself through [`Resource::is_resource_type`].
#[derive(Debug, Clone)]
pub struct ResourceTypeMatcher {
    expected: String,
    allow_derived: bool,
}

impl ResourceTypeMatcher {
    pub(crate) fn new(expected: impl Into<String>, allow_derived: bool) -> Self {
        Self {
            expected: expected.into(),
            allow_derived,
        }
    }
}

impl<R: Resource + ?Sized> Matcher<R> for ResourceTypeMatcher {
    fn matches(&self, resource: &R) -> bool {
        if self.allow_derived {
            resource.is_resource_type(&self.expected)
        } else {
            resource.resource_type() == self.expected
        }
    }

    fn describe(&self) -> String {
        if self.allow_derived {
            format!("Resource with type {:?} or derived", self.expected)
        } else {
            format!("Resource with type {:?}", self.expected)
        }
    }

    fn describe_mismatch(&self, resource: &R) -> String {
        format!(
            "was Resource with type {:?} (resource: {})",
            resource.resource_type(),
            resource.path()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::MemoryResource;

    fn resource() -> MemoryResource {
        MemoryResource::new("/resource")
            .with_resource_type("some/type")
            .with_super_types(["some/base/type"])
            .with_property("some other key", "some other value")
    }

    #[test]
    fn test_exact_type() {
        let r = resource();
        assert!(ResourceTypeMatcher::new("some/type", false).matches(&r));
        assert!(!ResourceTypeMatcher::new("some/base/type", false).matches(&r));
        assert!(!ResourceTypeMatcher::new("some/other/type", false).matches(&r));
    }

    #[test]
    fn test_derived_type() {
        let r = resource();
        assert!(ResourceTypeMatcher::new("some/type", true).matches(&r));
        assert!(ResourceTypeMatcher::new("some/base/type", true).matches(&r));
        assert!(!ResourceTypeMatcher::new("some/other/type", true).matches(&r));
    }

    #[test]
    fn test_mismatch_reports_actual_type() {
        let m = ResourceTypeMatcher::new("some/other/type", false);
        assert_eq!(
            m.describe_mismatch(&resource()),
            "was Resource with type \"some/type\" (resource: /resource)"
        );
        assert_eq!(
            <ResourceTypeMatcher as Matcher<MemoryResource>>::describe(&ResourceTypeMatcher::new("a", true)),
            "Resource with type \"a\" or derived"
        );
    }
}
