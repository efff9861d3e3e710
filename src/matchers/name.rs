//! Matching a resource by its simple name.

use crate::assertions::matcher::Matcher;
use crate::resource::Resource;

/// Matcher for the last path segment of a resource. Created by
/// [`name`](super::name).
#[derive(Debug, Clone)]
pub struct NameMatcher {
    expected: String,
}

impl NameMatcher {
    pub(crate) fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<R: Resource + ?Sized> Matcher<R> for NameMatcher {
    fn matches(&self, resource: &R) -> bool {
        resource.name() == self.expected
    }

    fn describe(&self) -> String {
        format!("Resource with name {:?}", self.expected)
    }

    fn describe_mismatch(&self, resource: &R) -> String {
        format!("was Resource with name {:?}", resource.name())
    }
}
