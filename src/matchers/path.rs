//! Matching a resource by its absolute path.

use crate::assertions::matcher::Matcher;
use crate::resource::Resource;

/// Matcher for a resource's path. Created by [`path`](super::path).
#[derive(Debug, Clone)]
pub struct PathMatcher {
    expected: String,
}

impl PathMatcher {
    pub(crate) fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<R: Resource + ?Sized> Matcher<R> for PathMatcher {
    fn matches(&self, resource: &R) -> bool {
        resource.path() == self.expected
    }

    fn describe(&self) -> String {
        format!("Resource with path {:?}", self.expected)
    }

    fn describe_mismatch(&self, resource: &R) -> String {
        format!("was Resource with path {:?}", resource.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::MemoryResource;

    #[test]
    fn test_path_matcher() {
        let resource = MemoryResource::new("/resource");
        let m = PathMatcher::new("/resource");
        assert!(m.matches(&resource));
        assert!(!PathMatcher::new("some/other/name").matches(&resource));
    }

    #[test]
    fn test_path_matcher_descriptions() {
        let m = PathMatcher::new("/a");
        assert_eq!(<PathMatcher as Matcher<MemoryResource>>::describe(&m), "Resource with path \"/a\"");
        assert_eq!(
            m.describe_mismatch(&MemoryResource::new("/b")),
            "was Resource with path \"/b\""
        );
    }
}
