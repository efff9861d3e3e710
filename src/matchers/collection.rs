//! Matching the paths of a resource sequence.

use crate::assertions::matcher::Matcher;
use crate::resource::{Resource, ResourceIter};

/// Matcher requiring a sequence of resources to have exactly the expected
/// paths, in order. Created by [`paths`](super::paths).
///
/// Works on slices, vectors and [`ResourceIter`] wrappers around single-pass
/// iterators.
#[derive(Debug, Clone)]
pub struct ResourcePathsMatcher {
    expected: Vec<String>,
}

impl ResourcePathsMatcher {
    pub(crate) fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected: paths.into_iter().map(Into::into).collect(),
        }
    }

    fn paths_match<R: Resource>(&self, resources: &[R]) -> bool {
        resources.len() == self.expected.len()
            && resources
                .iter()
                .zip(&self.expected)
                .all(|(resource, expected)| resource.path() == expected.as_str())
    }

    fn describe_paths<R: Resource>(resources: &[R]) -> String {
        let actual: Vec<&str> = resources.iter().map(Resource::path).collect();
        format!("was Resources with paths {actual:?}")
    }
}

impl<R: Resource> Matcher<[R]> for ResourcePathsMatcher {
    fn matches(&self, resources: &[R]) -> bool {
        self.paths_match(resources)
    }

    fn describe(&self) -> String {
        format!("Resources with paths {:?}", self.expected)
    }

    fn describe_mismatch(&self, resources: &[R]) -> String {
        Self::describe_paths(resources)
    }
}

impl<R: Resource> Matcher<Vec<R>> for ResourcePathsMatcher {
    fn matches(&self, resources: &Vec<R>) -> bool {
        self.paths_match(resources)
    }

    fn describe(&self) -> String {
        format!("Resources with paths {:?}", self.expected)
    }

    fn describe_mismatch(&self, resources: &Vec<R>) -> String {
        Self::describe_paths(resources)
    }
}

impl<I> Matcher<ResourceIter<I>> for ResourcePathsMatcher
where
    I: Iterator,
    I::Item: Resource,
{
    fn matches(&self, resources: &ResourceIter<I>) -> bool {
        resources.with_resources(|items| self.paths_match(items))
    }

    fn describe(&self) -> String {
        format!("Resources with paths {:?}", self.expected)
    }

    fn describe_mismatch(&self, resources: &ResourceIter<I>) -> String {
        resources.with_resources(|items| Self::describe_paths(items))
    }
}
