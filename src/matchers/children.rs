//! Matching the names of a resource's children.

use std::collections::HashSet;

use crate::assertions::matcher::Matcher;
use crate::resource::Resource;

/// How a [`ChildrenMatcher`] compares expected and actual child names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildrenOptions {
    /// Actual children must be exactly the expected set, no extras.
    pub exhaustive: bool,
    /// Actual children must appear in the expected order. Implies
    /// `exhaustive`.
    pub ordered: bool,
}

impl ChildrenOptions {
    /// Expected names must be present; extra children are allowed.
    pub const CONTAINS: Self = Self {
        exhaustive: false,
        ordered: false,
    };

    /// Exactly the expected names, in any order.
    pub const EXACT_ANY_ORDER: Self = Self {
        exhaustive: true,
        ordered: false,
    };

    /// Exactly the expected names, in the expected order.
    pub const EXACT_ORDERED: Self = Self {
        exhaustive: true,
        ordered: true,
    };
}

/// Matcher over the names of a resource's children.
///
/// Created by [`has_children`](super::has_children),
/// [`contains_children`](super::contains_children) and
/// [`contains_children_in_any_order`](super::contains_children_in_any_order).
#[derive(Debug, Clone)]
pub struct ChildrenMatcher {
    expected: Vec<String>,
    options: ChildrenOptions,
}

impl ChildrenMatcher {
    /// Create a matcher for the given child names.
    pub fn new<I, S>(names: I, options: ChildrenOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected: names.into_iter().map(Into::into).collect(),
            options,
        }
    }

    fn child_names<R: Resource + ?Sized>(resource: &R) -> Vec<String> {
        resource.children().map(|c| c.name().to_string()).collect()
    }

    fn names_match(&self, actual: &[String]) -> bool {
        if self.options.ordered {
            return actual == self.expected.as_slice();
        }
        let actual: HashSet<&str> = actual.iter().map(String::as_str).collect();
        let expected: HashSet<&str> = self.expected.iter().map(String::as_str).collect();
        if self.options.exhaustive {
            actual == expected
        } else {
            expected.is_subset(&actual)
        }
    }
}

impl<R: Resource + ?Sized> Matcher<R> for ChildrenMatcher {
    fn matches(&self, resource: &R) -> bool {
        let actual = Self::child_names(resource);
        let matched = self.names_match(&actual);
        if !matched {
            tracing::trace!(
                path = resource.path(),
                expected = ?self.expected,
                actual = ?actual,
                "children mismatch"
            );
        }
        matched
    }

    fn describe(&self) -> String {
        let mode = match (self.options.ordered, self.options.exhaustive) {
            (true, _) => "exactly, in order",
            (false, true) => "exactly, in any order",
            (false, false) => "at least",
        };
        format!("Resource with children {:?} ({mode})", self.expected)
    }

    fn describe_mismatch(&self, resource: &R) -> String {
        format!("was Resource with children {:?}", Self::child_names(resource))
    }
}
