// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Matcher core shared by every resource matcher.
//!
//! - [`Matcher`] trait: predicate plus descriptions
//! - [`assert_that!`](crate::assert_that) macro
//! - Combinators: [`all_of`], [`all_of_boxed`], [`not`]
//!
//! # Example
//!
//! ```rust
//! use resource_matchers::assertions::matcher::{not, Matcher};
//! use resource_matchers::matchers::path;
//! use resource_matchers::resource::MemoryResource;
//!
//! let resource = MemoryResource::new("/content/page");
//! assert!(path("/content/page").matches(&resource));
//! assert!(not(path("/content/other")).matches(&resource));
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// A matcher for testing values.
///
/// # Implementing Custom Matchers
///
/// ```rust
/// use resource_matchers::assertions::matcher::Matcher;
/// use resource_matchers::resource::{MemoryResource, Resource};
///
/// struct IsLeaf;
///
/// impl<R: Resource + ?Sized> Matcher<R> for IsLeaf {
///     fn matches(&self, resource: &R) -> bool {
///         resource.children().next().is_none()
///     }
///
///     fn describe(&self) -> String {
///         "Resource without children".to_string()
///     }
///
///     fn describe_mismatch(&self, resource: &R) -> String {
///         format!("{} has children", resource.path())
///     }
/// }
///
/// let leaf = MemoryResource::new("/a");
/// assert!(IsLeaf.matches(&leaf));
/// assert!(!IsLeaf.matches(&MemoryResource::new("/b").with_children(["c"])));
/// ```
pub trait Matcher<T: ?Sized> {
    /// Check if the value matches.
    fn matches(&self, value: &T) -> bool;

    /// Describe what this matcher expects.
    fn describe(&self) -> String;

    /// Describe why a value didn't match.
    fn describe_mismatch(&self, value: &T) -> String;

    /// Check the value and turn a mismatch into an [`Error::AssertionFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssertionFailed`] carrying both descriptions if the
    /// value doesn't match.
    fn check(&self, value: &T) -> Result<()> {
        if self.matches(value) {
            Ok(())
        } else {
            Err(Error::assertion_failed(format!(
                "expected {}, but {}",
                self.describe(),
                self.describe_mismatch(value)
            )))
        }
    }
}

/// Assert that a value matches a matcher.
///
/// # Panics
///
/// Panics with the matcher's description and mismatch description if the
/// value doesn't match.
///
/// # Example
///
/// ```rust
/// use resource_matchers::assert_that;
/// use resource_matchers::matchers::name;
/// use resource_matchers::resource::MemoryResource;
///
/// assert_that!(MemoryResource::new("/content/page"), name("page"));
/// ```
#[macro_export]
macro_rules! assert_that {
    ($value:expr, $matcher:expr) => {{
        let value = &$value;
        let matcher = &$matcher;
        if !$crate::assertions::matcher::Matcher::matches(matcher, value) {
            panic!(
                "assertion failed\nExpected: {}\n     but: {}",
                $crate::assertions::matcher::describe_for(matcher, value),
                $crate::assertions::matcher::Matcher::describe_mismatch(matcher, value),
            );
        }
    }};
    ($value:expr, $matcher:expr, $($arg:tt)+) => {{
        let value = &$value;
        let matcher = &$matcher;
        if !$crate::assertions::matcher::Matcher::matches(matcher, value) {
            panic!(
                "assertion failed: {}\nExpected: {}\n     but: {}",
                format_args!($($arg)+),
                $crate::assertions::matcher::describe_for(matcher, value),
                $crate::assertions::matcher::Matcher::describe_mismatch(matcher, value),
            );
        }
    }};
}

/// Describe `matcher` as applied to values of `value`'s type.
///
/// `Matcher::describe` does not mention the target type, so a matcher that
/// implements `Matcher<R>` for many `R` needs the value to pick one.
#[doc(hidden)]
pub fn describe_for<T: ?Sized, M: Matcher<T> + ?Sized>(matcher: &M, _value: &T) -> String {
    matcher.describe()
}

// =============================================================================
// Combinators
// =============================================================================

/// Create a matcher that matches when all matchers match.
///
/// All matchers in the vector must be the same type. For different
/// matcher types, use [`all_of_boxed`] instead.
///
/// # Example
///
/// ```rust
/// use resource_matchers::assertions::matcher::{all_of, Matcher};
/// use resource_matchers::matchers::{resource_type_or_derived, ResourceTypeMatcher};
/// use resource_matchers::resource::MemoryResource;
///
/// let resource = MemoryResource::new("/a")
///     .with_resource_type("app/page")
///     .with_super_types(["app/base"]);
/// let m = all_of::<MemoryResource, ResourceTypeMatcher>(vec![
///     resource_type_or_derived("app/page"),
///     resource_type_or_derived("app/base"),
/// ]);
/// assert!(m.matches(&resource));
/// ```
pub fn all_of<T, M>(matchers: Vec<M>) -> AllOfMatcher<T>
where
    T: ?Sized,
    M: Matcher<T> + 'static,
{
    AllOfMatcher {
        matchers: matchers
            .into_iter()
            .map(|m| Box::new(m) as Box<dyn Matcher<T>>)
            .collect(),
    }
}

/// Create a matcher from boxed matchers of different types.
///
/// # Example
///
/// ```rust
/// use resource_matchers::assertions::matcher::{all_of_boxed, Matcher};
/// use resource_matchers::matchers::{name, path};
/// use resource_matchers::resource::MemoryResource;
///
/// let matchers: Vec<Box<dyn Matcher<MemoryResource>>> =
///     vec![Box::new(path("/content/a")), Box::new(name("a"))];
/// let m = all_of_boxed(matchers);
/// assert!(m.matches(&MemoryResource::new("/content/a")));
/// ```
pub fn all_of_boxed<T: ?Sized>(matchers: Vec<Box<dyn Matcher<T>>>) -> AllOfMatcher<T> {
    AllOfMatcher { matchers }
}

/// Matcher that requires all inner matchers to match.
pub struct AllOfMatcher<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

impl<T: ?Sized> fmt::Debug for AllOfMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AllOfMatcher")
            .field(&Matcher::<T>::describe(self))
            .finish()
    }
}

impl<T: ?Sized> Matcher<T> for AllOfMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        self.matchers.iter().all(|m| m.matches(value))
    }

    fn describe(&self) -> String {
        let descriptions: Vec<_> = self.matchers.iter().map(|m| m.describe()).collect();
        format!("({})", descriptions.join(" and "))
    }

    fn describe_mismatch(&self, value: &T) -> String {
        let failures: Vec<_> = self
            .matchers
            .iter()
            .filter(|m| !m.matches(value))
            .map(|m| m.describe_mismatch(value))
            .collect();
        failures.join(" and ")
    }
}

/// Create a negating matcher.
///
/// # Example
///
/// ```rust
/// use resource_matchers::assertions::matcher::{not, Matcher};
/// use resource_matchers::matchers::name;
/// use resource_matchers::resource::MemoryResource;
///
/// let m = not(name("other"));
/// assert!(m.matches(&MemoryResource::new("/content/page")));
/// ```
pub fn not<T: ?Sized, M: Matcher<T> + 'static>(matcher: M) -> NotMatcher<T> {
    NotMatcher {
        inner: Box::new(matcher),
    }
}

/// Matcher that negates another matcher.
pub struct NotMatcher<T: ?Sized> {
    inner: Box<dyn Matcher<T>>,
}

impl<T: ?Sized> fmt::Debug for NotMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NotMatcher")
            .field(&Matcher::<T>::describe(self))
            .finish()
    }
}

impl<T: ?Sized> Matcher<T> for NotMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        !self.inner.matches(value)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }

    fn describe_mismatch(&self, _value: &T) -> String {
        format!("unexpectedly matched: {}", self.inner.describe())
    }
}

// Implement Matcher for Box<dyn Matcher> to allow nesting
impl<T: ?Sized> Matcher<T> for Box<dyn Matcher<T>> {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        (**self).describe_mismatch(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{name, path};
    use crate::resource::MemoryResource;

    #[test]
    fn test_all_of_boxed_combinator() {
        let resource = MemoryResource::new("/content/page");
        let matchers: Vec<Box<dyn Matcher<MemoryResource>>> =
            vec![Box::new(path("/content/page")), Box::new(name("page"))];
        let m = all_of_boxed(matchers);
        assert!(m.matches(&resource));

        let matchers: Vec<Box<dyn Matcher<MemoryResource>>> =
            vec![Box::new(path("/content/page")), Box::new(name("other"))];
        let m = all_of_boxed(matchers);
        assert!(!m.matches(&resource));
        assert_eq!(m.describe_mismatch(&resource), "was Resource with name \"page\"");
    }

    #[test]
    fn test_all_of_describe() {
        let m = all_of::<MemoryResource, _>(vec![name("a"), name("b")]);
        assert_eq!(
            m.describe(),
            "(Resource with name \"a\" and Resource with name \"b\")"
        );
    }

    #[test]
    fn test_not_combinator() {
        let resource = MemoryResource::new("/content/page");
        let m = not(path("/content/other"));
        assert!(m.matches(&resource));
        assert!(!not(path("/content/page")).matches(&resource));
        assert_eq!(
            <NotMatcher<MemoryResource> as Matcher<MemoryResource>>::describe(&not(path("/x"))),
            "not Resource with path \"/x\""
        );
    }

    #[test]
    fn test_check_reports_mismatch() {
        let resource = MemoryResource::new("/content/page");
        assert!(path("/content/page").check(&resource).is_ok());

        let err = path("/content/other").check(&resource).unwrap_err();
        assert_eq!(
            err,
            Error::AssertionFailed(
                "expected Resource with path \"/content/other\", but was Resource with path \"/content/page\""
                    .to_string()
            )
        );
    }

    #[test]
    fn test_assert_that_macro() {
        let resource = MemoryResource::new("/content/page");
        assert_that!(resource, path("/content/page"));
        assert_that!(resource, not(name("other")), "resource {} is named", "page");
    }

    #[test]
    #[should_panic(expected = "but: was Resource with path \"/content/page\"")]
    fn test_assert_that_fails() {
        assert_that!(MemoryResource::new("/content/page"), path("/content/other"));
    }

    #[test]
    #[should_panic(expected = "assertion failed: checking root")]
    fn test_assert_that_fails_with_message() {
        assert_that!(MemoryResource::new("/"), name("root"), "checking {}", "root");
    }

    #[test]
    fn test_assert_that_with_generic_matchers() {
        let resource = MemoryResource::new("/a");
        assert_that!(resource, path("/a"));
        assert_that!(&resource as &dyn crate::resource::Resource, name("a"));
        assert_eq!(describe_for(&path("/a"), &resource), "Resource with path \"/a\"");
    }

    #[test]
    fn test_combinator_debug() {
        let m = all_of::<MemoryResource, _>(vec![name("a")]);
        assert_eq!(format!("{m:?}"), "AllOfMatcher(\"(Resource with name \\\"a\\\")\")");
        let n: NotMatcher<MemoryResource> = not(name("a"));
        assert_eq!(format!("{n:?}"), "NotMatcher(\"not Resource with name \\\"a\\\"\")");
    }

    #[test]
    fn test_boxed_matcher_nesting() {
        let inner: Box<dyn Matcher<MemoryResource>> = Box::new(name("page"));
        let m = not(inner);
        assert!(!m.matches(&MemoryResource::new("/content/page")));
    }
}
