// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Resource matcher factories.
//!
//! Scalar matchers look at a single resource:
//!
//! - [`path`], [`name`] - path and simple name
//! - [`resource_type`], [`resource_type_or_derived`] - resource type
//! - [`props`], [`props_from_args`] - a subset of the properties
//! - [`name_and_props`], [`name_and_props_from_args`] - both of the above
//!
//! Collection matchers look at children or at a sequence of resources:
//!
//! - [`has_children`], [`contains_children`], [`contains_children_in_any_order`]
//! - [`paths`] - paths of a slice, vector or [`ResourceIter`](crate::resource::ResourceIter)
//!
//! # Example
//!
//! ```rust
//! use resource_matchers::assert_that;
//! use resource_matchers::assertions::matcher::not;
//! use resource_matchers::matchers::{contains_children, has_children, props};
//! use resource_matchers::resource::MemoryResource;
//! use resource_matchers::value_map;
//!
//! let parent = MemoryResource::new("/parent")
//!     .with_property("jcr:title", "Parent")
//!     .with_children(["child1", "child2"]);
//!
//! assert_that!(parent, has_children(["child1"]));
//! assert_that!(parent, contains_children(["child1", "child2"]));
//! assert_that!(parent, not(contains_children(["child2", "child1"])));
//! assert_that!(parent, props(value_map! { "jcr:title" => "Parent" }));
//! ```

mod children;
mod collection;
mod name;
mod path;
mod properties;
mod resource_type;

pub use children::{ChildrenMatcher, ChildrenOptions};
pub use collection::ResourcePathsMatcher;
pub use name::NameMatcher;
pub use path::PathMatcher;
pub use properties::PropertiesMatcher;
pub use resource_type::ResourceTypeMatcher;

use crate::assertions::matcher::{all_of_boxed, AllOfMatcher, Matcher};
use crate::error::Result;
use crate::resource::{to_map, Resource, Value, ValueMap};

/// Match resources with exactly the given path.
///
/// ```rust
/// use resource_matchers::assertions::matcher::Matcher;
/// use resource_matchers::matchers::path;
/// use resource_matchers::resource::MemoryResource;
///
/// assert!(path("/a/b/c").matches(&MemoryResource::new("/a/b/c")));
/// ```
pub fn path(expected: impl Into<String>) -> PathMatcher {
    PathMatcher::new(expected)
}

/// Match resources with the given name, i.e. the last path segment.
pub fn name(expected: impl Into<String>) -> NameMatcher {
    NameMatcher::new(expected)
}

/// Match resources whose resource type is exactly `expected`.
///
/// Use [`resource_type_or_derived`] to also accept types deriving from it.
pub fn resource_type(expected: impl Into<String>) -> ResourceTypeMatcher {
    ResourceTypeMatcher::new(expected, false)
}

/// Match resources of type `expected` or any type deriving from it.
///
/// ```rust
/// use resource_matchers::assertions::matcher::Matcher;
/// use resource_matchers::matchers::{resource_type, resource_type_or_derived};
/// use resource_matchers::resource::MemoryResource;
///
/// let r = MemoryResource::new("/r")
///     .with_resource_type("my/app/page")
///     .with_super_types(["my/app/base"]);
/// assert!(resource_type_or_derived("my/app/base").matches(&r));
/// assert!(!resource_type("my/app/base").matches(&r));
/// ```
pub fn resource_type_or_derived(expected: impl Into<String>) -> ResourceTypeMatcher {
    ResourceTypeMatcher::new(expected, true)
}

/// Match resources having at least the given properties with equal values.
///
/// Properties not listed in `expected` are not checked. Array values are
/// compared element by element.
pub fn props(expected: impl Into<ValueMap>) -> PropertiesMatcher {
    PropertiesMatcher::new(expected.into())
}

/// Like [`props`], taking an alternating key/value argument list.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
/// arguments do not form a map, see [`to_map`].
///
/// ```rust
/// use resource_matchers::assertions::matcher::Matcher;
/// use resource_matchers::matchers::props_from_args;
/// use resource_matchers::resource::{MemoryResource, Value};
///
/// let r = MemoryResource::new("/r").with_property("key1", "value1");
/// let m = props_from_args(&[Value::from("key1"), Value::from("value1")]).unwrap();
/// assert!(m.matches(&r));
/// assert!(props_from_args(&[Value::from("key1")]).is_err());
/// ```
pub fn props_from_args(args: &[Value]) -> Result<PropertiesMatcher> {
    Ok(props(to_map(args)?))
}

/// Match resources with the given name and at least the given properties.
pub fn name_and_props<R>(expected_name: impl Into<String>, expected: impl Into<ValueMap>) -> AllOfMatcher<R>
where
    R: Resource + ?Sized,
{
    let matchers: Vec<Box<dyn Matcher<R>>> =
        vec![Box::new(name(expected_name)), Box::new(props(expected))];
    all_of_boxed(matchers)
}

/// Like [`name_and_props`], taking an alternating key/value argument list.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
/// arguments do not form a map, see [`to_map`].
pub fn name_and_props_from_args<R>(expected_name: impl Into<String>, args: &[Value]) -> Result<AllOfMatcher<R>>
where
    R: Resource + ?Sized,
{
    Ok(name_and_props(expected_name, to_map(args)?))
}

/// Match resources having children with all the given names, in any order.
/// Other children are not checked.
pub fn has_children<I, S>(names: I) -> ChildrenMatcher
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ChildrenMatcher::new(names, ChildrenOptions::CONTAINS)
}

/// Match resources having exactly the children with the given names, in
/// the given order.
pub fn contains_children<I, S>(names: I) -> ChildrenMatcher
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ChildrenMatcher::new(names, ChildrenOptions::EXACT_ORDERED)
}

/// Match resources having exactly the children with the given names, in any
/// order.
pub fn contains_children_in_any_order<I, S>(names: I) -> ChildrenMatcher
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ChildrenMatcher::new(names, ChildrenOptions::EXACT_ANY_ORDER)
}

/// Match a sequence of resources having exactly the given paths, in order.
///
/// ```rust
/// use resource_matchers::assertions::matcher::Matcher;
/// use resource_matchers::matchers::paths;
/// use resource_matchers::resource::MemoryResource;
///
/// let list = vec![MemoryResource::new("/a"), MemoryResource::new("/b")];
/// assert!(paths(["/a", "/b"]).matches(&list));
/// assert!(!paths(["/b", "/a"]).matches(&list));
/// ```
pub fn paths<I, S>(paths: I) -> ResourcePathsMatcher
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ResourcePathsMatcher::new(paths)
}
