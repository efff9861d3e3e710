//! Assertion plumbing shared by the resource matchers.
//!
//! - [`matcher`] - the [`Matcher`](matcher::Matcher) trait and combinators
//! - [`assert_that!`](crate::assert_that) - assert a value against a matcher
//!
//! # Example
//!
//! ```rust
//! use resource_matchers::assert_that;
//! use resource_matchers::assertions::matcher::not;
//! use resource_matchers::matchers::{name, path};
//! use resource_matchers::resource::MemoryResource;
//!
//! let resource = MemoryResource::new("/content/page");
//! assert_that!(resource, path("/content/page"));
//! assert_that!(resource, not(name("other")));
//! ```

pub mod matcher;

pub use matcher::{all_of, all_of_boxed, not, AllOfMatcher, Matcher, NotMatcher};
