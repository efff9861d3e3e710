//! # resource-matchers
//!
//! > Assertion matchers for content-repository resource trees
//!
//! **resource-matchers** checks the shape of resources in unit tests: path,
//! name, resource type, a subset of properties, child names, and the paths
//! of a resource sequence. Failed assertions explain what was expected and
//! what was found.
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_matchers::prelude::*;
//!
//! let page = MemoryResource::new("/content/page")
//!     .with_resource_type("app/page")
//!     .with_super_types(["app/base"])
//!     .with_property("jcr:title", "Page")
//!     .with_children(["header", "body"]);
//!
//! assert_that!(page, path("/content/page"));
//! assert_that!(page, resource_type_or_derived("app/base"));
//! assert_that!(page, name_and_props("page", value_map! { "jcr:title" => "Page" }));
//! assert_that!(page, contains_children_in_any_order(["body", "header"]));
//! assert_that!(page, not(has_children(["footer"])));
//! ```
//!
//! ## Features
//!
//! - **Scalar matchers** - path, name, exact or derived resource type, properties
//! - **Children matchers** - containment, exact set, exact order
//! - **Sequence matchers** - resource paths of slices and single-pass iterators
//! - **Map builder** - property maps from alternating key/value arguments

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod error;
pub mod matchers;
pub mod resource;

/// Prelude for convenient imports
///
/// ```rust
/// use resource_matchers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assert_that;
    pub use crate::assertions::matcher::{all_of, all_of_boxed, not, Matcher};
    pub use crate::error::{Error, Result};
    pub use crate::matchers::{
        contains_children, contains_children_in_any_order, has_children, name, name_and_props,
        name_and_props_from_args, path, paths, props, props_from_args, resource_type,
        resource_type_or_derived,
    };
    pub use crate::resource::{to_map, MemoryResource, Resource, ResourceIter, Value, ValueMap};
    pub use crate::value_map;
}

// Re-exports
pub use error::{Error, Result};
