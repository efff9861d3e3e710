//! Resource tree model read by the matchers.
//!
//! - [`Resource`] - the capability set a host resource exposes
//! - [`Value`] / [`ValueMap`] - typed property values
//! - [`to_map`] / [`value_map!`](crate::value_map) - building expected property maps
//! - [`MemoryResource`] - a small in-memory resource node
//! - [`ResourceIter`] - a single-pass resource sequence, drained once

mod iter;
mod map;
mod memory;
mod value;

use std::rc::Rc;
use std::sync::Arc;

pub use iter::ResourceIter;
pub use map::to_map;
pub use memory::{MemoryResource, DEFAULT_RESOURCE_TYPE};
pub use value::{Value, ValueMap};

/// A node in a hierarchical content tree.
///
/// Matchers only read a resource; implementations are owned by the host.
pub trait Resource {
    /// Absolute path of the resource, e.g. `/content/site/page`.
    fn path(&self) -> &str;

    /// Simple name: the last segment of the path.
    ///
    /// The root resource `/` has an empty name. A single trailing `/` is
    /// ignored, so `/a/b/` is named `b`.
    fn name(&self) -> &str {
        let path = self.path();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        match path.rfind('/') {
            Some(idx) => &path[idx + 1..],
            None => path,
        }
    }

    /// The resource type tag, e.g. `app/components/page`.
    fn resource_type(&self) -> &str;

    /// The directly declared super type, if any.
    fn resource_super_type(&self) -> Option<&str> {
        None
    }

    /// Whether this resource is of the given type or derives from it.
    ///
    /// Hosts that know the full super-type chain should override this; the
    /// default only looks one level up.
    fn is_resource_type(&self, resource_type: &str) -> bool {
        self.resource_type() == resource_type
            || self.resource_super_type() == Some(resource_type)
    }

    /// Property values of the resource.
    fn properties(&self) -> &ValueMap;

    /// Child resources in iteration order.
    fn children(&self) -> Box<dyn Iterator<Item = &dyn Resource> + '_>;
}

macro_rules! forward_resource {
    ($($ptr:ty),+) => {
        $(
            impl<R: Resource + ?Sized> Resource for $ptr {
                fn path(&self) -> &str {
                    (**self).path()
                }

                fn name(&self) -> &str {
                    (**self).name()
                }

                fn resource_type(&self) -> &str {
                    (**self).resource_type()
                }

                fn resource_super_type(&self) -> Option<&str> {
                    (**self).resource_super_type()
                }

                fn is_resource_type(&self, resource_type: &str) -> bool {
                    (**self).is_resource_type(resource_type)
                }

                fn properties(&self) -> &ValueMap {
                    (**self).properties()
                }

                fn children(&self) -> Box<dyn Iterator<Item = &dyn Resource> + '_> {
                    (**self).children()
                }
            }
        )+
    };
}

forward_resource!(&R, Box<R>, Rc<R>, Arc<R>);
