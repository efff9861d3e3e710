// Builder methods return the updated node; dropping it is always a mistake.
#![allow(clippy::must_use_candidate)]

//! In-memory resource nodes.

use super::value::{Value, ValueMap};
use super::Resource;

/// Resource type reported when none was set.
pub const DEFAULT_RESOURCE_TYPE: &str = "nt:unstructured";

/// An owned, in-memory [`Resource`].
///
/// Child paths are derived from the parent's path, so a child added to
/// `/parent` under the name `child1` has the path `/parent/child1`.
///
/// # Example
///
/// ```rust
/// use resource_matchers::resource::{MemoryResource, Resource};
///
/// let parent = MemoryResource::new("/parent")
///     .with_resource_type("app/folder")
///     .with_property("jcr:title", "Parent")
///     .with_children(["child1", "child2"]);
///
/// let names: Vec<_> = parent.children().map(|c| c.name().to_string()).collect();
/// assert_eq!(names, vec!["child1", "child2"]);
/// assert_eq!(parent.children().nth(1).unwrap().path(), "/parent/child2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryResource {
    path: String,
    resource_type: String,
    super_types: Vec<String>,
    properties: ValueMap,
    children: Vec<MemoryResource>,
}

impl MemoryResource {
    /// Create a resource at `path` with no properties or children.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            resource_type: DEFAULT_RESOURCE_TYPE.to_string(),
            super_types: Vec::new(),
            properties: ValueMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the resource type.
    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = resource_type.into();
        self
    }

    /// Set the super-type chain, nearest ancestor first.
    pub fn with_super_types<I, S>(mut self, super_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.super_types = super_types.into_iter().map(Into::into).collect();
        self
    }

    /// Set a single property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Merge a map of properties.
    pub fn with_properties(mut self, properties: impl Into<ValueMap>) -> Self {
        for (key, value) in properties.into().iter() {
            self.properties.insert(key, value.clone());
        }
        self
    }

    /// Append a child. The child is re-rooted under this resource, keeping
    /// its name.
    pub fn with_child(mut self, child: MemoryResource) -> Self {
        let child = child.rebase(&self.path);
        self.children.push(child);
        self
    }

    /// Append empty children with the given names.
    pub fn with_children<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().fold(self, |parent, name| {
            let child = MemoryResource::new(name.as_ref());
            parent.with_child(child)
        })
    }

    fn rebase(mut self, parent_path: &str) -> Self {
        let name = self.name().to_string();
        self.path = join_path(parent_path, &name);
        let path = self.path.clone();
        self.children = self
            .children
            .into_iter()
            .map(|child| child.rebase(&path))
            .collect();
        self
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.ends_with('/') {
        format!("{parent}{name}")
    } else {
        format!("{parent}/{name}")
    }
}

impl Resource for MemoryResource {
    fn path(&self) -> &str {
        &self.path
    }

    fn resource_type(&self) -> &str {
        &self.resource_type
    }

    fn resource_super_type(&self) -> Option<&str> {
        self.super_types.first().map(String::as_str)
    }

    fn is_resource_type(&self, resource_type: &str) -> bool {
        self.resource_type == resource_type || self.super_types.iter().any(|t| t == resource_type)
    }

    fn properties(&self) -> &ValueMap {
        &self.properties
    }

    fn children(&self) -> Box<dyn Iterator<Item = &dyn Resource> + '_> {
        Box::new(self.children.iter().map(|child| child as &dyn Resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let r = MemoryResource::new("/resource");
        assert_eq!(r.path(), "/resource");
        assert_eq!(r.name(), "resource");
        assert_eq!(r.resource_type(), DEFAULT_RESOURCE_TYPE);
        assert_eq!(r.resource_super_type(), None);
        assert!(r.properties().is_empty());
        assert_eq!(r.children().count(), 0);
    }

    #[test]
    fn test_super_type_chain() {
        let r = MemoryResource::new("/resource")
            .with_resource_type("some/type")
            .with_super_types(["some/base/type", "some/root/type"]);
        assert_eq!(r.resource_super_type(), Some("some/base/type"));
        assert!(r.is_resource_type("some/type"));
        assert!(r.is_resource_type("some/base/type"));
        assert!(r.is_resource_type("some/root/type"));
        assert!(!r.is_resource_type("some/other/type"));
    }

    #[test]
    fn test_nested_children_are_rebased() {
        let child = MemoryResource::new("child1").with_child(MemoryResource::new("grandchild"));
        let root = MemoryResource::new("/").with_child(child);

        let child = root.children().next().unwrap();
        assert_eq!(child.path(), "/child1");
        let grandchild = child.children().next().unwrap();
        assert_eq!(grandchild.path(), "/child1/grandchild");
        assert_eq!(grandchild.name(), "grandchild");
    }

    #[test]
    fn test_with_properties_merges() {
        let r = MemoryResource::new("/r")
            .with_property("a", 1)
            .with_properties([("a", 2), ("b", 3)]);
        assert_eq!(r.properties().get("a"), Some(&Value::Long(2)));
        assert_eq!(r.properties().get("b"), Some(&Value::Long(3)));
    }
}
