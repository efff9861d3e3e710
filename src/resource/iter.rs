//! Single-pass resource sequences.

use std::fmt;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use super::Resource;

/// A lazily produced, single-pass sequence of resources.
///
/// The wrapped iterator is drained exactly once, on first access, into an
/// ordered list. Every later access reads that list, so a matcher can
/// evaluate and then describe a mismatch without re-iterating.
///
/// # Example
///
/// ```rust
/// use resource_matchers::assert_that;
/// use resource_matchers::matchers::paths;
/// use resource_matchers::resource::{MemoryResource, ResourceIter};
///
/// let list = vec![MemoryResource::new("/content/1"), MemoryResource::new("/content/2")];
/// assert_that!(ResourceIter::new(list.iter()), paths(["/content/1", "/content/2"]));
/// ```
pub struct ResourceIter<I: Iterator> {
    // Taken out under the lock, then drained without holding it.
    pending: Mutex<Option<I>>,
    drained: OnceCell<Vec<I::Item>>,
}

impl<I> ResourceIter<I>
where
    I: Iterator,
    I::Item: Resource,
{
    /// Wrap an iterator. Nothing is consumed until first access.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            pending: Mutex::new(Some(iter.into_iter())),
            drained: OnceCell::new(),
        }
    }

    /// Whether the underlying iterator has already been consumed.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.pending.lock().is_none()
    }

    /// Run `f` over the drained resources, draining first if needed.
    ///
    /// `f` may access this sequence again.
    ///
    /// # Panics
    ///
    /// Panics if an earlier drain panicked part way through: the iterator is
    /// gone and the resources it produced cannot be recovered.
    pub fn with_resources<T>(&self, f: impl FnOnce(&[I::Item]) -> T) -> T {
        f(self.resources())
    }

    /// Paths of the drained resources, in iteration order.
    ///
    /// # Panics
    ///
    /// Panics if an earlier drain panicked, see [`with_resources`](Self::with_resources).
    pub fn paths(&self) -> Vec<String> {
        self.with_resources(|items| items.iter().map(|r| r.path().to_string()).collect())
    }

    fn resources(&self) -> &[I::Item] {
        if let Some(items) = self.drained.get() {
            return items;
        }
        let pending = self.pending.lock().take();
        if let Some(iter) = pending {
            let items: Vec<I::Item> = iter.collect();
            tracing::trace!(count = items.len(), "drained resource iterator");
            return self.drained.get_or_init(|| items);
        }
        match self.drained.get() {
            Some(items) => items,
            None => panic!("ResourceIter poisoned: the iterator panicked while being drained"),
        }
    }
}

impl<I: Iterator> fmt::Debug for ResourceIter<I>
where
    I::Item: Resource,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(items) = self.drained.get() {
            return f
                .debug_tuple("ResourceIter")
                .field(&items.iter().map(Resource::path).collect::<Vec<_>>())
                .finish();
        }
        if self.pending.lock().is_some() {
            f.write_str("ResourceIter(<pending>)")
        } else {
            f.write_str("ResourceIter(<poisoned>)")
        }
    }
}
