//! Deferred service handles
//!
//! A [`Deferred`] is what a factory stores instead of a resolved sibling when
//! the two services reference each other. It holds a weak reference to the
//! container and the slot index, and resolves (constructing the service if
//! needed) only when [`Deferred::get`] is called.

use super::container::WeakContainer;
use dgm_domain::error::{Error, Result};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Lazily resolved reference to a service of type `T`
pub struct Deferred<T> {
    container: WeakContainer,
    index: usize,
    path: Arc<str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Deferred<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(container: WeakContainer, index: usize, path: &str) -> Self {
        Self {
            container,
            index,
            path: Arc::from(path),
            _marker: PhantomData,
        }
    }

    /// Resolve the service
    ///
    /// Fails with [`Error::ContainerDropped`] once the owning container is
    /// gone.
    pub fn get(&self) -> Result<T> {
        let container = self.container.upgrade().ok_or_else(|| Error::ContainerDropped {
            path: self.path.to_string(),
        })?;
        container.get_slot(self.index)
    }

    /// Path the handle is bound to
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            index: self.index,
            path: Arc::clone(&self.path),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("path", &self.path)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
