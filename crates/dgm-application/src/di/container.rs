//! Lazy service container
//!
//! A [`Container`] is an arena of memoization slots, one per leaf of a merged
//! module, indexed by dotted path. A slot is evaluated the first time
//! anything asks for it and keeps the instance for the container's lifetime.
//!
//! ## Slot states
//!
//! ```text
//! Vacant ──first get──► Constructing(thread) ──factory ok──► Ready(instance)
//!   ▲                          │
//!   └──────factory error───────┘
//! ```
//!
//! A request that finds its slot `Constructing` on the same thread is a
//! synchronous cycle and fails with [`Error::CircularDependency`]. Requests
//! from other threads wait for the owner to finish, so a slot's factory runs
//! at most once even under concurrent first access.
//!
//! Waiting threads are recorded in a wait-for graph. A thread about to wait
//! on a slot whose owner is (transitively) waiting on a slot this thread
//! owns would never wake, so it fails with the same circular error instead.

use super::deferred::Deferred;
use super::module::{Factory, Module, ServiceInstance, merge_modules};
use dgm_domain::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, Weak};
use std::thread::{self, ThreadId};
use tracing::debug;

thread_local! {
    /// Slots currently being constructed on this thread: (container id, path)
    static RESOLUTION_STACK: RefCell<Vec<(usize, String)>> = const { RefCell::new(Vec::new()) };
}

enum SlotState {
    Vacant,
    Constructing(ThreadId),
    Ready(ServiceInstance),
}

struct Slot {
    path: String,
    factory: Factory,
    state: Mutex<SlotState>,
    ready: Condvar,
}

impl Slot {
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Slot owners and the slot each blocked thread waits on
#[derive(Default)]
struct WaitGraph {
    owners: HashMap<usize, ThreadId>,
    waiting: HashMap<ThreadId, usize>,
}

impl WaitGraph {
    /// Awaited slots leading back to `thread` if it waited on `slot`, when
    /// that wait could never end
    fn wait_on(&mut self, thread: ThreadId, slot: usize, slots: &[Slot]) -> Option<Vec<String>> {
        let mut chain = vec![slots[slot].path.clone()];
        let mut awaited = slot;
        for _ in 0..slots.len() {
            let owner = *self.owners.get(&awaited)?;
            if owner == thread {
                chain.push(slots[slot].path.clone());
                return Some(chain);
            }
            awaited = *self.waiting.get(&owner)?;
            chain.push(slots[awaited].path.clone());
        }
        None
    }
}

struct ContainerInner {
    name: String,
    index: HashMap<String, usize>,
    slots: Vec<Slot>,
    graph: Mutex<WaitGraph>,
}

impl ContainerInner {
    fn graph(&self) -> MutexGuard<'_, WaitGraph> {
        self.graph.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Live service container built from a merged module
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

/// Non-owning reference to a container
#[derive(Clone)]
pub struct WeakContainer {
    inner: Weak<ContainerInner>,
}

/// Merge `modules` and build a container from the result
///
/// # Example
///
/// ```
/// use dgm_application::di::{inject, Module};
///
/// let defaults = Module::new().value("greeting", "hello".to_string());
/// let overrides = Module::new().value("greeting", "bonjour".to_string());
/// let container = inject("example", [defaults, overrides]).unwrap();
/// assert_eq!(container.get::<String>("greeting").unwrap(), "bonjour");
/// ```
pub fn inject<I>(name: &str, modules: I) -> Result<Container>
where
    I: IntoIterator<Item = Module>,
{
    let merged = merge_modules(modules)?;
    Ok(Container::from_merged(name, &merged))
}

impl Container {
    /// Build a container from a single module
    pub fn build(name: &str, module: Module) -> Result<Self> {
        inject(name, [module])
    }

    fn from_merged(name: &str, merged: &Module) -> Self {
        let leaves = merged.leaves();
        let mut index = HashMap::with_capacity(leaves.len());
        let mut slots = Vec::with_capacity(leaves.len());
        for (position, (path, factory)) in leaves.into_iter().enumerate() {
            index.insert(path.clone(), position);
            slots.push(Slot {
                path,
                factory,
                state: Mutex::new(SlotState::Vacant),
                ready: Condvar::new(),
            });
        }
        debug!(container = name, services = slots.len(), "Built service container");
        Self {
            inner: Arc::new(ContainerInner {
                name: name.to_string(),
                index,
                slots,
                graph: Mutex::new(WaitGraph::default()),
            }),
        }
    }

    /// Diagnostic name of the container
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// True when a service is defined at `path`
    pub fn contains(&self, path: &str) -> bool {
        self.inner.index.contains_key(path)
    }

    /// Paths of all defined services, in name order
    pub fn service_paths(&self) -> impl Iterator<Item = &str> {
        self.inner.slots.iter().map(|slot| slot.path.as_str())
    }

    /// True when the service at `path` has already been constructed
    pub fn is_resolved(&self, path: &str) -> bool {
        self.inner
            .index
            .get(path)
            .is_some_and(|&i| matches!(*self.inner.slots[i].lock(), SlotState::Ready(_)))
    }

    /// Resolve the type-erased instance at `path`
    pub fn resolve(&self, path: &str) -> Result<ServiceInstance> {
        let index = self.slot_index(path)?;
        self.resolve_slot(index)
    }

    /// Resolve the service at `path` as `T`
    ///
    /// `T` must be the exact type the factory returns, usually an
    /// `Arc<dyn Trait>`; the stored instance is cloned out.
    pub fn get<T>(&self, path: &str) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let index = self.slot_index(path)?;
        self.get_slot(index)
    }

    /// Handle that resolves the service at `path` on first use
    ///
    /// Only the path is checked here; nothing is constructed.
    pub fn deferred<T>(&self, path: &str) -> Result<Deferred<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let index = self.slot_index(path)?;
        Ok(Deferred::new(self.downgrade(), index, &self.inner.slots[index].path))
    }

    /// Create a non-owning reference
    pub fn downgrade(&self) -> WeakContainer {
        WeakContainer {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// True when both handles point to the same container
    pub fn ptr_eq(&self, other: &Container) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn get_slot<T>(&self, index: usize) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let instance = self.resolve_slot(index)?;
        let slot = &self.inner.slots[index];
        instance
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Error::ServiceType {
                path: slot.path.clone(),
                expected: std::any::type_name::<T>(),
                actual: slot.factory.type_name(),
            })
    }

    fn slot_index(&self, path: &str) -> Result<usize> {
        self.inner
            .index
            .get(path)
            .copied()
            .ok_or_else(|| Error::service_not_found(path))
    }

    fn id(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }

    fn resolve_slot(&self, index: usize) -> Result<ServiceInstance> {
        let slot = &self.inner.slots[index];
        let current = thread::current().id();

        let mut state = slot.lock();
        loop {
            let owner = match &*state {
                SlotState::Ready(instance) => return Ok(Arc::clone(instance)),
                SlotState::Constructing(owner) => *owner,
                SlotState::Vacant => break,
            };
            if owner == current {
                drop(state);
                let chain = self.cycle_chain(&slot.path);
                return Err(Error::circular(slot.path.clone(), chain));
            }
            let deadlock = {
                let mut graph = self.inner.graph();
                let cycle = graph.wait_on(current, index, &self.inner.slots);
                if cycle.is_none() {
                    graph.waiting.insert(current, index);
                }
                cycle
            };
            if let Some(chain) = deadlock {
                drop(state);
                return Err(Error::circular(slot.path.clone(), chain));
            }
            state = slot.ready.wait(state).unwrap_or_else(PoisonError::into_inner);
            self.inner.graph().waiting.remove(&current);
        }
        *state = SlotState::Constructing(current);
        self.inner.graph().owners.insert(index, current);
        drop(state);

        let guard = ConstructionGuard::new(&self.inner, index);
        let _frame = ResolutionFrame::enter(self.id(), &slot.path);
        debug!(container = %self.inner.name, service = %slot.path, "Constructing service");

        match slot.factory.invoke(self) {
            Ok(instance) => {
                guard.complete(Arc::clone(&instance));
                Ok(instance)
            }
            Err(e) => Err(Error::construction(slot.path.clone(), e)),
        }
    }

    fn cycle_chain(&self, path: &str) -> Vec<String> {
        let id = self.id();
        RESOLUTION_STACK.with(|stack| {
            let stack = stack.borrow();
            let frames: Vec<&String> = stack
                .iter()
                .filter(|(owner, _)| *owner == id)
                .map(|(_, p)| p)
                .collect();
            let start = frames.iter().position(|p| p.as_str() == path).unwrap_or(0);
            frames[start..]
                .iter()
                .map(|p| (*p).clone())
                .chain(std::iter::once(path.to_string()))
                .collect()
        })
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("name", &self.inner.name)
            .field("services", &self.inner.slots.len())
            .finish()
    }
}

impl WeakContainer {
    /// Upgrade to a container if it is still alive
    pub fn upgrade(&self) -> Option<Container> {
        self.inner.upgrade().map(|inner| Container { inner })
    }
}

impl fmt::Debug for WeakContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(container) => write!(f, "WeakContainer({})", container.name()),
            None => f.write_str("WeakContainer(<dropped>)"),
        }
    }
}

/// Resets a slot to `Vacant` unless construction completed
///
/// Ownership leaves the wait-for graph before the slot changes state, so a
/// thread that takes over the slot is never unregistered by the old owner.
struct ConstructionGuard<'a> {
    inner: &'a ContainerInner,
    index: usize,
    armed: bool,
}

impl<'a> ConstructionGuard<'a> {
    fn new(inner: &'a ContainerInner, index: usize) -> Self {
        Self {
            inner,
            index,
            armed: true,
        }
    }

    fn finish(&self, state: SlotState) {
        self.inner.graph().owners.remove(&self.index);
        let slot = &self.inner.slots[self.index];
        *slot.lock() = state;
        slot.ready.notify_all();
    }

    fn complete(mut self, instance: ServiceInstance) {
        self.armed = false;
        self.finish(SlotState::Ready(instance));
    }
}

impl Drop for ConstructionGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.finish(SlotState::Vacant);
        }
    }
}

/// Entry on the thread's resolution stack, popped on drop
struct ResolutionFrame;

impl ResolutionFrame {
    fn enter(container: usize, path: &str) -> Self {
        RESOLUTION_STACK.with(|stack| stack.borrow_mut().push((container, path.to_string())));
        Self
    }
}

impl Drop for ResolutionFrame {
    fn drop(&mut self) {
        RESOLUTION_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}
