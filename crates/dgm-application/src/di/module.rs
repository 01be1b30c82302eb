//! Service definitions and the module merger
//!
//! A [`Module`] is a tree of named entries, each either a [`Factory`] or a
//! nested module. Entries are addressed by dotted paths such as
//! `parser.TokenBuilder`; registering a dotted path creates the intermediate
//! groups.
//!
//! Building a module never fails. Invalid paths and shape conflicts are
//! recorded on the module and reported as
//! [`Error::MalformedDefinition`] when the module is merged.

use super::container::Container;
use dgm_domain::error::{Error, Result};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Separator between the segments of a service path
pub const PATH_SEPARATOR: char = '.';

/// Type-erased service instance stored in a container slot
pub type ServiceInstance = Arc<dyn Any + Send + Sync>;

type BuildFn = dyn Fn(&Container) -> Result<ServiceInstance> + Send + Sync;

/// A service factory bound to the type it produces
#[derive(Clone)]
pub struct Factory {
    type_name: &'static str,
    build: Arc<BuildFn>,
}

impl Factory {
    /// Wrap a typed factory
    pub fn new<T, F>(factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            type_name: std::any::type_name::<T>(),
            build: Arc::new(move |container| {
                factory(container).map(|value| Arc::new(value) as ServiceInstance)
            }),
        }
    }

    /// Name of the produced type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True when both handles wrap the same factory function
    pub fn ptr_eq(&self, other: &Factory) -> bool {
        Arc::ptr_eq(&self.build, &other.build)
    }

    pub(crate) fn invoke(&self, container: &Container) -> Result<ServiceInstance> {
        (self.build)(container)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factory<{}>", self.type_name)
    }
}

/// One entry of a module
#[derive(Debug, Clone)]
pub enum ModuleEntry {
    /// Leaf service
    Factory(Factory),
    /// Nested group of services
    Group(Module),
}

impl ModuleEntry {
    fn kind(&self) -> &'static str {
        match self {
            Self::Factory(_) => "a service factory",
            Self::Group(_) => "a service group",
        }
    }
}

impl PartialEq for ModuleEntry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Factory(a), Self::Factory(b)) => a.ptr_eq(b),
            (Self::Group(a), Self::Group(b)) => a == b,
            _ => false,
        }
    }
}

/// A (partial) service definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    entries: BTreeMap<String, ModuleEntry>,
    defects: Vec<(String, String)>,
}

impl Module {
    /// Create an empty module
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service factory at `path`
    ///
    /// A later registration of the same path in the same module replaces the
    /// earlier one.
    pub fn service<T, F>(self, path: impl AsRef<str>, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        self.factory(path, Factory::new(factory))
    }

    /// Register a constant service; every container gets a clone of `value`
    pub fn value<T>(self, path: impl AsRef<str>, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.service(path, move |_| Ok(value.clone()))
    }

    /// Register an existing factory at `path`
    pub fn factory(self, path: impl AsRef<str>, factory: Factory) -> Self {
        self.insert(path.as_ref(), ModuleEntry::Factory(factory))
    }

    /// Nest `module` under `path`, merging with a group already there
    pub fn group(self, path: impl AsRef<str>, module: Module) -> Self {
        self.insert(path.as_ref(), ModuleEntry::Group(module))
    }

    /// Entry at a dotted path
    pub fn entry(&self, path: &str) -> Option<&ModuleEntry> {
        let mut segments = path.split(PATH_SEPARATOR);
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            match current {
                ModuleEntry::Group(group) => current = group.entries.get(segment)?,
                ModuleEntry::Factory(_) => return None,
            }
        }
        Some(current)
    }

    /// Factory at a dotted path
    pub fn factory_at(&self, path: &str) -> Option<&Factory> {
        match self.entry(path)? {
            ModuleEntry::Factory(factory) => Some(factory),
            ModuleEntry::Group(_) => None,
        }
    }

    /// Top-level entries in name order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ModuleEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Dotted paths of every leaf service, in name order
    pub fn service_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", &mut paths);
        paths
    }

    /// True when the module names no services and carries no defects
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.defects.is_empty()
    }

    /// Merge `other` on top of this module (`other` wins conflicts)
    pub fn merge(mut self, other: Module) -> Result<Module> {
        self.check_defects()?;
        other.check_defects()?;
        merge_entries(&mut self.entries, other.entries, "")?;
        Ok(self)
    }

    pub(crate) fn leaves(&self) -> Vec<(String, Factory)> {
        let mut leaves = Vec::new();
        self.collect_leaves("", &mut leaves);
        leaves
    }

    fn insert(mut self, path: &str, entry: ModuleEntry) -> Self {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        if segments.iter().any(|s| s.is_empty()) {
            self.defects
                .push((path.to_string(), "service path has an empty segment".to_string()));
            return self;
        }

        let mut entry = entry;
        if let ModuleEntry::Group(group) = &mut entry {
            for (nested, message) in group.defects.drain(..) {
                self.defects.push((join_path(path, &nested), message));
            }
        }
        for segment in segments.iter().skip(1).rev() {
            let mut wrapper = Module::new();
            wrapper.entries.insert((*segment).to_string(), entry);
            entry = ModuleEntry::Group(wrapper);
        }

        let mut incoming = BTreeMap::new();
        incoming.insert(segments[0].to_string(), entry);
        if let Err(e) = merge_entries(&mut self.entries, incoming, "") {
            let message = match e {
                Error::MalformedDefinition { message, .. } => message,
                other => other.to_string(),
            };
            self.defects.push((path.to_string(), message));
        }
        self
    }

    fn check_defects(&self) -> Result<()> {
        match self.defects.first() {
            Some((path, message)) => Err(Error::malformed(path.clone(), message.clone())),
            None => Ok(()),
        }
    }

    fn collect_paths(&self, prefix: &str, out: &mut Vec<String>) {
        for (name, entry) in &self.entries {
            let path = join_path(prefix, name);
            match entry {
                ModuleEntry::Factory(_) => out.push(path),
                ModuleEntry::Group(group) => group.collect_paths(&path, out),
            }
        }
    }

    fn collect_leaves(&self, prefix: &str, out: &mut Vec<(String, Factory)>) {
        for (name, entry) in &self.entries {
            let path = join_path(prefix, name);
            match entry {
                ModuleEntry::Factory(factory) => out.push((path, factory.clone())),
                ModuleEntry::Group(group) => group.collect_leaves(&path, out),
            }
        }
    }
}

/// Merge an ordered list of modules; later modules win
///
/// Leaf-versus-leaf conflicts take the later factory, group-versus-group
/// conflicts merge recursively, and a leaf meeting a group is a
/// [`Error::MalformedDefinition`]. No factory is invoked.
pub fn merge_modules<I>(modules: I) -> Result<Module>
where
    I: IntoIterator<Item = Module>,
{
    modules
        .into_iter()
        .try_fold(Module::new(), |merged, module| merged.merge(module))
}

fn merge_entries(
    target: &mut BTreeMap<String, ModuleEntry>,
    source: BTreeMap<String, ModuleEntry>,
    prefix: &str,
) -> Result<()> {
    for (name, incoming) in source {
        let path = join_path(prefix, &name);
        let merged = match (target.remove(&name), incoming) {
            (None, incoming) => incoming,
            (Some(ModuleEntry::Factory(_)), ModuleEntry::Factory(later)) => {
                ModuleEntry::Factory(later)
            }
            (Some(ModuleEntry::Group(mut earlier)), ModuleEntry::Group(later)) => {
                merge_entries(&mut earlier.entries, later.entries, &path)?;
                ModuleEntry::Group(earlier)
            }
            (Some(earlier), later) => {
                let message = format!("cannot merge {} with {}", earlier.kind(), later.kind());
                target.insert(name, earlier);
                return Err(Error::malformed(path, message));
            }
        };
        target.insert(name, merged);
    }
    Ok(())
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{name}")
    }
}
