//! Resource module abstraction
//!
//! A module is a read-only table of named binary resources embedded in a
//! code unit at build time. Entries yield a fresh byte stream on demand.

use std::io::{Cursor, Read};

/// A read-only table of embedded resources, keyed by name.
///
/// Implementations must be safe for concurrent reads; every method takes
/// `&self` and each `open_resource` call yields an independent stream.
pub trait ResourceModule {
    /// Short identifying name of this module, used in log output.
    fn name(&self) -> &str;

    /// Open a fresh byte stream over the named resource.
    ///
    /// Returns `None` when the module embeds no resource with that name.
    fn open_resource(&self, name: &str) -> Option<Box<dyn Read + '_>>;

    /// Every resource name in this module, in table order.
    fn resource_names(&self) -> Vec<String>;

    /// Check whether the module embeds a resource with the given name.
    fn contains_resource(&self, name: &str) -> bool {
        self.resource_names().iter().any(|n| n == name)
    }
}

/// A module backed by a static table of `include_bytes!` entries.
///
/// Typically declared once per crate:
///
/// ```ignore
/// static MODULE: EmbeddedModule = EmbeddedModule::new(
///     "game",
///     &[("ui.bundle", include_bytes!("../assets/ui.bundle"))],
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedModule {
    name: &'static str,
    entries: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedModule {
    /// Create a module over a static resource table
    #[must_use]
    pub const fn new(
        name: &'static str,
        entries: &'static [(&'static str, &'static [u8])],
    ) -> Self {
        Self { name, entries }
    }

    /// Number of embedded resources
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the module embeds no resources
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceModule for EmbeddedModule {
    fn name(&self) -> &str {
        self.name
    }

    fn open_resource(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, bytes)| Box::new(Cursor::new(*bytes)) as Box<dyn Read>)
    }

    fn resource_names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| (*n).to_string()).collect()
    }
}

/// A module holding a runtime-owned resource table.
///
/// Useful for tests and for tooling that receives resource packs at runtime
/// instead of compiling them in.
#[derive(Debug, Clone, Default)]
pub struct MemoryModule {
    name: String,
    entries: Vec<(String, Vec<u8>)>,
}

impl MemoryModule {
    /// Create an empty module with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add a resource, builder style
    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Add a resource to the table
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.push((name.into(), bytes.into()));
    }
}

impl ResourceModule for MemoryModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn open_resource(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, bytes)| Box::new(Cursor::new(bytes.as_slice())) as Box<dyn Read + '_>)
    }

    fn resource_names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[(&str, &[u8])] = &[("a.txt", b"alpha"), ("b.bin", b"\x00\x01\x02")];

    #[test]
    fn test_embedded_module_lookup() {
        let module = EmbeddedModule::new("test", TABLE);

        let mut stream = module.open_resource("a.txt").unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"alpha");

        assert!(module.open_resource("missing").is_none());
    }

    #[test]
    fn test_embedded_module_names_in_table_order() {
        let module = EmbeddedModule::new("test", TABLE);
        assert_eq!(module.resource_names(), vec!["a.txt", "b.bin"]);
        assert!(module.contains_resource("b.bin"));
        assert!(!module.contains_resource("c.txt"));
        assert_eq!(module.len(), 2);
        assert!(!module.is_empty());
    }

    #[test]
    fn test_memory_module() {
        let module = MemoryModule::new("mem")
            .with_resource("one", b"1".to_vec())
            .with_resource("two", b"22".to_vec());

        assert_eq!(module.name(), "mem");
        assert_eq!(module.resource_names(), vec!["one", "two"]);

        let mut buf = Vec::new();
        module
            .open_resource("two")
            .unwrap()
            .read_to_end(&mut buf)
            .unwrap();
        assert_eq!(buf, b"22");
        assert!(module.open_resource("three").is_none());
    }

    #[test]
    fn test_independent_streams() {
        let module = EmbeddedModule::new("test", TABLE);

        // Two opens of the same resource read from independent positions
        let mut first = module.open_resource("a.txt").unwrap();
        let mut second = module.open_resource("a.txt").unwrap();

        let mut one = [0_u8; 2];
        first.read_exact(&mut one).unwrap();

        let mut buf = Vec::new();
        second.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"alpha");
    }
}
