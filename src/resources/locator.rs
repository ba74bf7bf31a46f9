//! Resource locators
//!
//! A locator names one resource inside one module and records what the
//! resource is (a packed bundle or a raw blob). The name is resolved once at
//! construction and never re-derived.

use std::fmt;

use super::module::ResourceModule;
use super::reader::{self, ResourceStream};

/// What a locator points at, chosen by the caller.
///
/// Both kinds expose the same capability set; the tag records whether the
/// resource is expected to deserialize as a bundle or stay raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocatorKind {
    /// A packed asset bundle, meant for materialization
    Bundle,
    /// A raw binary blob, meant for byte extraction only
    Blob,
}

/// Names a single resource inside a module.
///
/// Immutable after construction; `name` and `module` are exposed read-only
/// for the lifetime of the locator.
#[derive(Clone)]
pub struct AssetLocator<'m> {
    name: String,
    kind: LocatorKind,
    module: &'m dyn ResourceModule,
}

impl<'m> AssetLocator<'m> {
    /// Create a locator from a name that already includes its extension
    #[must_use]
    pub fn new(kind: LocatorKind, name: impl Into<String>, module: &'m dyn ResourceModule) -> Self {
        Self {
            name: name.into(),
            kind,
            module,
        }
    }

    /// Create a locator from a base name and an extension.
    ///
    /// The resolved name is the exact concatenation of the two parts; the
    /// extension carries its own separator (`".bundle"`, not `"bundle"`).
    #[must_use]
    pub fn with_extension(
        kind: LocatorKind,
        base: &str,
        ext: &str,
        module: &'m dyn ResourceModule,
    ) -> Self {
        Self {
            name: format!("{base}{ext}"),
            kind,
            module,
        }
    }

    /// The resolved resource name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What the locator points at
    #[must_use]
    pub const fn kind(&self) -> LocatorKind {
        self.kind
    }

    /// The owning module
    #[must_use]
    pub fn module(&self) -> &'m dyn ResourceModule {
        self.module
    }

    /// Check whether the named resource exists in the module
    #[must_use]
    pub fn exists(&self) -> bool {
        self.module.contains_resource(&self.name)
    }

    /// Read the resource fully into an owned buffer
    #[must_use]
    pub fn read_bytes(&self) -> Option<Vec<u8>> {
        reader::read_bytes(self.module, &self.name)
    }

    /// Open a caller-managed stream over the resource
    #[must_use]
    pub fn open_stream(&self) -> Option<ResourceStream<'m>> {
        reader::open_stream(self.module, &self.name)
    }
}

impl fmt::Debug for AssetLocator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetLocator")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("module", &self.module.name())
            .finish()
    }
}
