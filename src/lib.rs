//! Embedded asset and bundle loading for game projects
//!
//! This crate provides:
//! - Embedded resource tables built from `include_bytes!` data
//! - Byte and stream extraction with a fail-soft contract
//! - Asset bundle materialization with typed enumeration and lookup
//!
//! Missing resources, read failures, and malformed bundle bytes all surface
//! as `None`; nothing on the loading path panics or escapes as an error past
//! the public surface.

pub mod bundle;
pub mod resources;

// Re-exports for convenience
pub use glam;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::bundle::{
        Asset, AssetData, AssetKind, AssetPayload, BlobAsset, Bundle, BundleError, MeshAsset,
        TextAsset, TextureAsset, embedded_bundles, load_bundle,
    };
    pub use crate::resources::{
        AssetLocator, EmbeddedModule, LocatorKind, MemoryModule, ResourceModule, ResourceStream,
        open_stream, read_bytes, resource_names,
    };
}
