//! Asset bundle materialization
//!
//! Turns byte buffers into structured bundles of named, typed assets:
//! - The asset vocabulary carried inside bundles
//! - The `Bundle` container with enumeration and lookup
//! - Composed loaders wiring locator, reader, and materializer per call

mod asset;
mod container;
mod load;

pub use asset::{
    Asset, AssetData, AssetKind, AssetPayload, BlobAsset, MeshAsset, TextAsset, TextureAsset,
};
pub use container::{Bundle, BundleError, FORMAT_VERSION};
pub use load::{embedded_bundles, load_bundle};
