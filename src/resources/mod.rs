//! Embedded resource access
//!
//! Provides the module-side half of asset loading:
//! - The `ResourceModule` table abstraction with static and in-memory
//!   implementations
//! - Locators naming a single resource inside a module
//! - Byte and stream extraction with guaranteed stream release

mod locator;
mod module;
mod reader;

pub use locator::{AssetLocator, LocatorKind};
pub use module::{EmbeddedModule, MemoryModule, ResourceModule};
pub use reader::{ResourceStream, open_stream, read_bytes, resource_names};
