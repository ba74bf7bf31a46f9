//! Byte and stream extraction from resource modules
//!
//! Everything here degrades to `None` on failure: a missing resource and a
//! resource whose stream fails mid-read are both reported as absence. An
//! existing but empty resource reads as `Some` empty buffer.

use std::io::{self, Read};

use super::module::ResourceModule;

/// A byte stream over a single embedded resource.
pub type ResourceStream<'m> = Box<dyn Read + 'm>;

/// Open a stream over the named resource for caller-managed reading.
///
/// Returns `None` when the module has no resource with that name.
pub fn open_stream<'m>(module: &'m dyn ResourceModule, name: &str) -> Option<ResourceStream<'m>> {
    module.open_resource(name)
}

/// Read the named resource fully into an owned buffer.
///
/// The source stream is dropped whether the copy succeeds or fails; a read
/// failure is logged and reported as `None`.
pub fn read_bytes(module: &dyn ResourceModule, name: &str) -> Option<Vec<u8>> {
    let stream = module.open_resource(name)?;
    match drain(stream) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            log::warn!(
                "failed to read resource `{}` from module `{}`: {e}",
                name,
                module.name()
            );
            None
        }
    }
}

/// Every resource name known to the module, in table order.
pub fn resource_names(module: &dyn ResourceModule) -> Vec<String> {
    module.resource_names()
}

// Takes the stream by value so it is dropped on the error path too.
fn drain(mut stream: ResourceStream<'_>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;
    Ok(buf)
}
