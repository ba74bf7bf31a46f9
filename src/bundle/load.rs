//! Composed bundle loading
//!
//! Wires locator, reader, and materializer together per call. Nothing here
//! holds state between calls; the module's resource table is the only input.

use crate::resources::{AssetLocator, ResourceModule, read_bytes, resource_names};

use super::container::Bundle;

/// Load and materialize the named bundle resource from a module.
///
/// Returns `None` when the resource is missing, unreadable, or not a valid
/// bundle encoding.
#[must_use]
pub fn load_bundle(module: &dyn ResourceModule, name: &str) -> Option<Bundle> {
    read_bytes(module, name).and_then(|bytes| Bundle::from_bytes(&bytes))
}

/// Materialize every bundle embedded in a module.
///
/// Probes every resource in table order and keeps the ones that decode;
/// non-bundle resources are skipped silently.
#[must_use]
pub fn embedded_bundles(module: &dyn ResourceModule) -> Vec<Bundle> {
    let mut bundles = Vec::new();
    for name in resource_names(module) {
        match load_bundle(module, &name) {
            Some(bundle) => bundles.push(bundle),
            None => log::debug!(
                "resource `{}` in module `{}` is not a bundle, skipping",
                name,
                module.name()
            ),
        }
    }
    bundles
}

impl AssetLocator<'_> {
    /// Load and materialize the bundle this locator points at.
    ///
    /// Fail-soft like [`load_bundle`]; a locator tagged as a raw blob simply
    /// yields `None` when its bytes are not a bundle encoding.
    #[must_use]
    pub fn load_bundle(&self) -> Option<Bundle> {
        load_bundle(self.module(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::asset::{Asset, TextAsset};
    use crate::resources::{LocatorKind, MemoryModule};

    fn packed(name: &str, text: &str) -> Vec<u8> {
        let mut bundle = Bundle::new(name);
        bundle.add_asset(Asset::new("greeting", TextAsset::new(text)));
        bundle.to_bytes().unwrap()
    }

    #[test]
    fn test_load_bundle_by_name() {
        let module = MemoryModule::new("game").with_resource("ui.bundle", packed("ui", "hi"));

        let bundle = load_bundle(&module, "ui.bundle").unwrap();
        assert_eq!(bundle.name(), "ui");
        assert_eq!(bundle.get_of::<TextAsset>("greeting").unwrap().text, "hi");
    }

    #[test]
    fn test_load_bundle_missing_or_corrupt_is_absent() {
        let module = MemoryModule::new("game")
            .with_resource("broken.bundle", b"definitely not a bundle".to_vec());

        assert!(load_bundle(&module, "absent.bundle").is_none());
        assert!(load_bundle(&module, "broken.bundle").is_none());
    }

    #[test]
    fn test_embedded_bundles_skips_non_bundles() {
        let module = MemoryModule::new("game")
            .with_resource("ui.bundle", packed("ui", "hi"))
            .with_resource("readme.txt", b"plain text, not a bundle".to_vec());

        let bundles = embedded_bundles(&module);
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].name(), "ui");
    }

    #[test]
    fn test_embedded_bundles_keeps_table_order() {
        let module = MemoryModule::new("game")
            .with_resource("b.bundle", packed("b", "two"))
            .with_resource("a.bundle", packed("a", "one"));

        let bundles = embedded_bundles(&module);
        let names: Vec<&str> = bundles.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_locator_load_bundle() {
        let module = MemoryModule::new("game").with_resource("ui.bundle", packed("ui", "hi"));

        let locator = AssetLocator::with_extension(LocatorKind::Bundle, "ui", ".bundle", &module);
        let bundle = locator.load_bundle().unwrap();
        assert_eq!(bundle.name(), "ui");

        let blob = AssetLocator::new(LocatorKind::Blob, "ui.bundle", &module);
        // The kind tag records intent only; the bytes still materialize
        assert!(blob.load_bundle().is_some());
    }
}
