//! The bundle container
//!
//! A bundle is a structured set of named, typed assets, materialized once
//! from a byte buffer and immutable afterward. The wire format is the JSON
//! encoding of the container document; RON is supported as a human-readable
//! manifest format for tooling.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::asset::{Asset, AssetData, AssetKind};

/// Bundle format version accepted by this materializer
pub const FORMAT_VERSION: u32 = 1;

/// A structured container of named, typed assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    /// Bundle name
    name: String,
    /// Format version for compatibility
    version: u32,
    /// All assets, in pack order
    assets: Vec<Asset>,
    /// Name lookup index; first occurrence of a name wins
    #[serde(skip)]
    by_name: FxHashMap<String, usize>,
}

impl Bundle {
    /// Create a new empty bundle at the current format version
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: FORMAT_VERSION,
            assets: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Add an asset to the bundle
    pub fn add_asset(&mut self, asset: Asset) {
        let index = self.assets.len();
        self.by_name.entry(asset.name.clone()).or_insert(index);
        self.assets.push(asset);
    }

    /// Materialize a bundle from a byte buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a bundle document or the
    /// format version is unsupported.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, BundleError> {
        let bundle: Self =
            serde_json::from_slice(bytes).map_err(|e| BundleError::DecodeError(e.to_string()))?;
        bundle.check_version()
    }

    /// Fail-soft materialization: any decode failure is reported as `None`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match Self::try_from_bytes(bytes) {
            Ok(bundle) => Some(bundle),
            Err(e) => {
                log::debug!("bundle materialization failed: {e}");
                None
            }
        }
    }

    /// Encode the bundle into its byte wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_bytes(&self) -> Result<Vec<u8>, BundleError> {
        serde_json::to_vec(self).map_err(|e| BundleError::EncodeError(e.to_string()))
    }

    /// Parse a bundle from a RON manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest does not parse or the format
    /// version is unsupported.
    pub fn from_ron_str(manifest: &str) -> Result<Self, BundleError> {
        let bundle: Self =
            ron::from_str(manifest).map_err(|e| BundleError::DecodeError(e.to_string()))?;
        bundle.check_version()
    }

    /// Render the bundle as a RON manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_ron_string(&self) -> Result<String, BundleError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| BundleError::EncodeError(e.to_string()))
    }

    fn check_version(mut self) -> Result<Self, BundleError> {
        if self.version != FORMAT_VERSION {
            return Err(BundleError::UnsupportedVersion(self.version));
        }
        self.reindex();
        Ok(self)
    }

    // The index is skipped by serde; rebuild it after every decode.
    fn reindex(&mut self) {
        self.by_name.clear();
        for (index, asset) in self.assets.iter().enumerate() {
            self.by_name.entry(asset.name.clone()).or_insert(index);
        }
    }

    /// Bundle name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format version this bundle was packed with
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Every asset in the bundle, in pack order
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Every payload of the given concrete type, in pack order
    pub fn assets_of<'a, T: AssetData + 'a>(&'a self) -> impl Iterator<Item = &'a T> {
        self.assets
            .iter()
            .filter_map(|asset| T::from_payload(&asset.payload))
    }

    /// Look up an asset by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.by_name.get(name).map(|&index| &self.assets[index])
    }

    /// Look up an asset by name, constrained to a kind
    #[must_use]
    pub fn get_with_kind(&self, name: &str, kind: AssetKind) -> Option<&Asset> {
        self.get(name).filter(|asset| asset.kind() == kind)
    }

    /// Look up an asset by name and borrow its payload as a concrete type
    #[must_use]
    pub fn get_of<T: AssetData>(&self, name: &str) -> Option<&T> {
        self.get(name).and_then(|asset| T::from_payload(&asset.payload))
    }

    /// Number of assets in the bundle
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if the bundle holds no assets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Errors that can occur while encoding or materializing bundles
#[derive(Debug, Clone)]
pub enum BundleError {
    /// The bytes are not a valid bundle document
    DecodeError(String),
    /// Serialization failure while packing
    EncodeError(String),
    /// The document declares a format version this build does not read
    UnsupportedVersion(u32),
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(e) => write!(f, "Decode error: {e}"),
            Self::EncodeError(e) => write!(f, "Encode error: {e}"),
            Self::UnsupportedVersion(v) => write!(f, "Unsupported bundle version: {v}"),
        }
    }
}

impl std::error::Error for BundleError {}
