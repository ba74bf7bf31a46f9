//! Asset vocabulary carried inside bundles

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// The kind of an asset, used for filtered enumeration and lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// UTF-8 text content
    Text,
    /// Raw RGBA8 pixel data
    Texture,
    /// Triangle mesh attributes
    Mesh,
    /// Opaque bytes passed through untouched
    Blob,
}

/// One named, typed unit of content inside a bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset name, unique within its bundle (enforced by the packer)
    pub name: String,
    /// The typed content
    pub payload: AssetPayload,
}

impl Asset {
    /// Create a named asset from any concrete payload type
    #[must_use]
    pub fn new(name: impl Into<String>, payload: impl Into<AssetPayload>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }

    /// The kind of this asset's payload
    #[must_use]
    pub fn kind(&self) -> AssetKind {
        self.payload.kind()
    }

    /// Borrow the payload as a concrete asset type, if it is one
    #[must_use]
    pub fn data<T: AssetData>(&self) -> Option<&T> {
        T::from_payload(&self.payload)
    }
}

/// Typed asset content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AssetPayload {
    /// Text asset
    Text(TextAsset),
    /// Texture asset
    Texture(TextureAsset),
    /// Mesh asset
    Mesh(MeshAsset),
    /// Opaque blob
    Blob(BlobAsset),
}

impl AssetPayload {
    /// The kind tag for this payload
    #[must_use]
    pub const fn kind(&self) -> AssetKind {
        match self {
            Self::Text(_) => AssetKind::Text,
            Self::Texture(_) => AssetKind::Texture,
            Self::Mesh(_) => AssetKind::Mesh,
            Self::Blob(_) => AssetKind::Blob,
        }
    }
}

/// Ties a concrete payload type to its kind and supports typed extraction.
pub trait AssetData: Sized {
    /// The kind tag of this payload type
    const KIND: AssetKind;

    /// Borrow `Self` out of a payload of the matching kind
    fn from_payload(payload: &AssetPayload) -> Option<&Self>;
}

/// UTF-8 text content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAsset {
    pub text: String,
}

impl TextAsset {
    /// Create a text asset
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Raw RGBA8 pixel data, tightly packed row-major
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureAsset {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureAsset {
    /// Create a texture asset from raw RGBA data
    #[must_use]
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Check that the pixel buffer matches the declared dimensions
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rgba.len() == (self.width as usize) * (self.height as usize) * 4
    }
}

/// Triangle mesh attributes, structure-of-arrays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshAsset {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl MeshAsset {
    /// Number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Opaque bytes passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobAsset {
    pub bytes: Vec<u8>,
}

impl BlobAsset {
    /// Create a blob asset
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl AssetData for TextAsset {
    const KIND: AssetKind = AssetKind::Text;

    fn from_payload(payload: &AssetPayload) -> Option<&Self> {
        match payload {
            AssetPayload::Text(data) => Some(data),
            _ => None,
        }
    }
}

impl AssetData for TextureAsset {
    const KIND: AssetKind = AssetKind::Texture;

    fn from_payload(payload: &AssetPayload) -> Option<&Self> {
        match payload {
            AssetPayload::Texture(data) => Some(data),
            _ => None,
        }
    }
}

impl AssetData for MeshAsset {
    const KIND: AssetKind = AssetKind::Mesh;

    fn from_payload(payload: &AssetPayload) -> Option<&Self> {
        match payload {
            AssetPayload::Mesh(data) => Some(data),
            _ => None,
        }
    }
}

impl AssetData for BlobAsset {
    const KIND: AssetKind = AssetKind::Blob;

    fn from_payload(payload: &AssetPayload) -> Option<&Self> {
        match payload {
            AssetPayload::Blob(data) => Some(data),
            _ => None,
        }
    }
}

impl From<TextAsset> for AssetPayload {
    fn from(data: TextAsset) -> Self {
        Self::Text(data)
    }
}

impl From<TextureAsset> for AssetPayload {
    fn from(data: TextureAsset) -> Self {
        Self::Texture(data)
    }
}

impl From<MeshAsset> for AssetPayload {
    fn from(data: MeshAsset) -> Self {
        Self::Mesh(data)
    }
}

impl From<BlobAsset> for AssetPayload {
    fn from(data: BlobAsset) -> Self {
        Self::Blob(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_payload() {
        let asset = Asset::new("title", TextAsset::new("hello"));
        assert_eq!(asset.kind(), AssetKind::Text);

        let asset = Asset::new("raw", BlobAsset::new(vec![1, 2, 3]));
        assert_eq!(asset.kind(), AssetKind::Blob);
    }

    #[test]
    fn test_typed_extraction() {
        let asset = Asset::new("title", TextAsset::new("hello"));

        let text: &TextAsset = asset.data().unwrap();
        assert_eq!(text.text, "hello");
        assert!(asset.data::<BlobAsset>().is_none());
    }

    #[test]
    fn test_texture_completeness() {
        let complete = TextureAsset::new(2, 2, vec![0_u8; 16]);
        assert!(complete.is_complete());

        let truncated = TextureAsset::new(2, 2, vec![0_u8; 10]);
        assert!(!truncated.is_complete());
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = MeshAsset {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            normals: vec![Vec3::Z; 3],
            uvs: vec![Vec2::ZERO; 3],
            indices: vec![0, 1, 2],
        };
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }
}
