use crate::container;
use crate::document::Document;
use crate::mesh::{MeshData, MeshResource};
use crate::Result;
use std::path::Path;

pub const DEFAULT_GENERATOR: &str = "mandala GLB generator";

/// A named unit cube, written as a self-contained GLB file.
#[derive(Debug, Clone)]
pub struct PlaceholderModel {
    name: String,
    generator: String,
    mesh: MeshData,
}

impl PlaceholderModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generator: DEFAULT_GENERATOR.to_string(),
            mesh: MeshResource::generate_box(1.0).mesh_data(),
        }
    }

    /// Override the `asset.generator` string.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> Document {
        Document::single_mesh(&self.name, &self.generator, &self.mesh)
    }

    /// Encode as GLB bytes: positions then indices in the BIN chunk.
    pub fn to_glb(&self) -> Result<Vec<u8>> {
        let json = self.document().to_json_bytes()?;
        let mut bin = self.mesh.position_bytes();
        bin.extend(self.mesh.index_bytes());
        Ok(container::encode(&json, &bin))
    }

    /// Write the GLB to `path`, creating parent directories.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = self.to_glb()?;
        std::fs::write(path, &bytes)?;
        tracing::debug!("Wrote {} ({} bytes) for {}", path.display(), bytes.len(), self.name);
        Ok(bytes.len() as u64)
    }
}
