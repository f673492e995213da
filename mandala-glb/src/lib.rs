//! mandala-glb - placeholder 3D models for the Buddhist Character App
//!
//! Builds minimal, valid GLB (binary glTF 2.0) files holding one named cube,
//! so the frontend's model viewer has something to load during development.
//!
//! # Example
//!
//! ```rust,ignore
//! use mandala_glb::PlaceholderModel;
//!
//! PlaceholderModel::new("Maitreya").write("public/modelo8.glb")?;
//! ```

pub mod container;
pub mod document;
mod inspect;
mod mesh;
mod placeholder;

use thiserror::Error;

pub use container::Glb;
pub use document::Document;
pub use inspect::{inspect, ModelSummary};
pub use mesh::{MeshData, MeshResource};
pub use placeholder::{PlaceholderModel, DEFAULT_GENERATOR};

/// Error types for model generation and inspection
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GLB truncated at byte {0}")]
    Truncated(usize),

    #[error("Bad GLB magic: {0:#010x}")]
    BadMagic(u32),

    #[error("Unsupported GLB version: {0}")]
    UnsupportedVersion(u32),

    #[error("GLB header says {header} bytes, file has {actual}")]
    LengthMismatch { header: usize, actual: usize },

    #[error("Invalid GLB chunk: {0}")]
    Chunk(String),

    #[error("Failed to load GLB: {0}")]
    Gltf(String),

    #[error("Invalid model: {0}")]
    Model(String),
}

pub type Result<T> = std::result::Result<T, Error>;
