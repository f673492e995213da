//! Model inspection using the gltf crate
//!
//! Loads GLB bytes the same way a viewer would and extracts what is needed to
//! sanity-check a generated placeholder.

use crate::{Error, Result};
use serde::Serialize;

/// What a GLB contains, as seen by a glTF loader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub generator: Option<String>,
    pub node_names: Vec<String>,
    pub mesh_count: usize,
    pub vertex_count: usize,
    pub index_count: usize,
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Load a GLB and summarize its first mesh primitive.
pub fn inspect(bytes: &[u8]) -> Result<ModelSummary> {
    let (document, buffers, _images) =
        gltf::import_slice(bytes).map_err(|e| Error::Gltf(e.to_string()))?;

    let mesh = document
        .meshes()
        .next()
        .ok_or_else(|| Error::Model("No meshes found in GLB file".into()))?;

    let primitive = mesh
        .primitives()
        .next()
        .ok_or_else(|| Error::Model("No primitives found in mesh".into()))?;

    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|b| &b[..]));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| Error::Model("No positions found".into()))?
        .collect();

    let index_count = reader
        .read_indices()
        .ok_or_else(|| Error::Model("No indices found".into()))?
        .into_u32()
        .count();

    let bounds = primitive.bounding_box();

    let summary = ModelSummary {
        generator: document.as_json().asset.generator.clone(),
        node_names: document
            .nodes()
            .filter_map(|n| n.name().map(str::to_string))
            .collect(),
        mesh_count: document.meshes().count(),
        vertex_count: positions.len(),
        index_count,
        min: bounds.min,
        max: bounds.max,
    };

    tracing::debug!(
        "Inspected model: {} vertices, {} indices, nodes {:?}",
        summary.vertex_count,
        summary.index_count,
        summary.node_names
    );

    Ok(summary)
}
