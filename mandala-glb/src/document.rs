//! glTF 2.0 JSON document for a single-mesh placeholder.
//!
//! Only the subset of glTF needed to describe one indexed triangle mesh is
//! modelled. Field order is serialization order.

use crate::mesh::MeshData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `componentType` for 32-bit floats.
pub const FLOAT: u32 = 5126;
/// `componentType` for unsigned 16-bit integers.
pub const UNSIGNED_SHORT: u32 = 5123;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub asset: Asset,
    pub scene: u32,
    pub scenes: Vec<Scene>,
    pub nodes: Vec<Node>,
    pub meshes: Vec<Mesh>,
    pub accessors: Vec<Accessor>,
    pub buffer_views: Vec<BufferView>,
    pub buffers: Vec<Buffer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub version: String,
    pub generator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub nodes: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub mesh: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Attribute semantic -> accessor index (e.g. `POSITION`).
    pub attributes: BTreeMap<String, u32>,
    pub indices: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    pub buffer_view: u32,
    pub component_type: u32,
    pub count: u32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Vec<f32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    pub buffer: u32,
    pub byte_offset: u32,
    pub byte_length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    pub byte_length: u32,
}

impl Document {
    /// Describe `mesh` as node 0 of scene 0, with positions followed by
    /// indices in buffer 0.
    pub fn single_mesh(name: &str, generator: &str, mesh: &MeshData) -> Self {
        let (min, max) = mesh.bounds();
        let positions_len = (mesh.positions.len() * 3 * size_of::<f32>()) as u32;
        let indices_len = (mesh.indices.len() * size_of::<u16>()) as u32;

        Document {
            asset: Asset {
                version: "2.0".to_string(),
                generator: generator.to_string(),
            },
            scene: 0,
            scenes: vec![Scene { nodes: vec![0] }],
            nodes: vec![Node {
                mesh: 0,
                name: name.to_string(),
            }],
            meshes: vec![Mesh {
                primitives: vec![Primitive {
                    attributes: BTreeMap::from([("POSITION".to_string(), 0)]),
                    indices: 1,
                }],
            }],
            accessors: vec![
                Accessor {
                    buffer_view: 0,
                    component_type: FLOAT,
                    count: mesh.positions.len() as u32,
                    kind: "VEC3".to_string(),
                    min: Some(min.to_vec()),
                    max: Some(max.to_vec()),
                },
                Accessor {
                    buffer_view: 1,
                    component_type: UNSIGNED_SHORT,
                    count: mesh.indices.len() as u32,
                    kind: "SCALAR".to_string(),
                    min: None,
                    max: None,
                },
            ],
            buffer_views: vec![
                BufferView {
                    buffer: 0,
                    byte_offset: 0,
                    byte_length: positions_len,
                },
                BufferView {
                    buffer: 0,
                    byte_offset: positions_len,
                    byte_length: indices_len,
                },
            ],
            buffers: vec![Buffer {
                byte_length: positions_len + indices_len,
            }],
        }
    }

    /// Compact JSON (no whitespace), as embedded in the GLB JSON chunk.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
