//! MeshResource - geometry for procedural placeholder primitives
//!
//! # Example
//!
//! ```rust
//! use mandala_glb::MeshResource;
//!
//! let cube = MeshResource::generate_box(1.0).mesh_data();
//! assert_eq!(cube.positions.len(), 8);
//! assert_eq!(cube.indices.len(), 36);
//! ```

/// Procedural mesh primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshResource {
    /// Axis-aligned box centred on the origin; `size` is the half-extent.
    Box { size: f32 },
}

/// Triangle-list geometry ready to be packed into a buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

/// Corner signs of the box, in the order the indices below refer to.
const BOX_CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const BOX_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // back
    0, 4, 5, 0, 5, 1, // bottom
    3, 2, 6, 3, 6, 7, // top
    0, 3, 7, 0, 7, 4, // left
    1, 5, 6, 1, 6, 2, // right
];

impl MeshResource {
    /// Generate a box mesh with uniform half-extent.
    pub fn generate_box(size: f32) -> Self {
        MeshResource::Box { size }
    }

    /// Expand the primitive into vertices and triangle indices.
    pub fn mesh_data(&self) -> MeshData {
        match *self {
            MeshResource::Box { size } => MeshData {
                positions: BOX_CORNERS
                    .iter()
                    .map(|[x, y, z]| [x * size, y * size, z * size])
                    .collect(),
                indices: BOX_INDICES.to_vec(),
            },
        }
    }
}

impl MeshData {
    /// Component-wise (min, max) over all positions.
    ///
    /// An empty mesh yields `([0; 3], [0; 3])`.
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        let Some(first) = self.positions.first() else {
            return ([0.0; 3], [0.0; 3]);
        };
        self.positions
            .iter()
            .fold((*first, *first), |(mut min, mut max), p| {
                for axis in 0..3 {
                    min[axis] = min[axis].min(p[axis]);
                    max[axis] = max[axis].max(p[axis]);
                }
                (min, max)
            })
    }

    /// Positions packed as little-endian f32 triples.
    pub fn position_bytes(&self) -> Vec<u8> {
        self.positions
            .iter()
            .flatten()
            .flat_map(|v| v.to_le_bytes())
            .collect()
    }

    /// Indices packed as little-endian u16.
    pub fn index_bytes(&self) -> Vec<u8> {
        self.indices.iter().flat_map(|i| i.to_le_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_box_matches_canonical_cube() {
        let cube = MeshResource::generate_box(1.0).mesh_data();
        assert_eq!(cube.positions[0], [-1.0, -1.0, -1.0]);
        assert_eq!(cube.positions[6], [1.0, 1.0, 1.0]);
        assert_eq!(&cube.indices[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&cube.indices[30..], &[1, 5, 6, 1, 6, 2]);
    }

    #[test]
    fn test_bounds_scale_with_size() {
        let cube = MeshResource::generate_box(0.5).mesh_data();
        assert_eq!(cube.bounds(), ([-0.5, -0.5, -0.5], [0.5, 0.5, 0.5]));
    }

    #[test]
    fn test_packed_sizes() {
        let cube = MeshResource::generate_box(1.0).mesh_data();
        assert_eq!(cube.position_bytes().len(), 96);
        assert_eq!(cube.index_bytes().len(), 72);
        assert_eq!(&cube.index_bytes()[..4], &[0, 0, 1, 0]);
    }

    #[test]
    fn test_indices_reference_existing_vertices() {
        let cube = MeshResource::generate_box(2.0).mesh_data();
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.positions.len()));
    }
}
