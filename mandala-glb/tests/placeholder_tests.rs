//! Integration tests for placeholder GLB models
//!
//! Generated files are decoded by hand and loaded through the gltf crate, the
//! way a model viewer would read them.

use mandala_glb::{container, inspect, PlaceholderModel};

#[test]
fn test_cube_glb_layout() {
    let glb = PlaceholderModel::new("Samantabhadra").to_glb().unwrap();

    let decoded = container::decode(&glb).unwrap();
    assert_eq!(decoded.json.len() % 4, 0);
    assert_eq!(decoded.bin.len(), 168);

    let total = 12 + 8 + decoded.json.len() + 8 + 168;
    assert_eq!(glb.len(), total);
    assert_eq!(u32::from_le_bytes(glb[8..12].try_into().unwrap()) as usize, total);

    // First vertex is (-1, -1, -1), first index after the 96 position bytes is 0.
    assert_eq!(&decoded.bin[0..4], &(-1.0f32).to_le_bytes());
    assert_eq!(&decoded.bin[96..98], &[0, 0]);
}

#[test]
fn test_json_chunk_is_space_padded_json() {
    let glb = PlaceholderModel::new("Maitreya").to_glb().unwrap();
    let decoded = container::decode(&glb).unwrap();

    let text = std::str::from_utf8(&decoded.json).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim_end_matches(' ')).unwrap();
    assert_eq!(value["nodes"][0]["name"], "Maitreya");
    assert_eq!(value["asset"]["version"], "2.0");
    assert_eq!(value["accessors"][0]["componentType"], 5126);
}

#[test]
fn test_loads_with_gltf_crate() {
    let glb = PlaceholderModel::new("Buda Śākyamuni").to_glb().unwrap();

    let summary = inspect(&glb).unwrap();
    assert_eq!(summary.node_names, vec!["Buda Śākyamuni".to_string()]);
    assert_eq!(summary.mesh_count, 1);
    assert_eq!(summary.vertex_count, 8);
    assert_eq!(summary.index_count, 36);
    assert_eq!(summary.min, [-1.0, -1.0, -1.0]);
    assert_eq!(summary.max, [1.0, 1.0, 1.0]);
    assert_eq!(summary.generator.as_deref(), Some("mandala GLB generator"));
}

#[test]
fn test_custom_generator() {
    let glb = PlaceholderModel::new("Kṣitigarbha")
        .with_generator("test-suite")
        .to_glb()
        .unwrap();
    assert_eq!(inspect(&glb).unwrap().generator.as_deref(), Some("test-suite"));
}

#[test]
fn test_inspect_rejects_garbage() {
    assert!(inspect(b"definitely not a model").is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public/models/modelo1.glb");

    let written = PlaceholderModel::new("Buda Śākyamuni").write(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len() as u64, written);
    assert_eq!(&bytes[0..4], b"glTF");
}
