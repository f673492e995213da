//! `asset-manifest.json`: size and sha256 of every generated asset.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = "asset-manifest.json";

const ASSET_EXTENSIONS: &[&str] = &["glb", "jpg", "jpeg"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    pub path: String,
    pub size: u64,
    pub sha256: String,
}

fn compute_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

fn is_asset(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ASSET_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Every asset under `dir`, sorted by `/`-separated relative path.
pub fn collect(dir: &Path) -> Result<Vec<AssetEntry>, String> {
    let mut entries = Vec::new();

    for entry in walkdir::WalkDir::new(dir) {
        let entry = entry.map_err(|e| format!("Failed to walk {}: {}", dir.display(), e))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_asset(path) {
            continue;
        }

        let relative = path
            .strip_prefix(dir)
            .map_err(|e| format!("Failed to get relative path: {}", e))?;
        let content = fs::read(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        entries.push(AssetEntry {
            path: relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            size: content.len() as u64,
            sha256: compute_hash(&content),
        });
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// Write the manifest into `dir` and return what it lists.
pub fn write_manifest(dir: &Path) -> Result<Vec<AssetEntry>, String> {
    let entries = collect(dir)?;
    let json = serde_json::to_string_pretty(&entries)
        .map_err(|e| format!("Failed to serialize manifest: {}", e))?;
    let out = dir.join(MANIFEST_FILE);
    fs::write(&out, json).map_err(|e| format!("Failed to write {}: {}", out.display(), e))?;
    tracing::debug!("Wrote {} ({} assets)", out.display(), entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash() {
        assert_eq!(
            compute_hash(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_collect_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("modelo2.glb"), b"two").unwrap();
        fs::write(dir.path().join("modelo1.glb"), b"one").unwrap();
        fs::write(dir.path().join("images/budha.JPG"), b"jpeg").unwrap();
        fs::write(dir.path().join("index.html"), b"<html>").unwrap();

        let entries = collect(dir.path()).unwrap();
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["images/budha.JPG", "modelo1.glb", "modelo2.glb"]);
        assert_eq!(entries[1].size, 3);
    }

    #[test]
    fn test_write_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("modelo1.glb"), b"glTF").unwrap();

        write_manifest(dir.path()).unwrap();
        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join(MANIFEST_FILE)).unwrap()).unwrap();
        assert_eq!(written[0]["path"], "modelo1.glb");
        assert_eq!(written[0]["size"], 4);
    }
}
