//! Reference photograph downloads.
//!
//! Downloads are best-effort: each failure is logged and reported, and the
//! remaining references are still fetched.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A remote image saved under `file` in the images directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub url: String,
    pub file: String,
}

impl Reference {
    pub fn new(url: &str, file: &str) -> Self {
        Self {
            url: url.to_string(),
            file: file.to_string(),
        }
    }
}

/// Result of one download.
#[derive(Debug)]
pub struct DownloadOutcome {
    pub reference: Reference,
    pub path: PathBuf,
    pub result: Result<u64>,
}

impl DownloadOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// The stock photographs shipped with the character gallery.
pub fn default_references() -> Vec<Reference> {
    [
        ("https://images.unsplash.com/photo-1529485726363-95c8d62f656f?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2Mzl8MHwxfHNlYXJjaHwxfHxidWRkaGF8ZW58MHx8fHwxNzUyODYxMDc2fDA&ixlib=rb-4.1.0&q=85", "budha.jpg"),
        ("https://images.unsplash.com/photo-1589400554239-7c6cf8393a6e?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2Mzl8MHwxfHNlYXJjaHwyfHxidWRkaGF8ZW58MHx8fHwxNzUyODYxMDc2fDA&ixlib=rb-4.1.0&q=85", "samantabhadra.jpg"),
        ("https://images.unsplash.com/photo-1631949136465-af801b6c5244?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2Mzl8MHwxfHNlYXJjaHwzfHxidWRkaGF8ZW58MHx8fHwxNzUyODYxMDc2fDA&ixlib=rb-4.1.0&q=85", "manjusri.jpg"),
        ("https://images.unsplash.com/photo-1506126613408-eca07ce68773?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njl8MHwxfHNlYXJjaHwxfHxtZWRpdGF0aW9ufGVufDB8fHx8MTc1MjgzMDg1M3ww&ixlib=rb-4.1.0&q=85", "meghasri.jpg"),
        ("https://images.unsplash.com/photo-1528715471579-d1bcf0ba5e83?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njl8MHwxfHNlYXJjaHwzfHxtZWRpdGF0aW9ufGVufDB8fHx8MTc1MjgzMDg1M3ww&ixlib=rb-4.1.0&q=85", "sagara_megha.jpg"),
    ]
    .into_iter()
    .map(|(url, file)| Reference::new(url, file))
    .collect()
}

/// Fetch every reference into `dir`, in order.
pub async fn download_all(references: &[Reference], dir: &Path) -> Vec<DownloadOutcome> {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            let message = e.to_string();
            return references
                .iter()
                .map(|r| DownloadOutcome {
                    reference: r.clone(),
                    path: dir.join(&r.file),
                    result: Err(Error::Download(message.clone())),
                })
                .collect();
        }
    };

    let mut outcomes = Vec::with_capacity(references.len());
    for reference in references {
        let path = dir.join(&reference.file);
        let result = download_one(&client, &reference.url, &path).await;
        match &result {
            Ok(bytes) => println!("✅ Downloaded: {} ({} bytes)", path.display(), bytes),
            Err(e) => {
                tracing::warn!("Failed to download {}: {}", reference.url, e);
                println!("❌ Failed to download {}: {}", reference.url, e);
            }
        }
        outcomes.push(DownloadOutcome {
            reference: reference.clone(),
            path,
            result,
        });
    }
    outcomes
}

async fn download_one(client: &reqwest::Client, url: &str, path: &Path) -> Result<u64> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::Download(e.to_string()))?;
    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Download(e.to_string()))?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, &body).await?;
    Ok(body.len() as u64)
}
