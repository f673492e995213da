//! End-to-end generation into a scratch directory

use mandala_cli::config::Config;
use mandala_cli::{cmd_chapters, cmd_characters, cmd_models, manifest};

fn config_for(dir: &std::path::Path) -> Config {
    Config::parse(&format!("public_dir = {:?}\n", dir.to_string_lossy())).unwrap()
}

#[test]
fn test_models_are_named_after_the_roster() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let written = cmd_models(&config, dir.path(), None).unwrap();
    assert_eq!(written.len(), 10);
    assert!(written[0].ends_with("modelo1.glb"));

    let bytes = std::fs::read(dir.path().join("modelo8.glb")).unwrap();
    let summary = mandala_glb::inspect(&bytes).unwrap();
    assert_eq!(summary.node_names, ["Maitreya"]);
    assert_eq!(summary.vertex_count, 8);
    assert_eq!(summary.index_count, 36);
}

#[test]
fn test_models_past_the_roster_use_fallback_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    cmd_models(&config, dir.path(), Some(12)).unwrap();
    let bytes = std::fs::read(dir.path().join("modelo12.glb")).unwrap();
    let summary = mandala_glb::inspect(&bytes).unwrap();
    assert_eq!(summary.node_names, ["Buddhist Character 12"]);
}

#[test]
fn test_character_and_chapter_images() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let images = config.images_dir();

    let characters = cmd_characters(&config, &images, true).unwrap();
    assert_eq!(characters.len(), 10);
    assert!(images.join("kshitigarbha.jpg").is_file());

    let chapters = cmd_chapters(&config, &images, 4).unwrap();
    assert_eq!(chapters.len(), 4);
    let first = std::fs::read(images.join("character-1.jpg")).unwrap();
    assert_eq!(&first[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_manifest_lists_generated_assets() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    cmd_models(&config, dir.path(), Some(2)).unwrap();
    cmd_chapters(&config, &config.images_dir(), 1).unwrap();

    let entries = manifest::write_manifest(dir.path()).unwrap();
    let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["images/character-1.jpg", "modelo1.glb", "modelo2.glb"]);
    assert!(entries.iter().all(|e| e.sha256.len() == 64));
}

#[derive(Clone)]
struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_asset_writes_are_reported_once_at_default_level() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let captured = Captured(Default::default());

    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("mandala=info"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "mandala_cli", "capture check");
        cmd_models(&config, dir.path(), Some(1)).unwrap();
        cmd_chapters(&config, &config.images_dir(), 1).unwrap();
    });

    let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("capture check"));
    assert!(!logged.contains("modelo1.glb"));
    assert!(!logged.contains("character-1.jpg"));
}
