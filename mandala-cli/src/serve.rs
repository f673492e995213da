//! Static preview server for the generated assets.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Bind `0.0.0.0:port` and serve `dir` until the process is stopped.
pub fn serve_directory(dir: &Path, port: u16) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;
    run(&server, dir);
    Ok(())
}

/// Answer requests on an already-bound server.
pub fn run(server: &tiny_http::Server, dir: &Path) {
    for request in server.incoming_requests() {
        let response = respond_to(dir, request.url());
        tracing::debug!("{} {} -> {}", request.method(), request.url(), response.status_code().0);
        if let Err(e) = request.respond(response) {
            tracing::warn!("Failed to send response: {}", e);
        }
    }
}

fn respond_to(dir: &Path, url: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let Some(file_path) = resolve(dir, url) else {
        return tiny_http::Response::from_string("400 Bad Request").with_status_code(400);
    };

    match fs::read(&file_path) {
        Ok(content) if file_path.is_file() => {
            let mut response = tiny_http::Response::from_data(content);
            if let Ok(header) =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], get_content_type(&file_path).as_bytes())
            {
                response.add_header(header);
            }
            response
        }
        _ => tiny_http::Response::from_string("404 Not Found").with_status_code(404),
    }
}

/// Map a request URL onto a file under `dir`. `None` for paths that try to
/// climb out of it.
pub fn resolve(dir: &Path, url: &str) -> Option<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let path = if path.is_empty() || path == "/" { "/index.html" } else { path };
    let relative = Path::new(path.trim_start_matches('/'));

    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }
    Some(dir.join(relative))
}

pub fn get_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("glb") => "model/gltf-binary",
        Some("gltf") => "model/gltf+json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_resolve() {
        let dir = Path::new("/srv");
        assert_eq!(resolve(dir, "/"), Some(PathBuf::from("/srv/index.html")));
        assert_eq!(resolve(dir, "/modelo1.glb?v=2"), Some(PathBuf::from("/srv/modelo1.glb")));
        assert_eq!(resolve(dir, "/images/budha.jpg"), Some(PathBuf::from("/srv/images/budha.jpg")));
        assert_eq!(resolve(dir, "/../etc/passwd"), None);
        assert_eq!(resolve(dir, "/images/../../x"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(get_content_type(Path::new("a.glb")), "model/gltf-binary");
        assert_eq!(get_content_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(get_content_type(Path::new("a")), "application/octet-stream");
    }

    fn get(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = std::net::TcpStream::connect(addr).unwrap();
        write!(stream, "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path).unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn test_serves_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>preview</h1>").unwrap();
        fs::write(dir.path().join("modelo1.glb"), b"glTF").unwrap();

        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let root = dir.path().to_path_buf();
        std::thread::spawn(move || run(&server, &root));

        let index = get(addr, "/");
        assert!(index.starts_with("HTTP/1.1 200"));
        assert!(index.contains("<h1>preview</h1>"));

        let model = get(addr, "/modelo1.glb");
        assert!(model.to_lowercase().contains("content-type: model/gltf-binary"));

        assert!(get(addr, "/missing.jpg").starts_with("HTTP/1.1 404"));
        assert!(get(addr, "/../secret").starts_with("HTTP/1.1 400"));
    }
}
