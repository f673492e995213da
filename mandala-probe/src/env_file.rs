//! Backend URL discovery from the frontend's `.env` file.

use crate::Result;
use std::path::Path;

/// Key the React frontend reads its backend location from.
pub const BACKEND_URL_KEY: &str = "REACT_APP_BACKEND_URL";

/// First `REACT_APP_BACKEND_URL=` value in `content`, trimmed.
pub fn parse_backend_url(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(BACKEND_URL_KEY)?.strip_prefix('='))
        .map(|value| value.trim().to_string())
}

/// Read the backend URL from an env file. A missing key yields `None`; an
/// unreadable file is an error.
pub fn read_backend_url(path: &Path) -> Result<Option<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| crate::Error::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_backend_url(&content))
}

/// `<backend>/api`, tolerating a trailing slash on the backend URL.
pub fn api_base(backend_url: &str) -> String {
    format!("{}/api", backend_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_match() {
        let env = "WDS_SOCKET_PORT=443\nREACT_APP_BACKEND_URL= https://app.example.com \nREACT_APP_BACKEND_URL=https://second\n";
        assert_eq!(parse_backend_url(env).as_deref(), Some("https://app.example.com"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let env = "REACT_APP_BACKEND_URL=https://host/?a=b\n";
        assert_eq!(parse_backend_url(env).as_deref(), Some("https://host/?a=b"));
    }

    #[test]
    fn test_prefix_must_be_at_line_start() {
        assert_eq!(parse_backend_url("# REACT_APP_BACKEND_URL=x\n"), None);
        assert_eq!(parse_backend_url("REACT_APP_BACKEND_URL_OLD=x\n"), None);
    }

    #[test]
    fn test_api_base() {
        assert_eq!(api_base("http://localhost:8001"), "http://localhost:8001/api");
        assert_eq!(api_base("http://localhost:8001/"), "http://localhost:8001/api");
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(read_backend_url(Path::new("/nonexistent/frontend/.env")).is_err());
    }

    #[test]
    fn test_file_without_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "OTHER=1\n").unwrap();
        assert_eq!(read_backend_url(&path).unwrap(), None);
    }
}
