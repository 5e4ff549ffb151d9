//! Shell files served over the `msb://` custom protocol.
//!
//! The shell is a handful of static files. Release builds compile them into
//! the binary; a directory on disk can stand in for them while the shell is
//! being edited.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Served in place of an empty request path.
const INDEX: &str = "index.html";

/// One resolved shell file.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub mime: &'static str,
    pub body: Cow<'static, [u8]>,
}

/// Where the shell's files come from.
///
/// Embedded files always win. Disk is only consulted when a root directory
/// was given, and never outside that root.
#[derive(Debug, Default)]
pub struct ContentProvider {
    embedded: HashMap<String, &'static [u8]>,
    root: Option<PathBuf>,
}

impl ContentProvider {
    /// Serve only what is added with [`ContentProvider::embed`].
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Serve files found under `root`.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            embedded: HashMap::new(),
            root: Some(root.into()),
        }
    }

    /// Add a file compiled into the binary.
    pub fn embed(&mut self, path: impl Into<String>, body: &'static [u8]) {
        self.embedded.insert(path.into(), body);
    }

    /// Look up the file a request path names.
    pub fn resolve(&self, path: &str) -> Option<Asset> {
        let path = match path.trim_start_matches('/') {
            "" => INDEX,
            p => p,
        };
        let mime = mime_for(path);

        if let Some(body) = self.embedded.get(path) {
            return Some(Asset {
                mime,
                body: Cow::Borrowed(*body),
            });
        }

        let root = self.root.as_deref()?;
        read_under(root, path).map(|data| Asset {
            mime,
            body: Cow::Owned(data),
        })
    }
}

/// Read `relative` from inside `root`. `..` segments and symlinks that
/// lead out of `root` resolve to nothing.
fn read_under(root: &Path, relative: &str) -> Option<Vec<u8>> {
    let root = root.canonicalize().ok()?;
    let file = root.join(relative).canonicalize().ok()?;
    if !file.starts_with(&root) {
        return None;
    }
    std::fs::read(file).ok()
}

/// Extract the asset path from a custom-protocol request URI.
///
/// Handles `msb://localhost/...`, the `http://msb.localhost/...` form
/// WebView2 rewrites custom protocols to, and drops any query or fragment.
pub fn asset_path(uri: &str) -> &str {
    let rest = uri
        .strip_prefix("msb://localhost")
        .or_else(|| uri.strip_prefix("http://msb.localhost"))
        .or_else(|| uri.strip_prefix("https://msb.localhost"))
        .or_else(|| uri.strip_prefix("msb://"))
        .unwrap_or("");
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    rest[..end].trim_start_matches('/')
}

/// Content type of a shell file, by extension.
fn mime_for(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Path to the shell sources at the workspace root.
    fn shell_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent() // crates/
            .unwrap()
            .parent() // workspace root
            .unwrap()
            .join("assets")
            .join("shell")
    }

    fn scratch() -> (tempfile::TempDir, ContentProvider) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>shell</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        let cp = ContentProvider::from_dir(dir.path());
        (dir, cp)
    }

    #[test]
    fn shell_dir_resolves() {
        let cp = ContentProvider::from_dir(shell_dir());
        for (file, mime) in [
            ("index.html", "text/html"),
            ("app.js", "application/javascript"),
            ("style.css", "text/css"),
        ] {
            let asset = cp
                .resolve(file)
                .unwrap_or_else(|| panic!("{file} should resolve"));
            assert_eq!(asset.mime, mime);
            assert!(!asset.body.is_empty());
        }
    }

    #[test]
    fn shell_script_uses_msb_ipc() {
        let cp = ContentProvider::from_dir(shell_dir());
        let asset = cp.resolve("app.js").unwrap();
        let js = String::from_utf8_lossy(&asset.body);
        assert!(js.contains("window.msb.ipc"));
        assert!(
            !js.contains(".innerHTML"),
            "shell must not build markup from page data"
        );
    }

    #[test]
    fn empty_path_serves_index() {
        let (_dir, cp) = scratch();
        let asset = cp.resolve("/").unwrap();
        assert_eq!(asset.mime, "text/html");
        assert_eq!(asset.body.as_ref(), b"<html>shell</html>");
    }

    #[test]
    fn leading_slash_is_ignored() {
        let (_dir, cp) = scratch();
        assert!(cp.resolve("/app.js").is_some());
    }

    #[test]
    fn missing_file_is_none() {
        let (_dir, cp) = scratch();
        assert!(cp.resolve("missing.html").is_none());
    }

    #[test]
    fn dotdot_cannot_leave_root() {
        let outer = tempfile::tempdir().unwrap();
        let base = outer.path().join("shell");
        std::fs::create_dir(&base).unwrap();
        std::fs::write(outer.path().join("secret.txt"), "secret").unwrap();

        let cp = ContentProvider::from_dir(&base);
        assert!(cp.resolve("../secret.txt").is_none());
        assert!(cp.resolve("nested/../../secret.txt").is_none());
    }

    #[test]
    fn absolute_path_cannot_leave_root() {
        let (_dir, cp) = scratch();
        assert!(cp.resolve("/etc/passwd").is_none());
    }

    #[test]
    fn embedded_files_never_touch_disk() {
        let mut cp = ContentProvider::embedded();
        cp.embed("index.html", b"<html>embedded</html>");
        assert_eq!(cp.resolve("").unwrap().body.as_ref(), b"<html>embedded</html>");
        // Resolved against the working directory these would exist.
        assert!(cp.resolve("Cargo.toml").is_none());
        assert!(cp.resolve("src/lib.rs").is_none());
    }

    #[test]
    fn embedded_file_shadows_disk() {
        let (_dir, mut cp) = scratch();
        cp.embed("index.html", b"<html>embedded</html>");
        let asset = cp.resolve("index.html").unwrap();
        assert_eq!(asset.mime, "text/html");
        assert!(matches!(asset.body, Cow::Borrowed(_)));
        assert_eq!(asset.body.as_ref(), b"<html>embedded</html>");
    }

    #[test]
    fn asset_path_from_custom_scheme() {
        assert_eq!(asset_path("msb://localhost/index.html"), "index.html");
        assert_eq!(asset_path("msb://localhost"), "");
        assert_eq!(asset_path("msb://app.js"), "app.js");
    }

    #[test]
    fn asset_path_from_webview2_rewrite() {
        assert_eq!(asset_path("http://msb.localhost/style.css"), "style.css");
        assert_eq!(asset_path("https://msb.localhost/app.js"), "app.js");
    }

    #[test]
    fn asset_path_drops_query_and_fragment() {
        assert_eq!(asset_path("msb://localhost/app.js?v=2"), "app.js");
        assert_eq!(asset_path("msb://localhost/index.html#top"), "index.html");
    }

    #[test]
    fn asset_path_of_foreign_uri_is_empty() {
        assert_eq!(asset_path("https://example.com/index.html"), "");
    }

    #[test]
    fn mime_by_extension() {
        assert_eq!(mime_for("a.html"), "text/html");
        assert_eq!(mime_for("nested/a.css"), "text/css");
        assert_eq!(mime_for("app.js"), "application/javascript");
        assert_eq!(mime_for("favicon.ico"), "application/octet-stream");
        assert_eq!(mime_for("README"), "application/octet-stream");
    }
}
