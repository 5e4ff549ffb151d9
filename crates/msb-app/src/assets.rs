//! Shell assets compiled into the binary.
//!
//! `[webview] assets_dir` swaps these for files on disk, which is handy
//! while working on the shell itself.

use std::path::PathBuf;

use msb_webview::ContentProvider;

/// `(path, contents)` of every bundled shell file.
pub(crate) const SHELL_FILES: &[(&str, &str)] = &[
    ("index.html", include_str!("../../../assets/shell/index.html")),
    ("app.js", include_str!("../../../assets/shell/app.js")),
    ("style.css", include_str!("../../../assets/shell/style.css")),
];

/// Content provider for the shell: the override directory if one is
/// configured, the bundled files otherwise.
pub(crate) fn shell_content(assets_dir: Option<&PathBuf>) -> ContentProvider {
    match assets_dir {
        Some(dir) => {
            if !dir.is_dir() {
                tracing::warn!(
                    path = %dir.display(),
                    "Shell assets directory not found; the window will be blank"
                );
            }
            ContentProvider::from_dir(dir)
        }
        None => {
            let mut provider = ContentProvider::embedded();
            for (path, body) in SHELL_FILES {
                provider.embed(*path, body.as_bytes());
            }
            provider
        }
    }
}
