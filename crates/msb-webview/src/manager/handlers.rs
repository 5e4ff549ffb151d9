use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Origins the shell itself is served from.
///
/// On Windows, WebView2 rewrites custom protocols:
/// `msb://localhost/…` → `http://msb.localhost/…`.
pub const SHELL_ORIGINS: &[&str] = &["msb://", "http://msb.localhost", "https://msb.localhost"];

/// Allowed URL prefixes for webview navigation.
///
/// The shell plus whatever the panels embed. `javascript:`, `file:`,
/// `data:` and every other scheme are refused.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "msb://",
    "http://msb.localhost",
    "https://msb.localhost",
    "about:blank",
    "https://",
    "http://",
];

fn has_prefix_ignore_case(url: &str, prefix: &str) -> bool {
    url.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Check whether a URL is allowed by the navigation policy.
pub fn is_navigation_allowed(url: &str) -> bool {
    let url = url.trim_start();
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| has_prefix_ignore_case(url, prefix))
}

/// Whether an IPC request came from the shell rather than an embedded page.
///
/// Some platforms report no origin for IPC requests; those are accepted.
pub fn is_shell_origin(uri: &str) -> bool {
    if uri.is_empty() {
        return true;
    }
    SHELL_ORIGINS.iter().any(|prefix| {
        if !has_prefix_ignore_case(uri, prefix) {
            return false;
        }
        // `msb://` is a scheme; the localhost forms must end at the host.
        prefix.ends_with("//")
            || matches!(
                uri[prefix.len()..].chars().next(),
                None | Some('/' | ':' | '?' | '#')
            )
    })
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

pub(super) fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let origin = request.uri().to_string();
            if !is_shell_origin(&origin) {
                warn!(origin = %origin, "IPC message rejected: foreign origin");
                return;
            }

            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            push(&events, WebViewEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "navigation blocked: scheme not allowed");
                push(&events, WebViewEvent::NavigationBlocked { url });
                return false;
            }

            debug!(url = %url, "navigation allowed");
            push(&events, WebViewEvent::NavigationRequested { url });
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Allowed URLs --

    #[test]
    fn allows_msb_protocol() {
        assert!(is_navigation_allowed("msb://localhost/index.html"));
        assert!(is_navigation_allowed("MSB://localhost/index.html"));
    }

    #[test]
    fn allows_webview2_rewritten_custom_protocol() {
        assert!(is_navigation_allowed("http://msb.localhost/index.html"));
    }

    #[test]
    fn allows_about_blank() {
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn allows_embedded_sites() {
        assert!(is_navigation_allowed("https://www.youtube.com/embed/abc"));
        assert!(is_navigation_allowed("http://example.com"));
        assert!(is_navigation_allowed("HTTPS://EXAMPLE.COM"));
    }

    // -- Blocked URLs --

    #[test]
    fn blocks_file_protocol() {
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("file://localhost/etc/hosts"));
    }

    #[test]
    fn blocks_javascript_protocol() {
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("JavaScript:void(0)"));
    }

    #[test]
    fn blocks_data_protocol() {
        assert!(!is_navigation_allowed("data:text/html,<h1>XSS</h1>"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("   "));
        assert!(!is_navigation_allowed("not-a-url"));
        assert!(!is_navigation_allowed("ftp://files.example.com"));
        assert!(!is_navigation_allowed("https"));
    }

    // -- IPC origins --

    #[test]
    fn shell_origins_accepted() {
        assert!(is_shell_origin("msb://localhost/index.html"));
        assert!(is_shell_origin("http://msb.localhost/index.html"));
        assert!(is_shell_origin(""));
    }

    #[test]
    fn embedded_page_origins_rejected() {
        assert!(!is_shell_origin("https://www.youtube.com/embed/abc"));
        assert!(!is_shell_origin("http://msb.localhost.evil.com/"));
        assert!(!is_shell_origin("about:blank"));
    }

    // -- Allowlist structure --

    #[test]
    fn allowlist_has_expected_entries() {
        assert_eq!(ALLOWED_NAV_PREFIXES.len(), 6);
        assert!(ALLOWED_NAV_PREFIXES.contains(&"msb://"));
        assert!(ALLOWED_NAV_PREFIXES.contains(&"about:blank"));
    }
}
