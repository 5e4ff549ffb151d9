//! Muted-playback address rewriting.
//!
//! Muting a panel cannot reach into a cross-origin frame, so the only lever
//! is asking the site itself through query parameters. YouTube and Vimeo
//! honor one; everything else is embedded unchanged and the shell shows
//! [`MUTE_CAVEAT`] instead.

use tracing::debug;
use url::Url;

/// Shown under a muted panel whose site has no known mute parameter.
pub const MUTE_CAVEAT: &str = "Some sites may block programmatic mute due to browser security.";

/// Media providers with a known mute query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaHost {
    YouTube,
    Vimeo,
    Other,
}

impl MediaHost {
    /// Classify by substring of the lowercased host, so subdomains such as
    /// `www.` and `m.` match too.
    pub fn classify(host: &str) -> Self {
        let host = host.to_ascii_lowercase();
        if host.contains("youtube.com") || host.contains("youtu.be") {
            MediaHost::YouTube
        } else if host.contains("vimeo.com") {
            MediaHost::Vimeo
        } else {
            MediaHost::Other
        }
    }

    pub fn of(url: &Url) -> Self {
        url.host_str().map_or(MediaHost::Other, Self::classify)
    }

    pub fn supports_mute(self) -> bool {
        !matches!(self, MediaHost::Other)
    }
}

/// The address to embed for a panel.
///
/// Unmuted panels, empty addresses, unparseable addresses and unknown hosts
/// all come back unchanged. Muted YouTube addresses get `mute=1` (and
/// `autoplay=1` unless an `autoplay` parameter is already present); muted
/// Vimeo addresses get `muted=1`.
pub fn resolve_embed_address(url: &str, muted: bool) -> String {
    if !muted || url.is_empty() {
        return url.to_string();
    }
    let mut parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(url, error = %e, "embed address left as-is: not parseable");
            return url.to_string();
        }
    };

    let mut pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    match MediaHost::of(&parsed) {
        MediaHost::YouTube => {
            set_query_param(&mut pairs, "mute", "1");
            if !pairs.iter().any(|(k, _)| k == "autoplay") {
                set_query_param(&mut pairs, "autoplay", "1");
            }
        }
        MediaHost::Vimeo => set_query_param(&mut pairs, "muted", "1"),
        MediaHost::Other => return url.to_string(),
    }

    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}

/// Advisory text for a muted panel, empty when mute is known to work or
/// there is nothing to warn about.
pub fn mute_caveat(url: &str) -> &'static str {
    if url.is_empty() {
        return "";
    }
    match Url::parse(url) {
        Ok(parsed) if !MediaHost::of(&parsed).supports_mute() => MUTE_CAVEAT,
        _ => "",
    }
}

/// Set `key` to `value`: the first existing pair is updated in place and
/// any later duplicates dropped; otherwise the pair is appended.
fn set_query_param(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    let mut seen = false;
    pairs.retain_mut(|(k, v)| {
        if k != key {
            return true;
        }
        if seen {
            return false;
        }
        seen = true;
        *v = value.to_string();
        true
    });
    if !seen {
        pairs.push((key.to_string(), value.to_string()));
    }
}
