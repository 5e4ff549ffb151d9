//! A single embedded browsing surface and its per-panel controls.

use msb_common::PanelId;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Amount one press of the zoom buttons changes the scale by.
pub const ZOOM_STEP: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    /// Last submitted, normalized address. Empty until the first submit.
    pub url: String,
    /// Text currently in the address field.
    pub input: String,
    pub muted: bool,
    pub zoom: f64,
    /// Pixel width, or `None` until an even share or a drag assigns one.
    /// Once set it is never recomputed.
    pub width: Option<u32>,
}

impl Panel {
    pub fn new(id: PanelId) -> Self {
        Self {
            id,
            url: String::new(),
            input: String::new(),
            muted: false,
            zoom: DEFAULT_ZOOM,
            width: None,
        }
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    /// The text a submit should normalize: the address field, or the
    /// current url when the field was cleared.
    pub fn pending_address(&self) -> &str {
        if self.input.is_empty() {
            &self.url
        } else {
            &self.input
        }
    }

    /// Merge the fields present in `update`.
    pub(crate) fn merge(&mut self, update: PanelUpdate) {
        if let Some(input) = update.input {
            self.input = input;
        }
        if let Some(url) = update.url {
            self.url = url;
        }
        if let Some(muted) = update.muted {
            self.muted = muted;
        }
        if let Some(zoom) = update.zoom {
            self.zoom = clamp_zoom(zoom);
        }
        if let Some(width) = update.width {
            self.width = Some(width);
        }
    }
}

/// A partial panel update. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelUpdate {
    pub input: Option<String>,
    pub url: Option<String>,
    pub muted: Option<bool>,
    pub zoom: Option<f64>,
    pub width: Option<u32>,
}

impl PanelUpdate {
    pub fn input(text: impl Into<String>) -> Self {
        Self {
            input: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn muted(muted: bool) -> Self {
        Self {
            muted: Some(muted),
            ..Default::default()
        }
    }

    pub fn zoom(zoom: f64) -> Self {
        Self {
            zoom: Some(zoom),
            ..Default::default()
        }
    }

    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Round to two decimals, then clamp into `[MIN_ZOOM, MAX_ZOOM]`.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if !zoom.is_finite() {
        return DEFAULT_ZOOM;
    }
    let rounded = (zoom * 100.0).round() / 100.0;
    rounded.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Zoom label value, e.g. `1.1` → `110`.
pub fn zoom_percent(zoom: f64) -> u32 {
    (zoom * 100.0).round() as u32
}
