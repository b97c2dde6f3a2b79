//! Active-view bounds within the host window.

use canopy_common::{Rect, Size};
use canopy_config::schema::LayoutConfig;

/// Chrome surrounding the active view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    pub header_height: f64,
    pub sidebar_width: f64,
    pub sidebar_open: bool,
    /// Recorded for overlay-aware insets; does not change the rectangle yet.
    pub overlay_open: bool,
}

impl LayoutState {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            header_height: f64::from(config.header_height),
            sidebar_width: f64::from(config.sidebar_width),
            sidebar_open: config.sidebar_open,
            overlay_open: false,
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

/// Rectangle for the active view: below the header, left of an open sidebar.
///
/// Dimensions saturate at zero when the window is smaller than the chrome.
pub fn compute_bounds(window: Size, layout: &LayoutState) -> Rect {
    let width = if layout.sidebar_open {
        window.width - layout.sidebar_width
    } else {
        window.width
    };
    Rect {
        x: 0.0,
        y: layout.header_height,
        width: width.max(0.0),
        height: (window.height - layout.header_height).max(0.0),
    }
}
