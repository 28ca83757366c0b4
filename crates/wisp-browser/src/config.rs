//! Viewer configuration.
//!
//! All layout and scroll constants live here as named, overridable
//! defaults instead of process-wide globals, so concurrent layouts
//! (e.g. in tests) never interfere.

/// Viewport dimensions and layout steps for one viewer.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Viewport width in layout units.
    pub viewport_width: f32,
    /// Viewport height in layout units.
    pub viewport_height: f32,
    /// Horizontal step: left margin and the default per-character
    /// advance of [`CharMetrics`](crate::layout::CharMetrics).
    pub h_step: f32,
    /// Vertical step: top margin and the default line height.
    pub v_step: f32,
    /// Line-height multiplier applied on every line advance.
    pub leading: f32,
    /// Layout units moved per scroll command.
    pub scroll_step: f32,
    /// Fallback URL when no target is supplied.
    pub home_url: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            h_step: 13.0,
            v_step: 18.0,
            leading: 1.25,
            scroll_step: 100.0,
            home_url: "https://example.org/".to_string(),
        }
    }
}
