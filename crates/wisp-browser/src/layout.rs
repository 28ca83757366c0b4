//! Line layout engine.
//!
//! Converts a flat string into positioned token records honoring word
//! wrapping, font metrics, and the viewport width. The pass is a
//! single linear scan over the tokens with a local cursor accumulator,
//! so it is pure, reentrant, and deterministic for a given metrics
//! provider.

use crate::config::ViewConfig;

/// Measures tokens for layout.
///
/// The viewport collaborator supplies an implementation; tests and the
/// CLI use [`CharMetrics`].
pub trait FontMetrics {
    /// Advance width of `token` in layout units.
    fn measure(&self, token: &str) -> f32;
    /// Height of one line in layout units, before leading.
    fn line_height(&self) -> f32;
}

/// Fixed-advance metrics: every character is `advance` wide.
#[derive(Debug, Clone, Copy)]
pub struct CharMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl CharMetrics {
    /// Derive metrics from the config's horizontal and vertical steps.
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            advance: config.h_step,
            line_height: config.v_step,
        }
    }
}

impl FontMetrics for CharMetrics {
    fn measure(&self, token: &str) -> f32 {
        token.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// One visual token at an absolute document-space coordinate
/// (pre-scroll).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    pub x: f32,
    pub y: f32,
    pub token: String,
}

/// Lay `text` out into placement records.
///
/// Tokens are whitespace-delimited runs; consecutive whitespace
/// collapses and produces no empty tokens. The cursor starts at
/// `(h_step, v_step)`. The overflow check runs before each token is
/// emitted, so a token wider than the viewport starts its own line and
/// then overflows the right edge -- a documented edge case, not
/// something this pass tries to fix. Produces exactly one record per
/// token, in input order.
pub fn layout(text: &str, config: &ViewConfig, font: &dyn FontMetrics) -> Vec<PlacementRecord> {
    let margin = config.h_step;
    let limit = config.viewport_width - margin;
    // Space width is measured, not assumed constant.
    let space = font.measure(" ");
    let line_step = font.line_height() * config.leading;

    let mut records = Vec::new();
    let mut x = margin;
    let mut y = config.v_step;

    for token in text.split_whitespace() {
        let w = font.measure(token);
        if x + w > limit {
            x = margin;
            y += line_step;
        }
        records.push(PlacementRecord {
            x,
            y,
            token: token.to_string(),
        });
        x += w + space;
    }
    records
}
