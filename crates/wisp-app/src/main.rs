//! wisp CLI entry point.
//!
//! Thin platform glue around the core pipeline: resolves the target
//! URL from the single optional argument, loads the page, and plays
//! the painter by printing the laid-out lines to stdout. Window
//! management and key handling live with whoever embeds the library.

use anyhow::Result;

use wisp_browser::{PlacementRecord, ViewConfig, Viewer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewConfig::default();
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.home_url.clone());

    log::info!(
        "wisp starting ({}x{} viewport)",
        config.viewport_width,
        config.viewport_height,
    );

    let mut viewer = Viewer::new(config);
    viewer.load(&url)?;

    for line in to_lines(viewer.records()) {
        println!("{line}");
    }

    Ok(())
}

/// Collapse placement records back into text lines, one per distinct
/// row, in document order.
fn to_lines(records: &[PlacementRecord]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_y = f32::NEG_INFINITY;

    for record in records {
        if (record.y - current_y).abs() > f32::EPSILON {
            current_y = record.y;
            lines.push(String::new());
        }
        if let Some(line) = lines.last_mut() {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&record.token);
        }
    }
    lines
}
