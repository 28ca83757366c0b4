//! Scroll offset management and visibility culling.

use crate::layout::PlacementRecord;

/// Discrete scroll inputs from the viewport collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    Up,
    Down,
}

/// Vertical scroll state for one viewer.
///
/// The offset moves by a fixed step per command and is clamped at zero
/// below. There is no upper clamp at content height in this model.
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: f32,
    step: f32,
}

impl ScrollState {
    pub fn new(step: f32) -> Self {
        Self { offset: 0.0, step }
    }

    /// Current vertical offset, always >= 0.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Apply one scroll command.
    pub fn apply(&mut self, command: ScrollCommand) {
        match command {
            ScrollCommand::Up => self.scroll_up(),
            ScrollCommand::Down => self.scroll_down(),
        }
    }

    /// Scroll up by one step, clamping at zero.
    pub fn scroll_up(&mut self) {
        self.offset = (self.offset - self.step).max(0.0);
    }

    /// Scroll down by one step.
    pub fn scroll_down(&mut self) {
        self.offset += self.step;
    }

    /// Reset for a new page load.
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

/// Cull records outside the visible band.
///
/// A record survives unless it starts below the band
/// (`y > offset + viewport_height`) or ends above it
/// (`y + line_height < offset`). The painter renders survivors shifted
/// by `-offset`.
pub fn cull<'a>(
    records: &'a [PlacementRecord],
    offset: f32,
    viewport_height: f32,
    line_height: f32,
) -> Vec<&'a PlacementRecord> {
    records
        .iter()
        .filter(|r| r.y <= offset + viewport_height && r.y + line_height >= offset)
        .collect()
}
