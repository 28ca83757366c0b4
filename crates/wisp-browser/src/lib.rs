//! Core engines for the wisp viewer.
//!
//! Ties the four-stage pipeline (URL parse, HTTP fetch, markup strip,
//! line layout) together with scroll state into the [`Viewer`] -- the
//! component an external paint loop drives. Each stage is also usable
//! on its own through the re-exports below.

pub mod config;
pub mod http;
pub mod layout;
pub mod lexer;
pub mod scroll;
pub mod url;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use config::ViewConfig;
pub use http::{HttpResponse, fetch, parse_response};
pub use layout::{CharMetrics, FontMetrics, PlacementRecord};
pub use lexer::strip_tags;
pub use scroll::{ScrollCommand, ScrollState, cull};
pub use url::{Scheme, Url};

use wisp_net::TlsClient;
use wisp_types::Result;

// -----------------------------------------------------------------------
// Viewer
// -----------------------------------------------------------------------

/// A content viewer: one navigation at a time, one page of records.
///
/// Owns the configuration, the TLS client, the font metrics, the
/// current page's placement records, and the scroll offset. Navigation
/// is strictly sequential; a failed load leaves no partial page behind.
pub struct Viewer {
    config: ViewConfig,
    tls: TlsClient,
    font: Box<dyn FontMetrics>,
    records: Vec<PlacementRecord>,
    scroll: ScrollState,
}

impl Viewer {
    /// Build a viewer with fixed-advance metrics derived from `config`.
    pub fn new(config: ViewConfig) -> Self {
        let font = Box::new(CharMetrics::from_config(&config));
        Self::with_metrics(config, font)
    }

    /// Build a viewer with an explicit metrics provider.
    pub fn with_metrics(config: ViewConfig, font: Box<dyn FontMetrics>) -> Self {
        let scroll = ScrollState::new(config.scroll_step);
        Self {
            config,
            tls: TlsClient::new(),
            font,
            records: Vec::new(),
            scroll,
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Navigate to `url_str`: parse, fetch, strip, lay out.
    ///
    /// On success the previous page is replaced and the scroll offset
    /// returns to the top. On any failure the error is returned, the
    /// connection is already closed, and the current page is kept.
    pub fn load(&mut self, url_str: &str) -> Result<&[PlacementRecord]> {
        let url = Url::parse(url_str)?;
        log::info!("loading {url}");

        let response = http::fetch(&url, &self.tls)?;
        let text = strip_tags(&response.body);
        self.records = layout::layout(&text, &self.config, self.font.as_ref());
        self.scroll.reset();

        log::info!(
            "{url}: status {}, {} token(s) laid out",
            response.status,
            self.records.len(),
        );
        Ok(&self.records)
    }

    /// The full record sequence for the current page.
    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    /// Apply a scroll command.
    pub fn handle(&mut self, command: ScrollCommand) {
        self.scroll.apply(command);
    }

    /// Current scroll offset; the painter shifts records by its
    /// negation.
    pub fn offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// Records inside the visible band at the current offset.
    pub fn visible(&self) -> Vec<&PlacementRecord> {
        cull(
            &self.records,
            self.scroll.offset(),
            self.config.viewport_height,
            self.font.line_height(),
        )
    }
}
