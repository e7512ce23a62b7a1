//! Shaped-text measurement for the two-phase vertical label layout.
//!
//! Glyph extents for arbitrary scripts are not known in advance, so the
//! vertical label layout emits a [`MeasurementRequest`] and the host answers
//! it with the rendered bounding box. [`text_measurer`] provides a
//! `cosmic-text` backed implementation of that host duty, and
//! [`MeasurementCache`] retains the last good box per request so a failed
//! measurement (rendering pipeline not yet attached) falls back to the prior
//! box instead of erroring.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::geometry::Size;

const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// A request for the host to measure the rendered bounding box of a text
/// block, emitted by the provisional pass of the vertical label layout.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRequest {
    content: String,
    font_size: f32,
}

impl MeasurementRequest {
    pub fn new(content: impl Into<String>, font_size: f32) -> Self {
        Self {
            content: content.into(),
            font_size,
        }
    }

    /// The text whose rendered extent must be measured.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Font size the text renders at, in canvas units.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Cache key identifying this request's content and style.
    pub fn cache_key(&self) -> String {
        format!("{}@{}", self.content, self.font_size)
    }
}

/// Retains the last successfully measured box per request.
///
/// A measurement can fail when the host's rendering pipeline is not yet
/// attached at measurement time. That case is recoverable: the prior box is
/// retained and measurement is re-attempted on the next content change.
#[derive(Debug, Default)]
pub struct MeasurementCache {
    boxes: HashMap<String, Size>,
}

impl MeasurementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached box for a request, if any.
    pub fn lookup(&self, request: &MeasurementRequest) -> Option<Size> {
        self.boxes.get(&request.cache_key()).copied()
    }

    /// Stores a freshly measured box for a request.
    pub fn store(&mut self, request: &MeasurementRequest, measured: Size) {
        self.boxes.insert(request.cache_key(), measured);
    }

    /// Records the outcome of a measurement attempt.
    ///
    /// A successful attempt (`Some`) replaces the cached box and returns it.
    /// A failed attempt (`None`) keeps and returns the prior box, if one
    /// exists.
    pub fn resolve(&mut self, request: &MeasurementRequest, measured: Option<Size>) -> Option<Size> {
        match measured {
            Some(size) => {
                self.store(request, size);
                Some(size)
            }
            None => self.lookup(request),
        }
    }
}

/// Returns the process-wide text measurer.
pub fn text_measurer() -> &'static TextMeasurer {
    static TEXT_MEASURER: OnceLock<TextMeasurer> = OnceLock::new();
    TEXT_MEASURER.get_or_init(TextMeasurer::new)
}

/// TextMeasurer handles text measurement and font operations.
/// It maintains a reusable FontSystem instance to avoid expensive recreation.
pub struct TextMeasurer {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextMeasurer {
    /// Create a new TextMeasurer with a default FontSystem
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Answer a [`MeasurementRequest`] with a shaped measurement.
    pub fn measure(&self, request: &MeasurementRequest) -> Size {
        self.calculate_text_size(request.content(), request.font_size())
    }

    /// Calculate the actual size of text in pixels using cosmic-text.
    ///
    /// This provides an accurate measurement based on real font metrics and
    /// shaping, including proper handling of ligatures and kerning.
    fn calculate_text_size(&self, text: &str, font_size: f32) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        // Lock the FontSystem for use
        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Create metrics with font size and approximate line height
        let line_height = font_size * 1.15;
        let metrics = Metrics::new(font_size, line_height);

        // Create a buffer with the metrics
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        // Set up text attributes
        let attrs = Attrs::new().family(Family::Name(DEFAULT_FONT_FAMILY));

        // Set the buffer's size to unlimited to allow text to flow naturally
        buffer.set_size(None, None);

        // Set the text with advanced shaping for accurate text metrics
        // Advanced shaping handles ligatures, kerning, etc.
        buffer.set_text(text, &attrs, Shaping::Advanced, None);

        // Shape the text to calculate layout
        buffer.shape_until_scroll(true);

        // Calculate bounds by examining layout runs to determine actual rendered size
        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        // Get height from line metrics or use default
        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                // Find rightmost glyph position
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                // Add line height for this run
                total_height += metrics.line_height;
            }
        } else {
            // Default size if no runs available
            max_width = text.len() as f32 * (font_size * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

impl std::fmt::Debug for TextMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextMeasurer").finish_non_exhaustive()
    }
}
