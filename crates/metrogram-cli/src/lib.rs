//! Command-line preview renderer for Metrogram station documents.
//!
//! Reads a TOML station document, renders every station through its
//! registered descriptor, answers the label layout's measurement requests
//! with the shaped-text measurement service, and writes the assembled SVG
//! document.

pub mod config;
pub mod document;
mod error;

use clap::Parser;
use log::{debug, info};
use metrogram::station::{
    PointerEvent, PointerHandlers, RenderContext, StationDrawing, descriptor,
};
use metrogram_core::{
    draw::{LayeredOutput, MeasurementCache, RenderLayer, text_measurer},
    geometry::{Bounds, Insets, Point, Size},
};
use std::fs;
use svg::node::element as svg_element;

pub use config::AppConfig;
pub use error::MetrogramError;

use document::{MapDocument, StationRecord};

// Canvas space reserved around the merged marker bounds for labels
const DOCUMENT_MARGIN: f32 = 40.0;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Path to the input station document
    #[arg(help = "Path to the input station document")]
    pub file: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to an optional style configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

pub fn run(cfg: &Config) -> Result<(), MetrogramError> {
    info!(
        input_path = cfg.file,
        output_path = cfg.output;
        "Rendering station document",
    );

    let content = fs::read_to_string(&cfg.file)?;
    let mut document = MapDocument::from_toml(&content)?;
    document.normalize();
    debug!(stations_len = document.stations().len(); "Parsed station document");

    let app_config = match &cfg.config {
        Some(path) => AppConfig::from_toml(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };

    let rendered = render_document(&document, &app_config)?;
    svg::save(&cfg.output, &rendered)?;

    info!(output_file = cfg.output; "SVG exported successfully");
    Ok(())
}

/// Renders a whole document, running the two-phase measurement protocol
/// for any rotated label blocks.
fn render_document(
    document: &MapDocument,
    config: &AppConfig,
) -> Result<svg::Document, MetrogramError> {
    let noop = |_: &str, _: &PointerEvent| {};
    // A headless host never dispatches pointer gestures, but the render
    // contract still wires the callbacks through
    let handlers = PointerHandlers::new(&noop, &noop, &noop);

    let mut cache = MeasurementCache::new();

    // Phase 1: provisional renders surface the measurement requests
    let mut requests = Vec::new();
    for station in document.stations() {
        let drawing = render_station(station, &handlers, &cache)?;
        requests.extend(drawing.pending_measurements().iter().cloned());
    }

    for request in &requests {
        let measured = text_measurer().measure(request);
        debug!(
            content = request.content(),
            width = measured.width(),
            height = measured.height();
            "Measured label block",
        );
        cache.resolve(request, Some(measured));
    }

    // Phase 2: every drawing renders on its corrected transform
    let mut output = LayeredOutput::new();
    let mut bounds: Option<Bounds> = None;
    for station in document.stations() {
        let drawing = render_station(station, &handlers, &cache)?;

        let station_bounds = Point::new(station.x(), station.y()).to_bounds(Size::default());
        bounds = Some(match bounds {
            Some(merged) => merged.merge(&station_bounds),
            None => station_bounds,
        });

        output.add_to_layer(RenderLayer::Station, drawing.into_node());
    }

    let bounds = bounds
        .unwrap_or_else(|| Point::default().to_bounds(Size::new(120.0, 120.0)))
        .add_padding(Insets::uniform(DOCUMENT_MARGIN));

    if let Some(color) = config
        .style()
        .background_color()
        .map_err(MetrogramError::Config)?
    {
        let backdrop = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", &color);
        output.add_to_layer(RenderLayer::Background, Box::new(backdrop));
    }

    let mut rendered = svg::Document::new().set(
        "viewBox",
        (bounds.min_x(), bounds.min_y(), bounds.width(), bounds.height()),
    );
    for node in output.render() {
        rendered = rendered.add(node);
    }

    Ok(rendered)
}

fn render_station<'a>(
    station: &'a StationRecord,
    handlers: &'a PointerHandlers<'a>,
    cache: &'a MeasurementCache,
) -> Result<StationDrawing<'a>, MetrogramError> {
    let entry = descriptor(station.attrs().kind())
        .ok_or_else(|| MetrogramError::UnknownStation(station.attrs().kind().to_string()))?;

    let ctx = RenderContext::new(
        station.id(),
        Point::new(station.x(), station.y()),
        station.attrs(),
        handlers,
        cache,
    );
    Ok(entry.renderer().render(&ctx))
}
