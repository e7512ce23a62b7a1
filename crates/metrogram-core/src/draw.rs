//! Drawable Components for Map Rendering
//!
//! This module provides the drawable abstraction used by station renderers
//! and the label layout engine. All drawable components implement the
//! [`Drawable`] trait, which provides a consistent interface for rendering
//! to SVG and estimating size. It also hosts the layered output collection
//! a canvas composes into a document, and the shaped-text measurement
//! service used by the two-phase vertical label layout.

mod layer;
mod measure;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use measure::{MeasurementCache, MeasurementRequest, TextMeasurer, text_measurer};

use crate::geometry::{Point, Size};

pub trait Drawable: std::fmt::Debug {
    fn render_to_svg(&self, position: Point) -> Box<dyn svg::Node>;
    fn size(&self) -> Size;
}
