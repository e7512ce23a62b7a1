//! Station type descriptors and the process-wide registry.
//!
//! A descriptor is the unit of registration: an immutable bundle of
//! renderer, editor, default attributes, icon preview and picker metadata,
//! created once at startup and read-only thereafter. Dispatch over station
//! types is a table lookup by [`StationKind`]; adding a station type is
//! adding one table entry.

use std::sync::OnceLock;

use indexmap::IndexMap;
use log::debug;
use metrogram_core::{
    draw::{MeasurementCache, MeasurementRequest, SvgNode},
    geometry::Point,
};
use svg::node::element as svg_element;

use crate::{
    station::{
        StationAttrs, StationKind, classic, fields::StationEditor, plain,
        pointer::{PointerBinding, PointerHandlers},
    },
    theme::{CanvasKind, CategoryKind, CityTag},
};

/// Everything a renderer reads for one station render.
///
/// The outer document model owns the station instance; the context only
/// borrows its id, position and attribute record, alongside the live
/// pointer handlers and the host's measurement cache.
#[derive(Debug)]
pub struct RenderContext<'a> {
    id: &'a str,
    position: Point,
    attrs: &'a StationAttrs,
    handlers: &'a PointerHandlers<'a>,
    measurements: &'a MeasurementCache,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        id: &'a str,
        position: Point,
        attrs: &'a StationAttrs,
        handlers: &'a PointerHandlers<'a>,
        measurements: &'a MeasurementCache,
    ) -> Self {
        Self {
            id,
            position,
            attrs,
            handlers,
            measurements,
        }
    }

    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn attrs(&self) -> &'a StationAttrs {
        self.attrs
    }

    pub fn handlers(&self) -> &'a PointerHandlers<'a> {
        self.handlers
    }

    pub fn measurements(&self) -> &'a MeasurementCache {
        self.measurements
    }
}

/// The result of rendering one station.
///
/// The group is rooted at a `<g>` translated by the station position and
/// contains the core marker carrying the `stn_core_<id>` hit-test id. Any
/// pending measurement requests belong to rotated label blocks still on
/// their provisional transform; the host measures them, stores the boxes in
/// its [`MeasurementCache`] and renders again to apply the corrected
/// transforms.
#[derive(Debug)]
pub struct StationDrawing<'a> {
    group: svg_element::Group,
    core_id: String,
    binding: PointerBinding<'a>,
    pending: Vec<MeasurementRequest>,
}

impl<'a> StationDrawing<'a> {
    pub fn new(
        group: svg_element::Group,
        core_id: String,
        binding: PointerBinding<'a>,
        pending: Vec<MeasurementRequest>,
    ) -> Self {
        Self {
            group,
            core_id,
            binding,
            pending,
        }
    }

    /// The element id of the core marker, `stn_core_<id>`.
    pub fn core_id(&self) -> &str {
        &self.core_id
    }

    /// The pointer handlers attached to this drawing.
    pub fn binding(&self) -> &PointerBinding<'a> {
        &self.binding
    }

    /// Measurement requests awaiting the host, empty once refined.
    pub fn pending_measurements(&self) -> &[MeasurementRequest] {
        &self.pending
    }

    /// The drawable subtree, consuming the drawing.
    pub fn into_node(self) -> SvgNode {
        Box::new(self.group)
    }

    /// The drawable subtree rendered to its SVG text form.
    pub fn to_svg_string(&self) -> String {
        self.group.to_string()
    }
}

/// A station renderer: a pure mapping from render context to drawable.
///
/// Renderers own no state; label placement is delegated entirely to the
/// shared layout engine, parameterized by per-type style constants.
pub trait StationRenderer: Sync {
    fn render<'a>(&self, ctx: &RenderContext<'a>) -> StationDrawing<'a>;
}

/// Metadata the outer type picker filters on.
#[derive(Debug, Clone, Copy)]
pub struct StationMetadata {
    display_name_key: &'static str,
    cities: &'static [CityTag],
    canvases: &'static [CanvasKind],
    categories: &'static [CategoryKind],
    tags: &'static [&'static str],
}

impl StationMetadata {
    pub fn new(
        display_name_key: &'static str,
        cities: &'static [CityTag],
        canvases: &'static [CanvasKind],
        categories: &'static [CategoryKind],
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            display_name_key,
            cities,
            canvases,
            categories,
            tags,
        }
    }

    /// Translation key of the type's display name.
    pub fn display_name_key(&self) -> &'static str {
        self.display_name_key
    }

    pub fn cities(&self) -> &'static [CityTag] {
        self.cities
    }

    pub fn canvases(&self) -> &'static [CanvasKind] {
        self.canvases
    }

    pub fn categories(&self) -> &'static [CategoryKind] {
        self.categories
    }

    pub fn tags(&self) -> &'static [&'static str] {
        self.tags
    }
}

/// The immutable registration bundle of one station type.
pub struct StationDescriptor {
    kind: StationKind,
    renderer: &'static dyn StationRenderer,
    editor: &'static dyn StationEditor,
    icon: fn() -> SvgNode,
    default_attrs: fn() -> StationAttrs,
    metadata: StationMetadata,
}

impl StationDescriptor {
    pub fn new(
        kind: StationKind,
        renderer: &'static dyn StationRenderer,
        editor: &'static dyn StationEditor,
        icon: fn() -> SvgNode,
        default_attrs: fn() -> StationAttrs,
        metadata: StationMetadata,
    ) -> Self {
        Self {
            kind,
            renderer,
            editor,
            icon,
            default_attrs,
            metadata,
        }
    }

    pub fn kind(&self) -> StationKind {
        self.kind
    }

    pub fn renderer(&self) -> &'static dyn StationRenderer {
        self.renderer
    }

    pub fn editor(&self) -> &'static dyn StationEditor {
        self.editor
    }

    /// A fresh copy of the type's default attribute record.
    pub fn default_attrs(&self) -> StationAttrs {
        (self.default_attrs)()
    }

    /// The small icon preview shown by the type picker.
    pub fn icon(&self) -> SvgNode {
        (self.icon)()
    }

    pub fn metadata(&self) -> &StationMetadata {
        &self.metadata
    }
}

impl std::fmt::Debug for StationDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StationDescriptor")
            .field("kind", &self.kind)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// The process-wide descriptor table, populated on first use and read-only
/// thereafter.
pub fn registry() -> &'static IndexMap<StationKind, StationDescriptor> {
    static REGISTRY: OnceLock<IndexMap<StationKind, StationDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut table = IndexMap::new();
        for entry in [plain::descriptor(), classic::descriptor()] {
            debug!(kind = entry.kind().as_str(); "Registering station type");
            table.insert(entry.kind(), entry);
        }
        table
    })
}

/// Looks up the descriptor registered for a type tag.
pub fn descriptor(kind: StationKind) -> Option<&'static StationDescriptor> {
    registry().get(&kind)
}
