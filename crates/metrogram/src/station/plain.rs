//! The plain station type: a bare circle marker with its names stacked
//! below.

use metrogram_core::{
    draw::{Drawable, SvgNode},
    geometry::Point,
    label::{
        Grow, LineSpec, MultilineText, NameOffsetX, NameOffsetY, block_offset, resolve_offset,
        split_lines,
    },
};
use svg::node::element as svg_element;

use crate::{
    station::{
        PlainAttrs, StationAttrs, StationKind,
        descriptor::{
            RenderContext, StationDescriptor, StationDrawing, StationMetadata, StationRenderer,
        },
        fields::{FieldKind, FieldSpec, FieldValue, StationEditor},
        pointer::{PointerBinding, core_element_id},
    },
    theme::{CanvasKind, CategoryKind, CityTag},
};

const RADIUS: f32 = 5.0;
const STROKE_WIDTH: f32 = 1.0;
const LABEL_GAP: f32 = 1.5;
const LOCAL_FONT: f32 = 10.0;
const LATIN_FONT: f32 = 5.0;

fn local_spec() -> LineSpec {
    LineSpec::new(LOCAL_FONT, LOCAL_FONT, RADIUS + LABEL_GAP, Grow::Down)
}

/// The Latin block hangs below however many local-script lines there are.
fn latin_spec(local_lines: usize) -> LineSpec {
    let base = block_offset(local_lines, LOCAL_FONT, RADIUS + LABEL_GAP, 1.0);
    LineSpec::new(LATIN_FONT, LATIN_FONT, base, Grow::Down)
}

/// The plain station type: renderer and editor in one.
pub struct PlainStation;

impl StationRenderer for PlainStation {
    fn render<'a>(&self, ctx: &RenderContext<'a>) -> StationDrawing<'a> {
        let fallback = PlainAttrs::default();
        let attrs = ctx.attrs().as_plain().unwrap_or(&fallback);

        let local_lines: Vec<String> = split_lines(attrs.names.get_or(0, &fallback.names))
            .into_iter()
            .map(str::to_string)
            .collect();
        let latin_lines: Vec<String> = split_lines(attrs.names.get_or(1, &fallback.names))
            .into_iter()
            .map(str::to_string)
            .collect();

        let core = svg_element::Circle::new()
            .set("id", core_element_id(ctx.id()))
            .set("r", RADIUS)
            .set("stroke", "black")
            .set("stroke-width", STROKE_WIDTH)
            .set("fill", "white")
            .set("style", "cursor: move");

        // Plain labels always sit centered under the marker
        let resolved = resolve_offset(NameOffsetX::Middle, NameOffsetY::Bottom, false, 0.0);
        let latin = latin_spec(local_lines.len());
        let mut label = svg_element::Group::new().set("text-anchor", resolved.anchor().as_str());
        label = label.add(
            MultilineText::new(local_lines, local_spec())
                .with_class("name-local")
                .render_to_svg(Point::default()),
        );
        label = label.add(
            MultilineText::new(latin_lines, latin)
                .with_class("name-latin")
                .render_to_svg(Point::default()),
        );

        let group = svg_element::Group::new()
            .set("id", ctx.id())
            .set(
                "transform",
                format!("translate({}, {})", ctx.position().x(), ctx.position().y()),
            )
            .add(core)
            .add(label);

        StationDrawing::new(
            group,
            core_element_id(ctx.id()),
            PointerBinding::new(ctx.id(), ctx.handlers()),
            Vec::new(),
        )
    }
}

impl StationEditor for PlainStation {
    fn fields(&self, attrs: &StationAttrs) -> Vec<FieldSpec> {
        let fallback = PlainAttrs::default();
        let attrs = attrs.as_plain().unwrap_or(&fallback);

        vec![
            FieldSpec::new(
                "name_local",
                "panel.details.stations.common.nameLocal",
                FieldKind::Textarea,
                FieldValue::Text(attrs.names.get_or(0, &fallback.names).to_string()),
            ),
            FieldSpec::new(
                "name_latin",
                "panel.details.stations.common.nameEn",
                FieldKind::Textarea,
                FieldValue::Text(attrs.names.get_or(1, &fallback.names).to_string()),
            ),
        ]
    }

    fn apply(&self, attrs: &mut StationAttrs, field: &str, value: FieldValue) {
        let Some(attrs) = attrs.as_plain_mut() else {
            debug_assert!(false, "plain editor applied to a {} record", attrs.kind());
            return;
        };

        match (field, value) {
            ("name_local", FieldValue::Text(name)) => attrs.names.set(0, name),
            ("name_latin", FieldValue::Text(name)) => attrs.names.set(1, name),
            (field, value) => {
                debug_assert!(false, "invalid edit of plain field {field}: {value:?}");
            }
        }
    }
}

fn default_attrs() -> StationAttrs {
    StationAttrs::Plain(PlainAttrs::default())
}

fn icon() -> SvgNode {
    let circle = svg_element::Circle::new()
        .set("cx", 12)
        .set("cy", 12)
        .set("r", 5)
        .set("stroke", "currentColor")
        .set("fill", "white");
    Box::new(svg_element::SVG::new().set("viewBox", "0 0 24 24").add(circle))
}

pub(super) fn descriptor() -> StationDescriptor {
    StationDescriptor::new(
        StationKind::Plain,
        &PlainStation,
        &PlainStation,
        icon,
        default_attrs,
        StationMetadata::new(
            "panel.details.stations.plain.displayName",
            &[CityTag::Generic],
            &[CanvasKind::RailMap, CanvasKind::LineDiagram],
            &[CategoryKind::Metro],
            &[],
        ),
    )
}
