//! The classic station type: a themed circle marker with the full label
//! placement preference, bilingual stacked names, and vertical-text mode.

use metrogram_core::{
    color::Color,
    draw::{Drawable, SvgNode},
    geometry::Point,
    label::{
        Grow, LineSpec, MultilineText, NameOffsetX, NameOffsetY, RotatedText, Rotation,
        StackedText, block_offset, resolve_offset, split_lines,
    },
};
use svg::node::element as svg_element;

use crate::{
    station::{
        ClassicAttrs, StationAttrs, StationKind,
        descriptor::{
            RenderContext, StationDescriptor, StationDrawing, StationMetadata, StationRenderer,
        },
        fields::{CustomWidget, FieldKind, FieldSpec, FieldValue, SelectOption, StationEditor},
        pointer::{PointerBinding, core_element_id},
    },
    theme::{CanvasKind, CategoryKind, CityTag},
};

const RADIUS: f32 = 3.0;
const STROKE_WIDTH: f32 = 1.0;
const LABEL_DX: f32 = 5.0;
const LABEL_GAP: f32 = 1.0;
const VERTICAL_GAP: f32 = 2.0;
const LOCAL_FONT: f32 = 5.0;
const LOCAL_BASE: f32 = 1.5;
const LATIN_FONT: f32 = 10.0;
const LATIN_BASE: f32 = 1.0;

fn local_spec() -> LineSpec {
    LineSpec::new(LOCAL_FONT, LOCAL_FONT, LOCAL_BASE, Grow::Up)
}

fn latin_spec() -> LineSpec {
    LineSpec::new(LATIN_FONT, LATIN_FONT, LATIN_BASE, Grow::Down)
}

fn latin_fill() -> Color {
    Color::new("gray").unwrap()
}

/// The classic station type: renderer and editor in one.
pub struct ClassicStation;

impl ClassicStation {
    /// Vertical offset of the label anchor from the marker center.
    ///
    /// The anchor sits between the two language blocks: the local block
    /// grows up from it, the Latin block down. The block between the anchor
    /// and the marker determines the clearance, so the offset magnitude
    /// grows with that block's line count.
    fn label_dy(placement_y: NameOffsetY, local_lines: usize, latin_lines: usize) -> f32 {
        match placement_y {
            NameOffsetY::Top => {
                block_offset(latin_lines, LATIN_FONT, RADIUS + LABEL_GAP, -1.0)
            }
            NameOffsetY::Middle => LATIN_FONT / 2.0,
            NameOffsetY::Bottom => {
                block_offset(local_lines, LOCAL_FONT, RADIUS + LABEL_GAP, 1.0)
            }
        }
    }
}

impl StationRenderer for ClassicStation {
    fn render<'a>(&self, ctx: &RenderContext<'a>) -> StationDrawing<'a> {
        let fallback = ClassicAttrs::default();
        let attrs = ctx.attrs().as_classic().unwrap_or(&fallback);
        let placement = attrs.placement;

        let local_lines: Vec<String> = split_lines(attrs.names.get_or(0, &fallback.names))
            .into_iter()
            .map(str::to_string)
            .collect();
        let latin_lines: Vec<String> = split_lines(attrs.names.get_or(1, &fallback.names))
            .into_iter()
            .map(str::to_string)
            .collect();

        let resolved = resolve_offset(
            placement.offset_x(),
            placement.offset_y(),
            placement.text_vertical(),
            LABEL_DX,
        );

        let core = svg_element::Circle::new()
            .set("id", core_element_id(ctx.id()))
            .set("r", RADIUS)
            .set("stroke", attrs.color.primary())
            .set("stroke-width", STROKE_WIDTH)
            .set("fill", "white")
            .set("style", "cursor: move");

        let mut group = svg_element::Group::new()
            .set("id", ctx.id())
            .set(
                "transform",
                format!("translate({}, {})", ctx.position().x(), ctx.position().y()),
            )
            .add(core);
        let mut pending = Vec::new();

        if !placement.text_vertical() {
            let dy = Self::label_dy(placement.offset_y(), local_lines.len(), latin_lines.len());

            let mut label = svg_element::Group::new()
                .set("transform", format!("translate({}, {})", resolved.dx(), dy))
                .set("text-anchor", resolved.anchor().as_str());
            label = label.add(
                MultilineText::new(local_lines, local_spec())
                    .with_class("name-local")
                    .render_to_svg(Point::default()),
            );
            label = label.add(
                MultilineText::new(latin_lines, latin_spec())
                    .with_fill(latin_fill())
                    .with_class("name-latin")
                    .render_to_svg(Point::default()),
            );
            group = group.add(label);
        } else {
            let clearance = RADIUS + VERTICAL_GAP;
            let stacked = StackedText::new(
                local_lines,
                LineSpec::new(LOCAL_FONT, LOCAL_FONT, clearance, Grow::Up),
                resolved.polarity(),
            )
            .with_class("name-local");
            // The rotated Latin block sits just past the local columns
            let lateral = stacked.width() / 2.0 + LATIN_BASE;
            let rotated = RotatedText::new(
                latin_lines,
                latin_spec(),
                Rotation::Quarter,
                resolved.polarity(),
                clearance,
                lateral,
            )
            .with_fill(latin_fill())
            .with_class("name-latin");

            group = group.add(stacked.render_to_svg(Point::default()));

            let request = rotated.request();
            match ctx.measurements().lookup(&request) {
                Some(measured) => {
                    group = group.add(rotated.render_with(&rotated.refine(measured)));
                }
                None => {
                    let (provisional, request) = rotated.provisional();
                    group = group.add(provisional);
                    pending.push(request);
                }
            }
        }

        StationDrawing::new(
            group,
            core_element_id(ctx.id()),
            PointerBinding::new(ctx.id(), ctx.handlers()),
            pending,
        )
    }
}

fn offset_x_value(offset_x: NameOffsetX) -> &'static str {
    match offset_x {
        NameOffsetX::Left => "left",
        NameOffsetX::Middle => "middle",
        NameOffsetX::Right => "right",
    }
}

fn parse_offset_x(value: &str) -> Option<NameOffsetX> {
    match value {
        "left" => Some(NameOffsetX::Left),
        "middle" => Some(NameOffsetX::Middle),
        "right" => Some(NameOffsetX::Right),
        _ => None,
    }
}

fn offset_y_value(offset_y: NameOffsetY) -> &'static str {
    match offset_y {
        NameOffsetY::Top => "top",
        NameOffsetY::Middle => "middle",
        NameOffsetY::Bottom => "bottom",
    }
}

fn parse_offset_y(value: &str) -> Option<NameOffsetY> {
    match value {
        "top" => Some(NameOffsetY::Top),
        "middle" => Some(NameOffsetY::Middle),
        "bottom" => Some(NameOffsetY::Bottom),
        _ => None,
    }
}

impl StationEditor for ClassicStation {
    fn fields(&self, attrs: &StationAttrs) -> Vec<FieldSpec> {
        let fallback = ClassicAttrs::default();
        let attrs = attrs.as_classic().unwrap_or(&fallback);
        let placement = attrs.placement;

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
            FieldSpec::new(
                "offset_x",
                "panel.details.stations.common.nameOffsetX",
                FieldKind::Select {
                    options: vec![
                        SelectOption::new("left", "panel.details.stations.common.left"),
                        SelectOption::new("middle", "panel.details.stations.common.middle")
                            .with_disabled(placement.offset_y() == NameOffsetY::Middle),
                        SelectOption::new("right", "panel.details.stations.common.right"),
                    ],
                },
                FieldValue::Choice(offset_x_value(placement.offset_x()).to_string()),
            ),
            FieldSpec::new(
                "offset_y",
                "panel.details.stations.common.nameOffsetY",
                FieldKind::Select {
                    options: vec![
                        SelectOption::new("top", "panel.details.stations.common.top"),
                        SelectOption::new("middle", "panel.details.stations.common.middle")
                            .with_disabled(placement.offset_x() == NameOffsetX::Middle),
                        SelectOption::new("bottom", "panel.details.stations.common.bottom"),
                    ],
                },
                FieldValue::Choice(offset_y_value(placement.offset_y()).to_string()),
            ),
            FieldSpec::new(
                "text_vertical",
                "panel.details.stations.classic.textVertical",
                FieldKind::Switch {
                    disabled: !placement.allows_text_vertical(),
                },
                FieldValue::Toggle(placement.text_vertical()),
            ),
            FieldSpec::new(
                "color",
                "color",
                FieldKind::Custom {
                    widget: CustomWidget::ThemePicker {
                        default: fallback.color.clone(),
                    },
                },
                FieldValue::Theme(attrs.color.clone()),
            ),
        ]
    }

    fn apply(&self, attrs: &mut StationAttrs, field: &str, value: FieldValue) {
        let Some(attrs) = attrs.as_classic_mut() else {
            debug_assert!(false, "classic editor applied to a {} record", attrs.kind());
            return;
        };

        match (field, value) {
            ("name_local", FieldValue::Text(name)) => attrs.names.set(0, name),
            ("name_latin", FieldValue::Text(name)) => attrs.names.set(1, name),
            ("offset_x", FieldValue::Choice(value)) => match parse_offset_x(&value) {
                Some(offset_x) => attrs.placement.set_offset_x(offset_x),
                None => debug_assert!(false, "offset_x outside option set: {value}"),
            },
            ("offset_y", FieldValue::Choice(value)) => match parse_offset_y(&value) {
                Some(offset_y) => attrs.placement.set_offset_y(offset_y),
                None => debug_assert!(false, "offset_y outside option set: {value}"),
            },
            ("text_vertical", FieldValue::Toggle(on)) => attrs.placement.set_text_vertical(on),
            ("color", FieldValue::Theme(theme)) => attrs.color = theme,
            (field, value) => {
                debug_assert!(false, "invalid edit of classic field {field}: {value:?}");
            }
        }
    }
}

fn default_attrs() -> StationAttrs {
    StationAttrs::Classic(ClassicAttrs::default())
}

fn icon() -> SvgNode {
    let outer = svg_element::Circle::new()
        .set("cx", 12)
        .set("cy", 12)
        .set("r", 6)
        .set("fill", "currentColor");
    let inner = svg_element::Circle::new()
        .set("cx", 12)
        .set("cy", 12)
        .set("r", 4)
        .set("fill", "white");
    Box::new(
        svg_element::SVG::new()
            .set("viewBox", "0 0 24 24")
            .add(outer)
            .add(inner),
    )
}

pub(super) fn descriptor() -> StationDescriptor {
    StationDescriptor::new(
        StationKind::Classic,
        &ClassicStation,
        &ClassicStation,
        icon,
        default_attrs,
        StationMetadata::new(
            "panel.details.stations.classic.displayName",
            &[CityTag::Generic, CityTag::Shanghai],
            &[CanvasKind::RailMap],
            &[CategoryKind::Metro],
            &["bilingual"],
        ),
    )
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use metrogram_core::draw::MeasurementCache;

    use super::*;
    use crate::station::pointer::{PointerEvent, PointerHandlers};

    fn noop(_: &str, _: &PointerEvent) {}

    fn render_with_cache(attrs: &StationAttrs, cache: &MeasurementCache) -> (String, usize) {
        let handlers = PointerHandlers::new(&noop, &noop, &noop);
        let ctx = RenderContext::new("c1", Point::new(100.0, 50.0), attrs, &handlers, cache);
        let drawing = ClassicStation.render(&ctx);
        let pending = drawing.pending_measurements().len();
        (drawing.to_svg_string(), pending)
    }

    #[test]
    fn test_label_dy_counts_adjacent_block_lines() {
        // Above the marker, the Latin block sits between anchor and marker
        let one = ClassicStation::label_dy(NameOffsetY::Top, 2, 1);
        let two = ClassicStation::label_dy(NameOffsetY::Top, 2, 2);
        assert!(two < one, "more Latin lines must push the anchor further up");

        // Below the marker, the local block does
        let one = ClassicStation::label_dy(NameOffsetY::Bottom, 1, 1);
        let two = ClassicStation::label_dy(NameOffsetY::Bottom, 2, 1);
        assert!(two > one);
    }

    #[test]
    fn test_label_dy_middle_ignores_line_count() {
        assert_approx_eq!(
            f32,
            ClassicStation::label_dy(NameOffsetY::Middle, 1, 1),
            ClassicStation::label_dy(NameOffsetY::Middle, 4, 4)
        );
    }

    #[test]
    fn test_render_uses_theme_stroke() {
        let attrs = default_attrs();
        let cache = MeasurementCache::new();
        let (rendered, _) = render_with_cache(&attrs, &cache);
        assert!(rendered.contains("stn_core_c1"));
        assert!(rendered.contains("translate(100, 50)"));
    }

    #[test]
    fn test_render_horizontal_has_no_pending_measurements() {
        let attrs = default_attrs();
        let cache = MeasurementCache::new();
        let (_, pending) = render_with_cache(&attrs, &cache);
        assert_eq!(pending, 0);
    }

    #[test]
    fn test_render_vertical_requests_then_refines() {
        let mut classic = ClassicAttrs::default();
        classic.placement.set_offset_x(NameOffsetX::Middle);
        classic.placement.set_text_vertical(true);
        let attrs = StationAttrs::Classic(classic);

        let mut cache = MeasurementCache::new();
        let (provisional, pending) = render_with_cache(&attrs, &cache);
        assert_eq!(pending, 1);

        // The host measures and renders again; the refined transform
        // replaces the provisional one and nothing is pending
        let request = metrogram_core::draw::MeasurementRequest::new("Central", LATIN_FONT);
        cache.store(&request, metrogram_core::geometry::Size::new(34.0, 11.5));
        let (refined, pending) = render_with_cache(&attrs, &cache);
        assert_eq!(pending, 0);
        assert_ne!(provisional, refined);
    }

    #[test]
    fn test_render_idempotent_without_measurement_change() {
        let attrs = default_attrs();
        let cache = MeasurementCache::new();
        let (first, _) = render_with_cache(&attrs, &cache);
        let (second, _) = render_with_cache(&attrs, &cache);
        assert_eq!(first, second);
    }

    #[test]
    fn test_editor_fields_round_trip() {
        let mut attrs = default_attrs();
        let before = attrs.clone();

        for field in ClassicStation.fields(&before) {
            ClassicStation.apply(&mut attrs, field.key(), field.value().clone());
        }
        assert_eq!(attrs, before);
    }

    #[test]
    fn test_editor_disables_middle_cross_axis() {
        let mut classic = ClassicAttrs::default();
        classic.placement.set_offset_y(NameOffsetY::Middle);
        let attrs = StationAttrs::Classic(classic);

        let fields = ClassicStation.fields(&attrs);
        let offset_x = fields.iter().find(|field| field.key() == "offset_x").unwrap();
        let FieldKind::Select { options } = offset_x.kind() else {
            panic!("offset_x must be a select");
        };
        let middle = options.iter().find(|option| option.value() == "middle").unwrap();
        assert!(middle.disabled());
    }

    #[test]
    fn test_editor_disables_vertical_toggle() {
        let attrs = default_attrs(); // offset_x = right
        let fields = ClassicStation.fields(&attrs);
        let toggle = fields
            .iter()
            .find(|field| field.key() == "text_vertical")
            .unwrap();
        assert!(matches!(toggle.kind(), FieldKind::Switch { disabled: true }));
    }

    #[test]
    fn test_editor_updates_enforce_exclusions() {
        let mut classic = ClassicAttrs::default();
        classic.placement.set_offset_x(NameOffsetX::Middle);
        classic.placement.set_text_vertical(true);
        let mut attrs = StationAttrs::Classic(classic);

        // Moving the label off-center through the editor must force the
        // vertical-text mode off as part of the same update
        ClassicStation.apply(
            &mut attrs,
            "offset_x",
            FieldValue::Choice(String::from("left")),
        );
        let placement = attrs.as_classic().unwrap().placement;
        assert_eq!(placement.offset_x(), NameOffsetX::Left);
        assert!(!placement.text_vertical());
    }
}
