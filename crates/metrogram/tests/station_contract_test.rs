use metrogram::station::{
    AttributeSession, ClassicAttrs, FieldValue, PointerEvent, PointerHandlers, RenderContext,
    StationAttrs, StationKind, descriptor,
};
use metrogram_core::{
    draw::{MeasurementCache, MeasurementRequest},
    geometry::{Point, Size},
    label::{LabelPlacement, NameOffsetX, NameOffsetY},
};
use proptest::prelude::*;

fn noop(_: &str, _: &PointerEvent) {}

fn classic_attrs(names: (&str, &str), placement: LabelPlacement) -> StationAttrs {
    let mut attrs = ClassicAttrs::default();
    attrs.names.set(0, names.0);
    attrs.names.set(1, names.1);
    attrs.placement = placement;
    StationAttrs::Classic(attrs)
}

fn render(attrs: &StationAttrs, cache: &MeasurementCache) -> (String, usize) {
    let handlers = PointerHandlers::new(&noop, &noop, &noop);
    let ctx = RenderContext::new("s1", Point::new(0.0, 0.0), attrs, &handlers, cache);
    let drawing = descriptor(attrs.kind())
        .expect("kind is registered")
        .renderer()
        .render(&ctx);
    let pending = drawing.pending_measurements().len();
    (drawing.to_svg_string(), pending)
}

// Scenario A: horizontal = right, vertical = top, a two-line local name
// and a one-line Latin name. The label block anchors right of the marker
// with the local lines stacked upward and the Latin line below.
#[test]
fn scenario_right_top_bilingual_stack() {
    let placement = LabelPlacement::new(NameOffsetX::Right, NameOffsetY::Top, false);
    let attrs = classic_attrs(("老街\n城南", "Old Town"), placement);

    let cache = MeasurementCache::new();
    let (rendered, pending) = render(&attrs, &cache);
    assert_eq!(pending, 0);

    // dx +5; the one Latin line below the anchor clears the marker by
    // 1 * 10 + (radius 3 + gap 1) = 14
    assert!(rendered.contains(r#"transform="translate(5, -14)""#));
    assert!(rendered.contains(r#"text-anchor="start""#));

    // Local lines grow upward from the anchor: bottom line at -1.5,
    // the one above at -6.5
    assert!(rendered.contains(r#"y="-1.5""#));
    assert!(rendered.contains(r#"y="-6.5""#));
    // The Latin line grows downward per its own growth direction
    assert!(rendered.contains(r#"y="1""#));
}

// Scenario B: horizontal = middle, vertical = middle. Vertical-text mode is
// forced off even if previously engaged, and dx resolves to zero.
#[test]
fn scenario_middle_middle_forces_vertical_off() {
    let placement = LabelPlacement::new(NameOffsetX::Middle, NameOffsetY::Middle, true);
    assert!(!placement.text_vertical());

    let attrs = classic_attrs(("中环", "Central"), placement);
    let cache = MeasurementCache::new();
    let (rendered, pending) = render(&attrs, &cache);
    assert_eq!(pending, 0);

    // The label sits on the anchor itself, horizontally centered
    assert!(rendered.contains(r#"transform="translate(0, 5)""#));
    assert!(rendered.contains(r#"text-anchor="middle""#));
}

// Scenario C: vertical-text mode engaged. Phase 1 renders a provisional
// transform; phase 2's measurement repositions the rotated block so its
// visual center, not its untransformed origin, aligns with the anchor.
#[test]
fn scenario_vertical_two_phase_repositioning() {
    let placement = LabelPlacement::new(NameOffsetX::Middle, NameOffsetY::Top, true);
    let attrs = classic_attrs(("中环", "Joy"), placement);

    let mut cache = MeasurementCache::new();
    let (provisional, pending) = render(&attrs, &cache);
    assert_eq!(pending, 1);
    assert!(provisional.contains("rotate(90)"));

    // Host measures the committed provisional render: a synthetic box for
    // the 3-character name, wider than the glyph-cell estimate
    cache.store(&MeasurementRequest::new("Joy", 10.0), Size::new(34.0, 11.5));

    let (refined, pending) = render(&attrs, &cache);
    assert_eq!(pending, 0);
    assert_ne!(provisional, refined);

    // One local column of width 5 puts the rotated block at lateral
    // 5/2 + 1 = 3.5; its center sits clearance (3 + 2) + 34/2 above
    assert!(refined.contains(r#"transform="translate(3.5, -22) rotate(90)""#));
}

#[test]
fn renderer_is_idempotent_for_identical_inputs() {
    let placement = LabelPlacement::new(NameOffsetX::Middle, NameOffsetY::Top, true);
    let attrs = classic_attrs(("中环", "Joy"), placement);
    let cache = MeasurementCache::new();

    let (first, _) = render(&attrs, &cache);
    let (second, _) = render(&attrs, &cache);
    assert_eq!(first, second);
}

#[test]
fn editor_session_commits_staged_record() {
    let entry = descriptor(StationKind::Classic).unwrap();
    let attrs = entry.default_attrs();

    let mut session = AttributeSession::open("s1", entry.editor(), &attrs);
    let mut commits = Vec::new();
    session.apply(
        "name_latin",
        FieldValue::Text(String::from("Riverside")),
        &mut |id, staged| commits.push((id.to_string(), staged.clone())),
    );

    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].0, "s1");
    let staged = commits[0].1.as_classic().unwrap();
    assert_eq!(staged.names.get(1), Some("Riverside"));
    // The owner's record is only touched through the commit callback
    assert_eq!(
        attrs.as_classic().unwrap().names.get(1),
        Some("Central")
    );
}

#[test]
fn editor_round_trip_preserves_defaults() {
    for entry in metrogram::station::registry().values() {
        let defaults = entry.default_attrs();
        let mut attrs = defaults.clone();

        let mut session = AttributeSession::open("s1", entry.editor(), &defaults);
        for field in session.fields() {
            session.apply(field.key(), field.value().clone(), &mut |_, _| {});
        }
        for field in entry.editor().fields(&defaults) {
            entry.editor().apply(&mut attrs, field.key(), field.value().clone());
        }

        assert_eq!(session.attrs(), &defaults, "{} session drifted", entry.kind());
        assert_eq!(attrs, defaults, "{} record drifted", entry.kind());
    }
}

#[derive(Debug, Clone)]
enum Edit {
    OffsetX(&'static str),
    OffsetY(&'static str),
    Vertical(bool),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        prop_oneof![Just("left"), Just("middle"), Just("right")].prop_map(Edit::OffsetX),
        prop_oneof![Just("top"), Just("middle"), Just("bottom")].prop_map(Edit::OffsetY),
        any::<bool>().prop_map(Edit::Vertical),
    ]
}

proptest! {
    // The placement exclusions hold after any editor update sequence.
    #[test]
    fn editor_updates_never_violate_exclusions(
        edits in proptest::collection::vec(edit_strategy(), 0..24)
    ) {
        let entry = descriptor(StationKind::Classic).unwrap();
        let mut attrs = entry.default_attrs();

        for edit in edits {
            let (field, value) = match edit {
                Edit::OffsetX(value) => ("offset_x", FieldValue::Choice(value.to_string())),
                Edit::OffsetY(value) => ("offset_y", FieldValue::Choice(value.to_string())),
                Edit::Vertical(on) => ("text_vertical", FieldValue::Toggle(on)),
            };
            entry.editor().apply(&mut attrs, field, value);

            let placement = attrs.as_classic().unwrap().placement;
            if placement.offset_x() != NameOffsetX::Middle {
                prop_assert!(!placement.text_vertical());
            }
            if placement.offset_y() == NameOffsetY::Middle {
                prop_assert!(!placement.text_vertical());
            }
        }
    }
}
