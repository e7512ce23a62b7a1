//! Pointer-event forwarding between the canvas and station renderers.
//!
//! The canvas resolves which station a native pointer event targets by
//! hit-testing on the core marker's element id, which embeds the station id
//! using the fixed `stn_core_<id>` pattern. That pattern is a compatibility
//! contract, not an implementation detail. Handlers are dispatched
//! synchronously, may fire repeatedly per gesture (move events), and must
//! not block.

use metrogram_core::geometry::Point;

const CORE_ID_PREFIX: &str = "stn_core_";

/// Position of a pointer event in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    position: Point,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A pointer callback, invoked with the originating station id and the
/// native event.
pub type PointerCallback<'a> = dyn Fn(&str, &PointerEvent) + 'a;

/// The three pointer callbacks the canvas supplies per render.
pub struct PointerHandlers<'a> {
    on_down: &'a PointerCallback<'a>,
    on_move: &'a PointerCallback<'a>,
    on_up: &'a PointerCallback<'a>,
}

impl<'a> PointerHandlers<'a> {
    pub fn new(
        on_down: &'a PointerCallback<'a>,
        on_move: &'a PointerCallback<'a>,
        on_up: &'a PointerCallback<'a>,
    ) -> Self {
        Self {
            on_down,
            on_move,
            on_up,
        }
    }

    /// Invokes the callback for `phase` with `(id, event)`.
    pub fn dispatch(&self, phase: PointerPhase, id: &str, event: &PointerEvent) {
        match phase {
            PointerPhase::Down => (self.on_down)(id, event),
            PointerPhase::Move => (self.on_move)(id, event),
            PointerPhase::Up => (self.on_up)(id, event),
        }
    }
}

impl std::fmt::Debug for PointerHandlers<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerHandlers").finish_non_exhaustive()
    }
}

/// The handlers of one rendered station, bound to its id.
///
/// The canvas routes a native event to the drawing it hit-tested and calls
/// [`PointerBinding::dispatch`] without inspecting the SVG structure.
#[derive(Debug)]
pub struct PointerBinding<'a> {
    id: &'a str,
    handlers: &'a PointerHandlers<'a>,
}

impl<'a> PointerBinding<'a> {
    pub fn new(id: &'a str, handlers: &'a PointerHandlers<'a>) -> Self {
        Self { id, handlers }
    }

    pub fn id(&self) -> &str {
        self.id
    }

    pub fn dispatch(&self, phase: PointerPhase, event: &PointerEvent) {
        self.handlers.dispatch(phase, self.id, event);
    }
}

/// The element id of a station's core marker: `stn_core_<id>`.
pub fn core_element_id(id: &str) -> String {
    format!("{CORE_ID_PREFIX}{id}")
}

/// Recovers the station id from a core marker element id.
pub fn station_id_from_element(element_id: &str) -> Option<&str> {
    element_id.strip_prefix(CORE_ID_PREFIX)
}
