//! Station types and their shared contracts.
//!
//! A station type bundles four things into one registered
//! [`StationDescriptor`]: a renderer, an attribute editor, a default
//! attribute record and an icon preview, plus the metadata a type picker
//! filters on. This module owns the contracts shared by all types
//! (attribute records, pointer-event forwarding, declarative editor fields)
//! and the concrete [`PlainStation`] and [`ClassicStation`] types.

mod attributes;
mod classic;
mod descriptor;
mod fields;
mod plain;
mod pointer;

pub use attributes::{ClassicAttrs, NameSet, PlainAttrs, StationAttrs};
pub use classic::ClassicStation;
pub use descriptor::{
    RenderContext, StationDescriptor, StationDrawing, StationMetadata, StationRenderer,
    descriptor, registry,
};
pub use fields::{
    AttributeSession, CustomWidget, FieldKind, FieldSpec, FieldValue, SelectOption, StationEditor,
};
pub use plain::PlainStation;
pub use pointer::{
    PointerBinding, PointerCallback, PointerEvent, PointerHandlers, PointerPhase,
    core_element_id, station_id_from_element,
};

use serde::{Deserialize, Serialize};

/// Tag identifying a registered station type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationKind {
    Plain,
    Classic,
}

impl StationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Classic => "classic",
        }
    }
}

impl std::fmt::Display for StationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
